//! Core error types for the Questlog application.
//!
//! This module defines storage-agnostic error types. Store-specific errors
//! (HTTP status codes, decode failures, etc.) are converted to these types
//! by the storage layer.

use thiserror::Error;

use crate::goals::GoalError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// Store-specific errors are wrapped in string form to keep this type
/// storage-agnostic. None of these variants is fatal: a failed store write
/// leaves the last successfully fetched state in place and the caller
/// surfaces the error to the user.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Goal error: {0}")]
    Goal(#[from] GoalError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for remote store operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert store-specific failures (HTTP, serde, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to reach the hosted data API.
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),

    /// The store rejected the session credentials.
    #[error("Store rejected credentials: {0}")]
    Unauthorized(String),

    /// A store query failed to execute.
    #[error("Store query failed: {0}")]
    QueryFailed(String),

    /// The requested row was not found, or its owner did not match.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated (e.g., deleting a category
    /// that tasks still reference).
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Internal/unexpected store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
///
/// Field constraints mirror what the forms enforce upstream; the services
/// re-check them before a row reaches the store.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Value for '{field}' must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for Error {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Error::Unexpected(err.to_string())
    }
}
