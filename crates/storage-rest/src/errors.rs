//! Storage-specific error types for the hosted data API.
//!
//! This module provides error types that wrap HTTP and decode failures and
//! convert them to the storage-agnostic error types defined in
//! `questlog_core`.

use thiserror::Error;

use questlog_core::errors::{DatabaseError, Error};
use reqwest::StatusCode;

/// Storage-specific errors that wrap reqwest and serde types.
///
/// These errors are internal to the storage layer and are converted to
/// `questlog_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Credentials rejected: {0}")]
    Unauthorized(String),

    #[error("Row not found: {0}")]
    NotFound(String),

    #[error("Constraint conflict: {0}")]
    Conflict(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl StorageError {
    /// Maps a non-success HTTP status and response body to a storage error.
    ///
    /// 409 is what the store returns when a foreign key blocks a write,
    /// e.g. deleting a category that tasks still reference.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StorageError::Unauthorized(message),
            StatusCode::NOT_FOUND => StorageError::NotFound(message),
            StatusCode::CONFLICT => StorageError::Conflict(message),
            _ => StorageError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Network(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::Decode(e) => Error::Database(DatabaseError::Internal(e.to_string())),
            StorageError::Unauthorized(msg) => Error::Database(DatabaseError::Unauthorized(msg)),
            StorageError::NotFound(msg) => Error::Database(DatabaseError::NotFound(msg)),
            StorageError::Conflict(msg) => {
                Error::Database(DatabaseError::ForeignKeyViolation(msg))
            }
            StorageError::Api { status, message } => Error::Database(DatabaseError::QueryFailed(
                format!("status {}: {}", status, message),
            )),
        }
    }
}
