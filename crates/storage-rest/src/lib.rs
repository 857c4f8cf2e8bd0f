//! Hosted data API storage implementation for Questlog.
//!
//! This crate provides all remote-store functionality against the hosted
//! row-based data API (PostgREST dialect). It implements the repository
//! traits defined in `questlog-core` and contains:
//! - The HTTP client with session credentials and query building
//! - Wire row types per table and their domain conversions
//! - Repository implementations for all domain entities
//!
//! # Architecture
//!
//! This crate is the only place in the application where HTTP dependencies
//! exist. `core` is storage-agnostic and works with traits.
//!
//! ```text
//!         core (domain)
//!               │
//!               ▼
//!     storage-rest (this crate)
//!               │
//!               ▼
//!      hosted data API (per-table CRUD,
//!      eq/ilike filters, owner scoping)
//! ```
//!
//! Every read and write is scoped by the owner identifier supplied by the
//! identity collaborator; each write is atomic at the row level and no
//! retries are attempted here.

pub mod client;
pub mod config;
pub mod errors;

// Repository implementations
pub mod categories;
pub mod goals;
pub mod tasks;

pub use client::{Filter, Order, QuerySpec, RestClient};
pub use config::RestConfig;
pub use errors::StorageError;

// Re-export from questlog-core for convenience
pub use questlog_core::errors::{DatabaseError, Error, Result};
