//! Questlog Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Questlog: categories,
//! point-valued tasks, goals, and the points ledger derived from them.
//! It is storage-agnostic and defines repository traits that are implemented
//! by the `storage-rest` crate against the hosted data API.

pub mod categories;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod goals;
pub mod ledger;
pub mod tasks;

// Re-export the ledger types; every presentation surface consumes them
pub use ledger::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
