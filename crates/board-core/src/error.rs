//! Storage-level error types.

use thiserror::Error;

/// Errors raised by the storage gateway and propagated unchanged through the
/// repository.
///
/// A missing post is not an error: lookups return `Option::None` instead.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Schema creation or connection failure at startup. Fatal.
    #[error("Storage initialization failed: {0}")]
    Init(String),

    /// Any statement failure after startup.
    #[error("Query execution failed: {0}")]
    Query(String),

    /// A stored row could not be mapped into a domain type.
    #[error("Malformed row: {0}")]
    Decode(String),

    #[error("Storage connection is closed")]
    Closed,
}
