//! # Store Errors
//!
//! Error types for the document store adapter.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the document store adapter
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The store handle was never initialized (connection failure at startup)
    #[error("Database service not available.")]
    Unavailable,

    /// A collection lock was poisoned by a panicking writer
    #[error("Collection lock poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message() {
        // The message doubles as the 503 response detail; keep it stable.
        assert_eq!(
            StoreError::Unavailable.to_string(),
            "Database service not available."
        );
    }
}
