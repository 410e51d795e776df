//! # Mapping Errors

use thiserror::Error;

/// Result type for document mapping
pub type MapResult<T> = Result<T, MapError>;

/// Errors raised while mapping store documents to fixed-shape records
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MapError {
    /// A stored document is missing a field or holds the wrong type
    #[error("corrupt {collection} record: bad field '{field}'")]
    CorruptRecord {
        collection: &'static str,
        field: &'static str,
    },
}

impl MapError {
    pub(crate) fn corrupt(collection: &'static str, field: &'static str) -> Self {
        Self::CorruptRecord { collection, field }
    }
}
