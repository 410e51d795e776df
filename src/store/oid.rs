//! # Identifier Codec
//!
//! The store keys documents by 12-byte ObjectIds. Identifiers cross the API
//! boundary only in their 24-hex-char string form, and decoding must happen
//! before any id-keyed lookup that receives its key from a request path.

use bson::oid::ObjectId;
use thiserror::Error;

/// A string that is not a syntactically valid identifier
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{0}' is not a valid object id")]
pub struct InvalidObjectId(pub String);

/// Canonical string form of a native identifier.
pub fn encode(id: &ObjectId) -> String {
    id.to_hex()
}

/// Parse the canonical string form; wrong length or charset is an error.
pub fn decode(raw: &str) -> Result<ObjectId, InvalidObjectId> {
    ObjectId::parse_str(raw).map_err(|_| InvalidObjectId(raw.to_string()))
}
