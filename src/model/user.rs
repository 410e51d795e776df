//! # User Records
//!
//! Users are stored as documents in the `users` collection: `_id`,
//! `username`, `password`. The password is stored verbatim and never
//! serialized back out; the wire shape carries only the encoded id and the
//! username.

use bson::oid::ObjectId;
use bson::{doc, Document};
use serde::Serialize;

use crate::store::oid;

use super::errors::{MapError, MapResult};

/// A user document in its fixed shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: ObjectId,
    pub username: String,
    pub password: String,
}

impl UserRecord {
    /// Build the insert document for a new user. The store assigns `_id`.
    pub fn document(username: &str, password: &str) -> Document {
        doc! {
            "username": username,
            "password": password,
        }
    }

    /// Decode a stored document, field by field.
    pub fn from_document(doc: &Document) -> MapResult<Self> {
        let id = doc
            .get_object_id("_id")
            .map_err(|_| MapError::corrupt("users", "_id"))?;
        let username = doc
            .get_str("username")
            .map_err(|_| MapError::corrupt("users", "username"))?;
        let password = doc
            .get_str("password")
            .map_err(|_| MapError::corrupt("users", "password"))?;

        Ok(Self {
            id,
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Wire shape for a user, password omitted
#[derive(Debug, Clone, Serialize)]
pub struct UserOut {
    pub id: String,
    pub username: String,
}

impl From<UserRecord> for UserOut {
    fn from(record: UserRecord) -> Self {
        Self {
            id: oid::encode(&record.id),
            username: record.username,
        }
    }
}
