//! # Collections
//!
//! The `Collection` trait is the full surface the service needs from its
//! database: find one, find many, insert one. `MemoryCollection` is the
//! in-process engine behind it; a deployment backed by an external document
//! database swaps the engine without touching the handlers.

use std::sync::RwLock;

use bson::oid::ObjectId;
use bson::Document;

use super::errors::{StoreError, StoreResult};
use super::filter::Filter;

/// Operations the service performs against a collection
pub trait Collection: Send + Sync {
    /// First document matching the filter, in store order.
    fn find_one(&self, filter: &Filter) -> StoreResult<Option<Document>>;

    /// All documents matching the filter, in store order.
    fn find_many(&self, filter: &Filter) -> StoreResult<Vec<Document>>;

    /// Insert a document, assigning and returning its `_id`.
    fn insert_one(&self, doc: Document) -> StoreResult<ObjectId>;
}

/// In-process collection engine
///
/// Documents live in insertion order behind an `RwLock`. Each operation is
/// individually atomic; nothing spans two operations, so an insert followed
/// by a re-read is not atomic as a unit.
pub struct MemoryCollection {
    name: &'static str,
    docs: RwLock<Vec<Document>>,
}

impl MemoryCollection {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            docs: RwLock::new(Vec::new()),
        }
    }

    /// Collection name, as used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Collection for MemoryCollection {
    fn find_one(&self, filter: &Filter) -> StoreResult<Option<Document>> {
        let docs = self.docs.read().map_err(|_| StoreError::Poisoned)?;
        Ok(docs.iter().find(|d| filter.matches(d)).cloned())
    }

    fn find_many(&self, filter: &Filter) -> StoreResult<Vec<Document>> {
        let docs = self.docs.read().map_err(|_| StoreError::Poisoned)?;
        Ok(docs.iter().filter(|d| filter.matches(d)).cloned().collect())
    }

    fn insert_one(&self, mut doc: Document) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        doc.insert("_id", id);

        let mut docs = self.docs.write().map_err(|_| StoreError::Poisoned)?;
        docs.push(doc);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_insert_assigns_distinct_ids() {
        let coll = MemoryCollection::new("users");

        let a = coll.insert_one(doc! { "username": "alice" }).unwrap();
        let b = coll.insert_one(doc! { "username": "bob" }).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_find_one_by_assigned_id() {
        let coll = MemoryCollection::new("users");
        let id = coll.insert_one(doc! { "username": "alice" }).unwrap();

        let found = coll.find_one(&Filter::id(id)).unwrap().unwrap();
        assert_eq!(found.get_str("username").unwrap(), "alice");
        assert_eq!(found.get_object_id("_id").unwrap(), id);
    }

    #[test]
    fn test_find_one_returns_none_for_no_match() {
        let coll = MemoryCollection::new("users");
        coll.insert_one(doc! { "username": "alice" }).unwrap();

        let found = coll.find_one(&Filter::eq("username", "bob")).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_find_many_preserves_insertion_order() {
        let coll = MemoryCollection::new("projects");
        for name in ["first", "second", "third"] {
            coll.insert_one(doc! { "projectName": name, "owner_username": "alice" })
                .unwrap();
        }
        coll.insert_one(doc! { "projectName": "other", "owner_username": "bob" })
            .unwrap();

        let found = coll
            .find_many(&Filter::eq("owner_username", "alice"))
            .unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|d| d.get_str("projectName").unwrap())
            .collect();

        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_find_many_empty_for_no_match() {
        let coll = MemoryCollection::new("projects");
        let found = coll.find_many(&Filter::eq("owner_username", "ghost")).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_collection_name() {
        assert_eq!(MemoryCollection::new("users").name(), "users");
    }
}
