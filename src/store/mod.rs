//! # Document Store
//!
//! Adapter over the two collections backing the service (`users` and
//! `projects`). Collections expose find-one / find-many / insert-one and
//! nothing else; every handler reaches them through this module.
//!
//! The engine shipped here is in-process; the database proper is an external
//! collaborator and the [`Collection`] trait is the seam for it.

pub mod collection;
pub mod errors;
pub mod filter;
pub mod oid;

pub use collection::{Collection, MemoryCollection};
pub use errors::{StoreError, StoreResult};
pub use filter::Filter;

use std::sync::Arc;

/// Handle to the two collections used by the service.
///
/// A handle is either connected or disconnected. A disconnected handle is
/// what a failed startup produces: every accessor reports
/// [`StoreError::Unavailable`] instead of handing out a collection, so
/// request handlers never hold a null reference.
#[derive(Clone)]
pub struct DocumentStore {
    inner: Option<Arc<Collections>>,
}

struct Collections {
    users: MemoryCollection,
    projects: MemoryCollection,
}

impl DocumentStore {
    /// Open the in-process store with empty collections.
    pub fn open() -> Self {
        Self {
            inner: Some(Arc::new(Collections {
                users: MemoryCollection::new("users"),
                projects: MemoryCollection::new("projects"),
            })),
        }
    }

    /// A handle whose every operation reports `Unavailable`.
    pub fn disconnected() -> Self {
        Self { inner: None }
    }

    /// The `users` collection.
    pub fn users(&self) -> StoreResult<&dyn Collection> {
        self.collections().map(|c| &c.users as &dyn Collection)
    }

    /// The `projects` collection.
    pub fn projects(&self) -> StoreResult<&dyn Collection> {
        self.collections().map(|c| &c.projects as &dyn Collection)
    }

    fn collections(&self) -> StoreResult<&Collections> {
        self.inner.as_deref().ok_or(StoreError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_open_store_hands_out_both_collections() {
        let store = DocumentStore::open();
        assert!(store.users().is_ok());
        assert!(store.projects().is_ok());
    }

    #[test]
    fn test_disconnected_store_reports_unavailable() {
        let store = DocumentStore::disconnected();
        assert_eq!(store.users().err(), Some(StoreError::Unavailable));
        assert_eq!(store.projects().err(), Some(StoreError::Unavailable));
    }

    #[test]
    fn test_collections_are_independent() {
        let store = DocumentStore::open();
        store
            .users()
            .unwrap()
            .insert_one(doc! { "username": "alice" })
            .unwrap();

        let projects = store
            .projects()
            .unwrap()
            .find_many(&Filter::eq("username", "alice"))
            .unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn test_clones_share_the_same_collections() {
        let store = DocumentStore::open();
        let clone = store.clone();

        let id = store
            .users()
            .unwrap()
            .insert_one(doc! { "username": "alice" })
            .unwrap();

        let found = clone.users().unwrap().find_one(&Filter::id(id)).unwrap();
        assert!(found.is_some());
    }
}
