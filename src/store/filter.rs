//! # Exact-Match Filters
//!
//! The service only ever queries by exact field equality (`_id` or a
//! username-shaped field), so the filter model is a single field/value pair
//! rather than an expression tree.

use bson::oid::ObjectId;
use bson::{Bson, Document};

/// Exact-match filter over one document field
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    field: String,
    value: Bson,
}

impl Filter {
    /// Filter on the store-assigned identifier.
    pub fn id(id: ObjectId) -> Self {
        Self {
            field: "_id".to_string(),
            value: Bson::ObjectId(id),
        }
    }

    /// Filter on exact string equality of a named field.
    pub fn eq(field: &str, value: &str) -> Self {
        Self {
            field: field.to_string(),
            value: Bson::String(value.to_string()),
        }
    }

    /// Whether a document matches this filter.
    pub fn matches(&self, doc: &Document) -> bool {
        doc.get(&self.field) == Some(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_eq_matches_exact_value() {
        let filter = Filter::eq("username", "alice");

        assert!(filter.matches(&doc! { "username": "alice" }));
        assert!(!filter.matches(&doc! { "username": "bob" }));
        assert!(!filter.matches(&doc! { "username": "Alice" }));
    }

    #[test]
    fn test_absent_field_never_matches() {
        let filter = Filter::eq("username", "alice");
        assert!(!filter.matches(&doc! { "owner_username": "alice" }));
    }

    #[test]
    fn test_id_filter_matches_object_id() {
        let id = ObjectId::new();
        let other = ObjectId::new();
        let filter = Filter::id(id);

        assert!(filter.matches(&doc! { "_id": id }));
        assert!(!filter.matches(&doc! { "_id": other }));
        // A string that happens to spell the same hex is not the same value.
        assert!(!filter.matches(&doc! { "_id": id.to_hex() }));
    }
}
