//! # Project Records
//!
//! Projects are stored as documents in the `projects` collection. The
//! `status` and `report` fields are server-owned: creation forces `status`
//! to `"Draft"` and `report` to a fixed placeholder, whatever the caller
//! sends. No transition or generation logic exists here.

use bson::oid::ObjectId;
use bson::{doc, Document};
use serde::Serialize;

use crate::store::oid;

use super::errors::{MapError, MapResult};

/// A project document in its fixed shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: ObjectId,
    pub project_name: String,
    pub client_name: String,
    pub owner_username: String,
    pub status: String,
    pub report: String,
}

impl ProjectRecord {
    /// Status assigned to every newly created project.
    pub const INITIAL_STATUS: &'static str = "Draft";

    /// Report body assigned at creation; report generation happens outside
    /// this service.
    pub const REPORT_PLACEHOLDER: &'static str =
        "Your client requirements report will appear here once the client survey is complete.";

    /// Build the insert document for a new project. The store assigns `_id`;
    /// the caller does not get a say in `status` or `report`.
    pub fn document(project_name: &str, client_name: &str, owner_username: &str) -> Document {
        doc! {
            "projectName": project_name,
            "clientName": client_name,
            "owner_username": owner_username,
            "status": Self::INITIAL_STATUS,
            "report": Self::REPORT_PLACEHOLDER,
        }
    }

    /// Decode a stored document, field by field.
    pub fn from_document(doc: &Document) -> MapResult<Self> {
        let id = doc
            .get_object_id("_id")
            .map_err(|_| MapError::corrupt("projects", "_id"))?;
        let project_name = doc
            .get_str("projectName")
            .map_err(|_| MapError::corrupt("projects", "projectName"))?;
        let client_name = doc
            .get_str("clientName")
            .map_err(|_| MapError::corrupt("projects", "clientName"))?;
        let owner_username = doc
            .get_str("owner_username")
            .map_err(|_| MapError::corrupt("projects", "owner_username"))?;
        let status = doc
            .get_str("status")
            .map_err(|_| MapError::corrupt("projects", "status"))?;
        let report = doc
            .get_str("report")
            .map_err(|_| MapError::corrupt("projects", "report"))?;

        Ok(Self {
            id,
            project_name: project_name.to_string(),
            client_name: client_name.to_string(),
            owner_username: owner_username.to_string(),
            status: status.to_string(),
            report: report.to_string(),
        })
    }
}

/// Wire shape for a project
#[derive(Debug, Clone, Serialize)]
pub struct ProjectOut {
    pub id: String,
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub owner_username: String,
    pub status: String,
    pub report: String,
}

impl From<ProjectRecord> for ProjectOut {
    fn from(record: ProjectRecord) -> Self {
        Self {
            id: oid::encode(&record.id),
            project_name: record.project_name,
            client_name: record.client_name,
            owner_username: record.owner_username,
            status: record.status,
            report: record.report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_document_forces_server_owned_fields() {
        let doc = ProjectRecord::document("Zenith Yoga Website", "Jane Doe", "alice");

        assert!(doc.get("_id").is_none());
        assert_eq!(doc.get_str("status").unwrap(), "Draft");
        assert_eq!(
            doc.get_str("report").unwrap(),
            ProjectRecord::REPORT_PLACEHOLDER
        );
    }

    #[test]
    fn test_from_document_reads_all_fields() {
        let id = ObjectId::new();
        let mut doc = ProjectRecord::document("Zenith Yoga Website", "Jane Doe", "alice");
        doc.insert("_id", id);

        let record = ProjectRecord::from_document(&doc).unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.project_name, "Zenith Yoga Website");
        assert_eq!(record.client_name, "Jane Doe");
        assert_eq!(record.owner_username, "alice");
        assert_eq!(record.status, ProjectRecord::INITIAL_STATUS);
    }

    #[test]
    fn test_missing_field_is_corrupt_record() {
        let doc = doc! { "_id": ObjectId::new(), "projectName": "p" };
        let err = ProjectRecord::from_document(&doc).unwrap_err();
        assert_eq!(err, MapError::corrupt("projects", "clientName"));
    }

    #[test]
    fn test_wire_shape_uses_api_field_names() {
        let mut doc = ProjectRecord::document("Zenith Yoga Website", "Jane Doe", "alice");
        doc.insert("_id", ObjectId::new());

        let out = ProjectOut::from(ProjectRecord::from_document(&doc).unwrap());
        let json = serde_json::to_value(&out).unwrap();

        assert_eq!(json["projectName"], "Zenith Yoga Website");
        assert_eq!(json["clientName"], "Jane Doe");
        assert_eq!(json["owner_username"], "alice");
        assert_eq!(json["status"], "Draft");
        assert_eq!(json["id"].as_str().unwrap().len(), 24);
        // The struct field names never leak into the JSON.
        assert!(json.get("project_name").is_none());
        assert!(json.get("client_name").is_none());
    }
}
