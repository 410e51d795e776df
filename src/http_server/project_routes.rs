//! Project HTTP Routes
//!
//! Creation, list-by-owner, and get-by-id for client project records.
//! `owner_username` is taken at face value; nothing checks it against the
//! `users` collection.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use crate::model::{ProjectOut, ProjectRecord};
use crate::store::{oid, Collection, Filter};

use super::errors::{ApiError, ApiResult};
use super::server::AppState;

/// Project routes with shared state
pub fn project_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/projects", post(create_project_handler))
        .route("/projects/{username}", get(list_projects_handler))
        .route("/project/{project_id}", get(get_project_handler))
        .with_state(state)
}

// ==================
// Request Types
// ==================

/// Creation input; `status` and `report` are server-owned and not accepted
/// here — extraneous body fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub owner_username: String,
}

// ==================
// Handlers
// ==================

/// Create a project record in `Draft` status
async fn create_project_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectOut>)> {
    let projects = state.store.projects()?;

    let id = projects.insert_one(ProjectRecord::document(
        &request.project_name,
        &request.client_name,
        &request.owner_username,
    ))?;
    let created = projects
        .find_one(&Filter::id(id))?
        .ok_or(ApiError::CreationFailed("Project"))?;

    let record = ProjectRecord::from_document(&created)?;
    tracing::info!(
        project = %record.project_name,
        owner = %record.owner_username,
        "project created"
    );
    Ok((StatusCode::CREATED, Json(ProjectOut::from(record))))
}

/// List all projects owned by a username, in store order
///
/// An owner with no projects gets an empty array, not an error.
async fn list_projects_handler(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<ProjectOut>>> {
    let projects = state.store.projects()?;

    let docs = projects.find_many(&Filter::eq("owner_username", &username))?;
    let out = docs
        .iter()
        .map(|doc| ProjectRecord::from_document(doc).map(ProjectOut::from))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(out))
}

/// Fetch a single project by its encoded identifier
///
/// The id is decoded before the lookup: a malformed id is a 400, never a 404.
async fn get_project_handler(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> ApiResult<Json<ProjectOut>> {
    let id = oid::decode(&project_id)?;

    let projects = state.store.projects()?;
    let doc = projects
        .find_one(&Filter::id(id))?
        .ok_or_else(|| ApiError::NotFound(format!("Project '{}' not found", project_id)))?;

    let record = ProjectRecord::from_document(&doc)?;
    Ok(Json(ProjectOut::from(record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DocumentStore;

    #[test]
    fn test_router_builds() {
        let state = Arc::new(AppState {
            store: DocumentStore::open(),
        });
        let _router = project_routes(state);
    }
}
