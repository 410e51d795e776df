//! User HTTP Routes
//!
//! Registration, login, and lookup-by-username. All three follow the same
//! shape: validate, hit the `users` collection, map the document out.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::model::{UserOut, UserRecord};
use crate::store::{Collection, Filter};

use super::errors::{ApiError, ApiResult};
use super::server::AppState;

/// User routes with shared state
pub fn user_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", post(create_user_handler))
        .route("/users/{username}", get(get_user_handler))
        .route("/login", post(login_handler))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: String,
    pub message: String,
    pub username: String,
}

// ==================
// Handlers
// ==================

/// Register a new user
async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserOut>)> {
    if request.username.is_empty() {
        return Err(ApiError::Validation(
            "username must not be empty".to_string(),
        ));
    }
    if request.password.is_empty() {
        return Err(ApiError::Validation(
            "password must not be empty".to_string(),
        ));
    }

    let users = state.store.users()?;

    let existing = users.find_one(&Filter::eq("username", &request.username))?;
    if existing.is_some() {
        return Err(ApiError::DuplicateUsername);
    }

    let id = users.insert_one(UserRecord::document(&request.username, &request.password))?;
    let created = users
        .find_one(&Filter::id(id))?
        .ok_or(ApiError::CreationFailed("User"))?;

    let record = UserRecord::from_document(&created)?;
    tracing::info!(username = %record.username, "user created");
    Ok((StatusCode::CREATED, Json(UserOut::from(record))))
}

/// Authenticate a user
///
/// An unknown username and a wrong password produce the same 401; callers
/// cannot tell which one it was.
async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let users = state.store.users()?;

    let doc = users
        .find_one(&Filter::eq("username", &request.username))?
        .ok_or(ApiError::AuthenticationFailed)?;
    let record = UserRecord::from_document(&doc)?;

    // Stored verbatim, compared verbatim. There is no hashing step.
    if record.password != request.password {
        return Err(ApiError::AuthenticationFailed);
    }

    Ok(Json(LoginResponse {
        status: "success".to_string(),
        message: "Login successful".to_string(),
        username: record.username,
    }))
}

/// Look up a user by username
async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> ApiResult<Json<UserOut>> {
    let users = state.store.users()?;

    let doc = users
        .find_one(&Filter::eq("username", &username))?
        .ok_or_else(|| ApiError::NotFound(format!("User '{}' not found", username)))?;

    let record = UserRecord::from_document(&doc)?;
    Ok(Json(UserOut::from(record)))
}
