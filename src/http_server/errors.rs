//! # API Errors
//!
//! The full error taxonomy of the service. Every failure is mapped once,
//! immediately, to an HTTP status and a `{"detail": …}` body; there are no
//! retries and no degraded modes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::model::MapError;
use crate::store::oid::InvalidObjectId;
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body failed validation
    #[error("{0}")]
    Validation(String),

    /// Username already taken at registration
    #[error("Username already registered")]
    DuplicateUsername,

    /// Unknown username or wrong password; deliberately indistinguishable
    #[error("Incorrect username or password")]
    AuthenticationFailed,

    /// Path carried a malformed identifier
    #[error(transparent)]
    InvalidIdentifierFormat(#[from] InvalidObjectId),

    /// No document for the lookup key
    #[error("{0}")]
    NotFound(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store handle was never initialized
    #[error("Database service not available.")]
    Unavailable,

    /// Insert succeeded but the immediate re-read found nothing
    #[error("{0} could not be created.")]
    CreationFailed(&'static str),

    /// Stored document did not match its fixed shape
    #[error("Internal error: {0}")]
    CorruptRecord(String),

    /// Store-level failure with no more specific mapping
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateUsername => StatusCode::BAD_REQUEST,
            ApiError::InvalidIdentifierFormat(_) => StatusCode::BAD_REQUEST,

            ApiError::AuthenticationFailed => StatusCode::UNAUTHORIZED,

            ApiError::NotFound(_) => StatusCode::NOT_FOUND,

            ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,

            ApiError::CreationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::CorruptRecord(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable => Self::Unavailable,
            StoreError::Poisoned => Self::Internal(err.to_string()),
        }
    }
}

impl From<MapError> for ApiError {
    fn from(err: MapError) -> Self {
        Self::CorruptRecord(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, detail = %self, "request failed");
        }
        let body = Json(ErrorDetail {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::DuplicateUsername.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::AuthenticationFailed.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("User 'x' not found".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Unavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::CreationFailed("User").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_malformed_id_is_a_client_error() {
        let err = ApiError::from(InvalidObjectId("not-an-id".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("not-an-id"));
    }

    #[test]
    fn test_store_unavailable_maps_to_503() {
        let err = ApiError::from(StoreError::Unavailable);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Database service not available.");
    }

    #[test]
    fn test_detail_messages() {
        assert_eq!(
            ApiError::DuplicateUsername.to_string(),
            "Username already registered"
        );
        assert_eq!(
            ApiError::CreationFailed("User").to_string(),
            "User could not be created."
        );
    }
}
