//! # HTTP Server Module
//!
//! Axum routers and handlers for the API surface:
//!
//! - `/` and `/health` - welcome and liveness
//! - `/api/users`, `/api/login`, `/api/users/{username}` - user endpoints
//! - `/api/projects`, `/api/projects/{username}`, `/api/project/{project_id}`
//!   - project endpoints

pub mod config;
pub mod errors;
pub mod project_routes;
pub mod server;
pub mod user_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::{build_router, AppState, HttpServer};
