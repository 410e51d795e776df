//! # HTTP Server
//!
//! Combines the user and project routers behind shared state, layers CORS
//! and request tracing, and binds the listener.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::DocumentStore;

use super::config::HttpServerConfig;
use super::project_routes::project_routes;
use super::user_routes::user_routes;

/// State shared by every handler
pub struct AppState {
    pub store: DocumentStore,
}

/// HTTP server for the draftboard API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new(store: DocumentStore) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpServerConfig, store: DocumentStore) -> Self {
        let router = build_router(&config, store);
        Self { config, router }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener and serve until the transport shuts down
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address: {}", e),
            )
        })?;

        tracing::info!(%addr, "starting draftboard API server");
        tracing::info!("  - /api/users - registration & lookup");
        tracing::info!("  - /api/login - authentication");
        tracing::info!("  - /api/projects - project records");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Build the combined router for the given store handle
pub fn build_router(config: &HttpServerConfig, store: DocumentStore) -> Router {
    let state = Arc::new(AppState { store });

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    // Credentialed CORS forbids wildcards, so methods and headers mirror the
    // preflight request instead of allowing Any.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .nest("/api", user_routes(state.clone()))
        .nest("/api", project_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Welcome message at the root
async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Welcome to the User Authentication API!" }))
}

/// Liveness check
async fn health_handler() -> Json<Value> {
    Json(json!({ "service": "draftboard", "status": "ok" }))
}
