//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{key}`       - Short link redirect
//! - `GET  /?key=...`    - Short link redirect, key from the query string
//! - `GET  /health`      - Store health check
//! - `POST /short`       - Create (form-encoded body)
//! - `POST /api/short`   - Create (JSON body)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{
    create_form_handler, health_handler, resolve_handler, resolve_query_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and the tracing layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(resolve_query_handler))
        .route("/{key}", get(resolve_handler))
        .route("/health", get(health_handler))
        .route("/short", post(create_form_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps [`router`] so `/key/` and `/key` resolve the same link.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
