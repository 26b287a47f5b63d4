//! API route configuration.

use crate::api::handlers::create_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /short` - Create a short link from a JSON body
pub fn routes() -> Router<AppState> {
    Router::new().route("/short", post(create_handler))
}
