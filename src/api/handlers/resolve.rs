//! Handlers for short link resolution.

use axum::{
    extract::{Path, Query, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Query parameters for [`resolve_query_handler`].
#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub key: Option<String>,
}

/// Redirects a short key to its stored URL.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// The path segment arrives percent-decoded (`/%E3%81%82` and `/あ` are the same key).
///
/// # Response
///
/// **301 Moved Permanently** with `Location` set to the stored URL. Clients and
/// intermediaries may cache it indefinitely; links are never changed.
///
/// # Errors
///
/// Returns 404 Not Found if the key does not exist, or if the segment does not
/// decode to UTF-8 (no stored key can match it).
/// Returns 503 Service Unavailable if the store fails or times out.
pub async fn resolve_handler(
    key: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Path(key) = key.map_err(|rejection| {
        AppError::not_found(
            "Short link not found",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let link = state.link_service.resolve(&key).await?;
    permanent_redirect(&link.target_url)
}

/// Redirects using a key taken from the query string.
///
/// # Endpoint
///
/// `GET /?key={key}`
///
/// # Errors
///
/// Returns 404 Not Found if `key` is missing, empty or unknown.
pub async fn resolve_query_handler(
    Query(params): Query<ResolveQuery>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let key = params
        .key
        .filter(|k| !k.is_empty())
        .ok_or_else(|| AppError::not_found("No key supplied", json!({})))?;

    let link = state.link_service.resolve(&key).await?;
    permanent_redirect(&link.target_url)
}

fn permanent_redirect(target: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(target).map_err(|_| {
        AppError::internal(
            "Stored target is not a valid redirect location",
            json!({ "target": target }),
        )
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
