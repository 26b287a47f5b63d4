//! Handlers for the create endpoints.

use axum::{
    Form, Json,
    extract::{
        State,
        rejection::{FormRejection, JsonRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::create::{CreateForm, CreateRequest, CreateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link from a JSON body.
///
/// # Endpoint
///
/// `POST /api/short`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "key": "すし",   // optional, 2-30 characters
///   "length": 6      // optional, 2-30, used when no key is given
/// }
/// ```
///
/// # Response
///
/// **201 Created**
///
/// ```json
/// {
///   "success": true,
///   "shortKey": "すし",
///   "shortUrlNative": "https://短.コム/すし",
///   "shortUrlAscii": "https://xn--s7y.xn--tckwe/%E3%81%99%E3%81%97"
/// }
/// ```
///
/// **409 Conflict** when the key is already taken: `{ "success": false }`
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or validation fails.
/// Returns 503 Service Unavailable if the store fails or times out.
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateResponse>), AppError> {
    let Json(payload) = payload?;
    create(&state, payload).await
}

/// Creates a short link from a form-encoded body.
///
/// # Endpoint
///
/// `POST /short`
///
/// Same fields and responses as [`create_handler`]. Empty form fields are
/// treated as absent.
pub async fn create_form_handler(
    State(state): State<AppState>,
    form: Result<Form<CreateForm>, FormRejection>,
) -> Result<(StatusCode, Json<CreateResponse>), AppError> {
    let Form(form) = form?;
    create(&state, CreateRequest::from(form)).await
}

async fn create(
    state: &AppState,
    payload: CreateRequest,
) -> Result<(StatusCode, Json<CreateResponse>), AppError> {
    payload.validate()?;

    let outcome = state
        .link_service
        .create_short_link(payload.into_new_link())
        .await?;

    let status = if outcome.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::CONFLICT
    };

    Ok((status, Json(CreateResponse::from(outcome))))
}
