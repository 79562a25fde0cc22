//! Handler for link creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/v1/links`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/a/b" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_code": "aZ3kQ9",
///   "long_url": "https://example.com/a/b",
///   "full_short_url": "http://localhost:8080/aZ3kQ9",
///   "created_at": "2025-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, the URL is invalid or
/// longer than 2048 characters. Returns 500 if no free code could be found
/// or the store fails.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request("Invalid request", json!({ "reason": rejection.body_text() }))
    })?;
    payload.validate()?;

    let link = state.link_service.create_link(payload.long_url).await?;

    let response = CreateLinkResponse {
        full_short_url: state.short_url(&link.code),
        short_code: link.code,
        long_url: link.long_url,
        created_at: link.created_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
