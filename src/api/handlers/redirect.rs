//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::net::SocketAddr;
use tracing::debug;

use super::ensure_valid_code;
use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// The click is offered to the bounded click queue without waiting. If the
/// queue is full the click is dropped and counted; the redirect is returned
/// either way.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 400 Bad Request if the code length is out of bounds.
/// Returns 500 if the stored target cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    ensure_valid_code(&code)?;

    let link = state.link_service.resolve_link(&code).await?;

    // Creation rejects such targets, so a failure here means bad stored data.
    let location = HeaderValue::from_str(&link.long_url).map_err(|_| {
        AppError::internal(
            "Link target is not a valid redirect location",
            json!({ "code": code, "link_id": link.id }),
        )
    })?;

    let click_event = ClickEvent::new(
        link.id,
        Some(addr.ip().to_string()),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
    );

    let outcome = state.click_queue.try_enqueue(click_event);
    debug!(%code, ?outcome, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
