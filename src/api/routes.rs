//! API route configuration.

use crate::api::handlers::{create_link_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Versioned API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /v1/links`               - Create a short link
/// - `GET  /v1/links/{code}/stats`  - Click count for a short link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/links", post(create_link_handler))
        .route("/v1/links/{code}/stats", get(stats_handler))
}
