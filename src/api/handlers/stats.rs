//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use super::ensure_valid_code;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the total persisted clicks for a short link.
///
/// # Endpoint
///
/// `GET /api/v1/links/{code}/stats`
///
/// Clicks still waiting in the queue are not counted.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 400 Bad Request if the code length is out of bounds.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    ensure_valid_code(&code)?;

    let stats = state.stats_service.get_stats(&code).await?;

    Ok(Json(stats.into()))
}
