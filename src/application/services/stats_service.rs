//! Click statistics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkRepository, StatsRepository};
use crate::error::AppError;

/// A link together with its persisted click count.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: Link,
    pub total_clicks: i64,
}

/// Service for retrieving click statistics.
///
/// Counts reflect what the click workers have persisted so far; events still
/// in the queue are not included.
pub struct StatsService<L: LinkRepository + ?Sized, S: StatsRepository + ?Sized> {
    link_repository: Arc<L>,
    stats_repository: Arc<S>,
}

impl<L: LinkRepository + ?Sized, S: StatsRepository + ?Sized> StatsService<L, S> {
    /// Creates a new statistics service.
    pub fn new(link_repository: Arc<L>, stats_repository: Arc<S>) -> Self {
        Self {
            link_repository,
            stats_repository,
        }
    }

    /// Returns the link for `code` and its total click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn get_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        let total_clicks = self
            .stats_repository
            .count_clicks_by_link_id(link.id)
            .await?;

        Ok(LinkStats { link, total_clicks })
    }
}
