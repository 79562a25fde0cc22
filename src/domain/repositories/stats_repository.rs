//! Repository trait for click persistence and counting.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only click storage.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteStatsRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Records a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors, including a missing
    /// referenced link.
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts every persisted click for a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn count_clicks_by_link_id(&self, link_id: i64) -> Result<i64, AppError>;
}
