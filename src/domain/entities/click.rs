//! Click entity representing a single persisted redirect.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A click recorded when a short link was followed.
///
/// Append-only: clicks are never updated once written.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

/// Input data for recording a click.
///
/// `link_id` must reference an existing link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClick {
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}
