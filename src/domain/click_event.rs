//! Click event model for asynchronous click tracking.

use chrono::{DateTime, Utc};

use crate::domain::entities::NewClick;

/// An in-memory click waiting to be persisted.
///
/// Created by the redirect handler once the link has been resolved, handed to
/// the [`crate::domain::click_queue::ClickQueue`] and written by the
/// [`crate::domain::click_worker::ClickWorkerPool`]. Never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl ClickEvent {
    /// Creates a click event stamped with the current time.
    pub fn new(link_id: i64, ip: Option<String>, user_agent: Option<&str>) -> Self {
        Self {
            link_id,
            clicked_at: Utc::now(),
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
        }
    }
}

impl From<ClickEvent> for NewClick {
    fn from(event: ClickEvent) -> Self {
        NewClick {
            link_id: event.link_id,
            clicked_at: event.clicked_at,
            ip: event.ip,
            user_agent: event.user_agent,
        }
    }
}
