//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{LinkService, StatsService};
use crate::domain::click_queue::ClickQueue;
use crate::domain::repositories::{LinkRepository, StatsRepository};
use crate::infrastructure::persistence::{SqliteLinkRepository, SqliteStatsRepository};

pub type DynLinkService = LinkService<dyn LinkRepository>;
pub type DynStatsService = StatsService<dyn LinkRepository, dyn StatsRepository>;

/// State owned by the composition root and cloned into each request.
///
/// The click queue is the only shared mutable structure; handlers only ever
/// call its non-blocking enqueue.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SqlitePool>,
    pub link_service: Arc<DynLinkService>,
    pub stats_service: Arc<DynStatsService>,
    pub click_queue: ClickQueue,
    pub base_url: String,
}

impl AppState {
    /// Wires the SQLite repositories into the services.
    pub fn new(db: Arc<SqlitePool>, click_queue: ClickQueue, base_url: String) -> Self {
        let link_repository: Arc<dyn LinkRepository> =
            Arc::new(SqliteLinkRepository::new(db.clone()));
        let stats_repository: Arc<dyn StatsRepository> =
            Arc::new(SqliteStatsRepository::new(db.clone()));

        Self {
            db,
            link_service: Arc::new(LinkService::new(link_repository.clone())),
            stats_service: Arc::new(StatsService::new(link_repository, stats_repository)),
            click_queue,
            base_url,
        }
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
