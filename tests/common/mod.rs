#![allow(dead_code)]

use axum::extract::ConnectInfo;
use chrono::Utc;
use shortlink::domain::click_queue::{ClickQueue, ClickReceiver};
use shortlink::domain::entities::{Link, NewClick, NewLink};
use shortlink::domain::repositories::{LinkRepository, StatsRepository};
use shortlink::infrastructure::persistence::{self, SqliteLinkRepository, SqliteStatsRepository};
use shortlink::state::AppState;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const TEST_BASE_URL: &str = "http://localhost:8080";

/// Fresh in-memory database with migrations applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn test_pool() -> Arc<SqlitePool> {
    Arc::new(persistence::connect("sqlite::memory:", 1).await.unwrap())
}

pub async fn create_test_link(pool: &Arc<SqlitePool>, code: &str, url: &str) -> Link {
    SqliteLinkRepository::new(pool.clone())
        .create(NewLink {
            code: code.to_string(),
            long_url: url.to_string(),
            created_at: Utc::now(),
        })
        .await
        .unwrap()
}

pub async fn create_test_click(pool: &Arc<SqlitePool>, link_id: i64, ip: &str) {
    SqliteStatsRepository::new(pool.clone())
        .record_click(NewClick {
            link_id,
            clicked_at: Utc::now(),
            ip: Some(ip.to_string()),
            user_agent: None,
        })
        .await
        .unwrap();
}

pub fn create_test_state(pool: Arc<SqlitePool>, capacity: usize) -> (AppState, ClickReceiver) {
    let (queue, rx) = ClickQueue::bounded(capacity);
    let state = AppState::new(pool, queue, TEST_BASE_URL.to_string());
    (state, rx)
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// the in-process test transport.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
