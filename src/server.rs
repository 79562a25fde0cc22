//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, click pipeline, Axum server lifecycle and
//! graceful shutdown.

use crate::config::Config;
use crate::domain::click_queue::ClickQueue;
use crate::domain::click_worker::ClickWorkerPool;
use crate::infrastructure::persistence::{self, SqliteStatsRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool and migrations
/// - Click queue and background click workers
/// - Axum HTTP server
///
/// On Ctrl-C or SIGTERM the server stops accepting requests, finishes
/// in-flight ones, and waits for the click workers to drain the queue.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = persistence::connect(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to open database")?;
    tracing::info!("Connected to database");

    let pool = Arc::new(pool);

    let (click_queue, click_rx) = ClickQueue::bounded(config.click_queue_capacity);
    let workers = ClickWorkerPool::spawn(
        click_rx,
        Arc::new(SqliteStatsRepository::new(pool.clone())),
        config.click_worker_concurrency,
    );
    tracing::info!(workers = workers.size(), "Click workers started");

    let state = AppState::new(pool.clone(), click_queue.clone(), config.base_url.clone());
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    let dropped = click_queue.dropped();
    // Last sender; workers stop once the buffer is empty.
    drop(click_queue);

    tracing::info!("Server stopped, draining click queue");
    let persisted = workers.join().await;
    tracing::info!(persisted, dropped, "Click workers finished");

    pool.close().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
