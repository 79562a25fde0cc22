//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//!
//! - [`SqliteLinkRepository`] - Link storage and retrieval
//! - [`SqliteStatsRepository`] - Click recording and counting

pub mod sqlite_link_repository;
pub mod sqlite_stats_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
pub use sqlite_stats_repository::SqliteStatsRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Opens a connection pool and applies pending migrations.
///
/// Creates the database file if it does not exist. Foreign keys are enforced
/// so clicks can only reference existing links.
///
/// # Errors
///
/// Returns an error if the URL is malformed, the database cannot be opened,
/// or a migration fails.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
