//! CLI administration tool for shortlink.
//!
//! Reads statistics and checks the database without going through the HTTP
//! API.
//!
//! # Usage
//!
//! ```bash
//! # Click count for a short code
//! cargo run --bin shortlink-admin -- stats --code aZ3kQ9
//!
//! # Check database connection
//! cargo run --bin shortlink-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite connection string, same default as the server

use shortlink::AppError;
use shortlink::application::services::StatsService;
use shortlink::config::DEFAULT_DATABASE_URL;
use shortlink::infrastructure::persistence::{self, SqliteLinkRepository, SqliteStatsRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::process::ExitCode;
use std::sync::Arc;

/// CLI tool for inspecting shortlink data.
#[derive(Parser)]
#[command(name = "shortlink-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show the total number of clicks for a short link
    Stats {
        /// Short code to report on
        #[arg(short, long)]
        code: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let pool = persistence::connect(&database_url, 1)
        .await
        .context("Failed to connect to database")?;

    let code = match cli.command {
        Commands::Stats { code } => handle_stats(&pool, &code).await?,
        Commands::Db {
            action: DbAction::Check,
        } => handle_db_check(&pool).await?,
    };

    pool.close().await;

    Ok(code)
}

/// Prints link and click count for one short code.
async fn handle_stats(pool: &SqlitePool, code: &str) -> Result<ExitCode> {
    let pool = Arc::new(pool.clone());
    let service = StatsService::new(
        Arc::new(SqliteLinkRepository::new(pool.clone())),
        Arc::new(SqliteStatsRepository::new(pool)),
    );

    match service.get_stats(code).await {
        Ok(stats) => {
            println!("{}", "📊 Link Statistics".bright_blue().bold());
            println!();
            println!("  {}  {}", "Short code:".bold(), stats.link.code.cyan());
            println!("  {}    {}", "Long URL:".bold(), stats.link.long_url);
            println!(
                "  {}     {}",
                "Created:".bold(),
                stats.link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!(
                "  {}{}",
                "Total clicks: ".bold(),
                stats.total_clicks.to_string().green().bold()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(AppError::NotFound { .. }) => {
            eprintln!("{} short code '{}' not found", "Error:".red().bold(), code);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).context("Failed to load statistics"),
    }
}

/// Verifies the database answers queries.
async fn handle_db_check(pool: &SqlitePool) -> Result<ExitCode> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .context("Database query failed")?;

    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;
    let clicks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM link_clicks")
        .fetch_one(pool)
        .await?;

    println!("{}", "✓ Database connection OK".green().bold());
    println!("  {} {}", "Links:".bold(), links);
    println!("  {} {}", "Clicks:".bold(), clicks);

    Ok(ExitCode::SUCCESS)
}
