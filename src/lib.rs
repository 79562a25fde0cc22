//! # Shortlink
//!
//! A URL shortening service with asynchronous click analytics, built with
//! Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits and the click pipeline
//! - **Application Layer** ([`application`]) - Link creation and statistics services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repositories
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Request Flow
//!
//! - Creating a link generates a random 6-character code, checks it against
//!   the store (up to 5 attempts), and persists the link.
//! - Following a link resolves the code, offers a click event to a bounded
//!   queue without waiting, and redirects immediately. Background workers
//!   persist queued clicks; a full queue drops the click.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, LinkStats, StatsService};
    pub use crate::domain::click_event::ClickEvent;
    pub use crate::domain::click_queue::{ClickQueue, DropReason, EnqueueOutcome};
    pub use crate::domain::click_worker::ClickWorkerPool;
    pub use crate::domain::entities::{Click, Link, NewClick, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
