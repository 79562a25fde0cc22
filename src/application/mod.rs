//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a small API.
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution
//! - [`services::stats_service::StatsService`] - Click statistics

pub mod services;
