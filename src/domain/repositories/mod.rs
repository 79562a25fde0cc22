//! Repository trait definitions for the domain layer.
//!
//! Together these traits form the link store the services depend on.
//! Concrete implementations live in `crate::infrastructure::persistence`;
//! mock implementations are generated by `mockall` for unit tests.
//!
//! - [`LinkRepository`] - Link lookup and persistence
//! - [`StatsRepository`] - Click persistence and counting

pub mod link_repository;
pub mod stats_repository;

pub use link_repository::LinkRepository;
pub use stats_repository::StatsRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
