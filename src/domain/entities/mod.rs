//! Core domain entities.
//!
//! - [`Link`] - A short code mapped to a long URL
//! - [`Click`] - A persisted redirect traversal
//!
//! Creation inputs (`NewLink`, `NewClick`) are separate structs: the store
//! assigns identifiers, so they never carry one.

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
