//! Domain layer containing business entities and the click pipeline.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - In-flight click model
//! - [`click_queue`] - Bounded, non-blocking click hand-off
//! - [`click_worker`] - Background click persistence
//!
//! # Click Processing Flow
//!
//! 1. Redirect handler resolves the link
//! 2. A [`click_event::ClickEvent`] is offered to the [`click_queue::ClickQueue`];
//!    a full queue drops it
//! 3. The redirect is returned either way
//! 4. [`click_worker::ClickWorkerPool`] persists each event via
//!    [`repositories::StatsRepository`]

pub mod click_event;
pub mod click_queue;
pub mod click_worker;
pub mod entities;
pub mod repositories;
