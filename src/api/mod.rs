//! REST API layer for HTTP request/response handling.
//!
//! - [`dto`] - Request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Versioned API routes

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
