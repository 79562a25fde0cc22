//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Cryptographically secure short code generation

pub mod code_generator;
