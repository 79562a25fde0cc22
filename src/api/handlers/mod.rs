//! HTTP request handlers for API endpoints.

pub mod health;
pub mod links;
pub mod redirect;
pub mod stats;

pub use health::health_handler;
pub use links::create_link_handler;
pub use redirect::redirect_handler;
pub use stats::stats_handler;

use serde_json::json;

use crate::error::AppError;
use crate::utils::code_generator::is_valid_code_param;

/// Rejects path codes outside the accepted length before touching the store.
pub(crate) fn ensure_valid_code(code: &str) -> Result<(), AppError> {
    if is_valid_code_param(code) {
        Ok(())
    } else {
        Err(AppError::bad_request(
            "Short code must be between 1 and 10 characters",
            json!({ "code": code }),
        ))
    }
}
