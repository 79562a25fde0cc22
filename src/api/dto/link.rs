//! DTOs for link creation.

use axum::http::HeaderValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request to shorten a URL.
///
/// The URL must parse, be at most 2048 characters long, and be usable as a
/// `Location` header as written.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(
        url(message = "Invalid URL format"),
        length(max = 2048, message = "URL is too long (maximum 2048 characters)"),
        custom(function = "validate_redirect_target")
    )]
    pub long_url: String,
}

/// URL parsing silently strips tabs and newlines, so the raw string is
/// checked for control characters separately.
fn validate_redirect_target(url: &str) -> Result<(), ValidationError> {
    if url.chars().any(char::is_control) || HeaderValue::from_str(url).is_err() {
        return Err(ValidationError::new("redirect_target")
            .with_message("URL contains characters that cannot be redirected to".into()));
    }
    Ok(())
}

/// A freshly created short link.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub short_code: String,
    pub long_url: String,
    pub full_short_url: String,
    pub created_at: DateTime<Utc>,
}
