//! Application error taxonomy and HTTP mapping.
//!
//! Every fallible operation in the service layer returns [`AppError`]. Handlers
//! propagate it with `?` and [`IntoResponse`] renders a uniform JSON body:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload shared by every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request was malformed.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The requested short code does not exist.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The secure randomness source failed. Not retried.
    #[error("short code generation failed: {0}")]
    Generation(String),

    /// Every attempt produced a code that was already taken.
    #[error("could not generate a unique short code after {attempts} attempts")]
    ExhaustedRetries { attempts: usize },

    /// Any persistence failure.
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),

    /// Stored data the service cannot act on.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Generation(_)
            | AppError::ExhaustedRetries { .. }
            | AppError::Store(_)
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into the client-facing payload.
    ///
    /// Store errors are reported generically; the underlying driver message
    /// only goes to the log.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::NotFound { message, details } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Generation(_) => ErrorInfo {
                code: "generation_error",
                message: "Failed to generate short code".to_string(),
                details: json!({}),
            },
            AppError::ExhaustedRetries { attempts } => ErrorInfo {
                code: "exhausted_retries",
                message: self.to_string(),
                details: json!({ "attempts": attempts }),
            },
            AppError::Store(_) => ErrorInfo {
                code: "internal_error",
                message: "Database error".to_string(),
                details: json!({}),
            },
            AppError::Internal { message, details } => ErrorInfo {
                code: "internal_error",
                message: message.clone(),
                details: details.clone(),
            },
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Invalid request", details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
