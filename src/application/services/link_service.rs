//! Link creation and resolution service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CODE_LENGTH, generate_code};

/// Attempts made to find a free code before giving up.
pub const MAX_ATTEMPTS: usize = 5;

/// Service for creating and resolving short links.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Issues a fresh short code for `long_url` and persists the link.
    ///
    /// The URL is stored verbatim; validation happens at the HTTP boundary.
    ///
    /// # Code Generation
    ///
    /// Up to [`MAX_ATTEMPTS`] sequential attempts. Each attempt generates a
    /// 6-character code and checks the store:
    ///
    /// - code free: accept it
    /// - code taken: log the collision and try again
    /// - lookup failed: abort with that error
    ///
    /// # Errors
    ///
    /// - [`AppError::Generation`] if the random source fails (never retried)
    /// - [`AppError::ExhaustedRetries`] if every attempt collided; nothing is written
    /// - [`AppError::Store`] if a lookup or the final insert fails
    pub async fn create_link(&self, long_url: String) -> Result<Link, AppError> {
        let code = self.generate_unique_code().await?;

        let new_link = NewLink {
            code,
            long_url,
            created_at: Utc::now(),
        };

        let link = self.link_repository.create(new_link).await?;
        debug!(code = %link.code, id = link.id, "Short link created");
        Ok(link)
    }

    /// Looks up the link behind a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn resolve_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let code = generate_code(CODE_LENGTH)?;

            match self.link_repository.find_by_code(&code).await? {
                None => return Ok(code),
                Some(_) => {
                    metrics::counter!("short_code_collisions_total").increment(1);
                    warn!(
                        %code,
                        attempt,
                        max_attempts = MAX_ATTEMPTS,
                        "Short code already exists, retrying generation"
                    );
                }
            }
        }

        Err(AppError::ExhaustedRetries {
            attempts: MAX_ATTEMPTS,
        })
    }
}
