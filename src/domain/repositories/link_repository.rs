//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable mapping of short code to long URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on any database failure, including a
    /// unique violation on `code`.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// - `Ok(Some(link))` - the code is taken
    /// - `Ok(None)` - the code is free
    /// - `Err(_)` - the store could not answer
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;
}
