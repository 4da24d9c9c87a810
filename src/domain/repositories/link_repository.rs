//! Repository trait for short link data access.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Registry of short links keyed by code.
///
/// Implementations must be safe to share across concurrent requests: no
/// operation may corrupt the store or lose a click increment.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns true if a link with this code is stored.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Stores a new link with zero clicks, replacing any existing entry.
    ///
    /// Does not enforce uniqueness. Use [`LinkRepository::insert_if_absent`]
    /// when the code must not already be taken.
    async fn save(&self, code: &str, original_url: &str) -> Result<ShortLink, AppError>;

    /// Atomically stores a new link if the code is free.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` with the stored link
    /// - `Ok(None)` if the code is already taken (nothing is written)
    async fn insert_if_absent(
        &self,
        code: &str,
        original_url: &str,
    ) -> Result<Option<ShortLink>, AppError>;

    /// Finds a link by its short code without modifying it.
    async fn get(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Atomically increments the click counter.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` with the counter already incremented
    /// - `Ok(None)` if no link matches the code
    async fn increment_clicks(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Number of stored links.
    async fn count(&self) -> Result<usize, AppError>;
}
