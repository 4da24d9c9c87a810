//! Link creation, resolution and statistics service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved_code};
use serde_json::json;
use tracing::{info, warn};

/// Maximum number of codes tried before a create gives up.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating and resolving shortened links.
///
/// Owns the uniqueness protocol: codes are claimed through the repository's
/// atomic insert-if-absent, so two concurrent creates can never end up with
/// the same code.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    base_url: String,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` prefixes every short URL; a trailing `/` is ignored.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            link_repository,
            base_url,
        }
    }

    /// Creates a short link for an already validated URL.
    ///
    /// # Code Generation
    ///
    /// Generates a random 6-character code and claims it atomically. On a
    /// collision a new code is tried, up to [`MAX_GENERATION_ATTEMPTS`] times.
    /// Reserved codes count as collisions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::GenerationExhausted`] if every attempt collided.
    /// Propagates repository errors.
    pub async fn create_short_link(&self, original_url: String) -> Result<ShortLink, AppError> {
        self.create_with_generator(original_url, generate_code).await
    }

    async fn create_with_generator(
        &self,
        original_url: String,
        mut next_code: impl FnMut() -> String,
    ) -> Result<ShortLink, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = next_code();

            if is_reserved_code(&code) {
                warn!(code = %code, attempt, "Generated reserved short code, retrying");
                continue;
            }

            match self
                .link_repository
                .insert_if_absent(&code, &original_url)
                .await?
            {
                Some(link) => {
                    info!(code = %link.code, attempt, "Short link created");
                    return Ok(link);
                }
                None => warn!(code = %code, attempt, "Short code collision, retrying"),
            }
        }

        Err(AppError::generation_exhausted(
            "Failed to generate unique short code",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }

    /// Resolves a short code for redirection, counting the click.
    ///
    /// The returned link already includes this click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        self.link_repository
            .increment_clicks(code)
            .await?
            .ok_or_else(|| short_link_not_found(code))
    }

    /// Retrieves a link and its click count without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_stats(&self, code: &str) -> Result<ShortLink, AppError> {
        self.link_repository
            .get(code)
            .await?
            .ok_or_else(|| short_link_not_found(code))
    }

    /// Number of links in the registry.
    pub async fn count_links(&self) -> Result<usize, AppError> {
        self.link_repository.count().await
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}

fn short_link_not_found(code: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "code": code }))
}
