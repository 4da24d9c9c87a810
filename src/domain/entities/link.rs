//! Short link entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click counter.
///
/// `code` and `created_at` never change once the link exists. `clicks` only
/// moves forward through [`ShortLink::record_click`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl ShortLink {
    /// Creates a link with zero clicks, timestamped now.
    pub fn new(code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
            created_at: Utc::now(),
            clicks: 0,
        }
    }

    /// Counts one redirect through this link.
    pub fn record_click(&mut self) {
        self.clicks = self.clicks.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let before = Utc::now();
        let link = ShortLink::new("abc123", "https://example.com");

        assert_eq!(link.code, "abc123");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.clicks, 0);
        assert!(link.created_at >= before);
    }

    #[test]
    fn test_record_click_increments() {
        let mut link = ShortLink::new("abc123", "https://example.com");
        let created_at = link.created_at;

        link.record_click();
        link.record_click();

        assert_eq!(link.clicks, 2);
        assert_eq!(link.created_at, created_at);
    }

    #[test]
    fn test_record_click_saturates() {
        let mut link = ShortLink::new("abc123", "https://example.com");
        link.clicks = u64::MAX;

        link.record_click();

        assert_eq!(link.clicks, u64::MAX);
    }
}
