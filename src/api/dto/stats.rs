//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortLink;

/// Click statistics for a single short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
    pub short_url: String,
}

impl StatsResponse {
    pub fn new(link: ShortLink, short_url: String) -> Self {
        Self {
            short_code: link.code,
            original_url: link.original_url,
            clicks: link.clicks,
            created_at: link.created_at,
            short_url,
        }
    }
}
