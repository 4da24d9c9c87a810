//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::domain::entities::ShortLink;
use crate::utils::url_validator::validate_http_url;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be HTTP/HTTPS, at most 2048 characters).
    #[validate(
        required(message = "URL is required"),
        length(max = 2048, message = "URL must not exceed 2048 characters"),
        custom(function = "http_url")
    )]
    pub url: Option<String>,
}

fn http_url(url: &str) -> Result<(), ValidationError> {
    validate_http_url(url).map_err(|e| {
        let mut error = ValidationError::new("url")
            .with_message(Cow::Borrowed("Please provide a valid HTTP or HTTPS URL"));
        error.add_param(Cow::Borrowed("reason"), &e.to_string());
        error
    })
}

/// Created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl ShortenResponse {
    pub fn new(link: ShortLink, short_url: String) -> Self {
        Self {
            original_url: link.original_url,
            short_url,
            short_code: link.code,
            created_at: link.created_at,
        }
    }
}
