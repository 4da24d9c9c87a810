//! Validation of URLs submitted for shortening.

use url::Url;

/// Maximum accepted URL length in characters.
pub const MAX_URL_LENGTH: usize = 2048;

/// Reasons a submitted URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Checks that `input` is an absolute `http` or `https` URL with a host.
///
/// The URL is only inspected, never rewritten: the stored and redirected
/// value is exactly what the client sent.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for unparseable input and
/// for input containing whitespace or control characters, which the parser
/// would silently strip but a `Location` header cannot carry.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for other schemes such
/// as `ftp:`, `javascript:` or `data:`.
pub fn validate_http_url(input: &str) -> Result<(), UrlValidationError> {
    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlValidationError::InvalidFormat(
            "URL must not contain whitespace or control characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}
