//! Short code generation and validation utilities.
//!
//! Codes are exactly [`CODE_LENGTH`] characters drawn from the 62-symbol
//! alphabet `[A-Za-z0-9]`, giving 62^6 (about 56.8 billion) possible codes.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde_json::json;

/// Number of characters in every short code.
pub const CODE_LENGTH: usize = 6;

/// Codes that cannot be issued as short links.
///
/// These match static route segments, which take precedence over `/{code}`.
const RESERVED_CODES: &[&str] = &["health", "metrics", "shorten", "stats"];

/// Returns true if `code` collides with a static route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Generates a random short code.
///
/// Uses the thread-local CSPRNG from `rand`, so codes are not predictable
/// from previously issued ones.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a short code taken from a request path.
///
/// # Rules
///
/// - Length: exactly 6 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_short_code("aB3xY9").is_ok());
///
/// assert!(validate_short_code("abc").is_err());     // Too short
/// assert!(validate_short_code("abc!23").is_err());  // Special character
/// ```
pub fn validate_short_code(code: &str) -> Result<(), AppError> {
    let length = code.chars().count();
    if length != CODE_LENGTH {
        return Err(AppError::bad_request(
            "Short code must be exactly 6 characters",
            json!({ "provided_length": length }),
        ));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Short code must contain only letters and numbers",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
