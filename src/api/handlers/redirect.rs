//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_short_code;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Validate the code format (6 alphanumeric characters)
/// 2. Look up the link and build the `Location` header value
/// 3. Atomically count the click
/// 4. Return 301 Moved Permanently with `Location` set to the original URL
///
/// # Errors
///
/// Returns 400 Bad Request if the code is malformed or not valid UTF-8.
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 if the stored URL cannot be sent as a header; no click is counted.
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let Path(code) = path?;
    validate_short_code(&code)?;

    let link = state.link_service.get_stats(&code).await?;
    let location = HeaderValue::try_from(link.original_url.as_str()).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "code": code, "reason": e.to_string() }),
        )
    })?;

    let link = state.link_service.resolve(&code).await?;
    state.metrics.url_redirects.inc();

    debug!(code = %link.code, clicks = link.clicks, "Redirecting");

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}
