//! Handler for requests that match no route.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Returns a JSON 404 for unknown routes.
pub async fn not_found_handler(method: Method, uri: Uri) -> AppError {
    AppError::not_found(
        "Route not found",
        json!({ "method": method.as_str(), "path": uri.path() }),
    )
}
