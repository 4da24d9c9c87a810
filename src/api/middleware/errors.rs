//! Error sanitizing and panic recovery.

use std::any::Any;

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::{AppError, InternalFault};
use crate::state::AppState;

/// Message returned in place of internal error details in production.
const SANITIZED_MESSAGE: &str = "Internal server error";

/// Replaces internal error bodies with a generic message in production.
///
/// Only responses built from [`AppError::Internal`] (including recovered
/// panics) are rewritten. The original error was already logged when the
/// response was built.
pub async fn sanitize_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if state.environment.is_production() && response.extensions().get::<InternalFault>().is_some()
    {
        let body = json!({
            "error": { "code": "internal_error", "message": SANITIZED_MESSAGE, "details": {} }
        });
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
    }

    response
}

/// Turns a handler panic into an [`AppError::Internal`] response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal("Unhandled error", json!({ "panic": detail })).into_response()
}
