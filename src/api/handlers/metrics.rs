//! Handler for Prometheus metrics exposition.

use axum::{extract::State, http::header, response::IntoResponse};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Exposes metrics in the Prometheus text format.
///
/// # Endpoint
///
/// `GET /metrics`
///
/// Uptime and stored-link gauges are refreshed on every scrape.
///
/// # Errors
///
/// Returns 500 Internal Server Error if encoding fails.
pub async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let links = state.link_service.count_links().await?;
    state.metrics.refresh(state.uptime(), links);

    let body = state.metrics.render().map_err(|e| {
        AppError::internal(
            "Failed to encode metrics",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(([(header::CONTENT_TYPE, state.metrics.content_type())], body))
}
