//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_short_code;

/// Returns click statistics for a short link.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// Reading statistics does not count as a click.
///
/// # Errors
///
/// Returns 400 Bad Request if the code is malformed or not valid UTF-8.
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<StatsResponse>, AppError> {
    let Path(code) = path?;
    validate_short_code(&code)?;

    let link = state.link_service.get_stats(&code).await?;
    let short_url = state.link_service.short_url(&link.code);

    Ok(Json(StatsResponse::new(link, short_url)))
}
