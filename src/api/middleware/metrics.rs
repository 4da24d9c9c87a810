//! Request duration metrics middleware.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Records `http_request_duration_seconds` for every routed request.
///
/// Install with `route_layer` so the matched route template (for example
/// `/stats/{code}`) is available and used as the `route` label instead of
/// the raw path.
pub async fn track_metrics(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    state
        .metrics
        .observe_request(&method, &route, response.status().as_u16(), start.elapsed());

    response
}
