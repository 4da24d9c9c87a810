//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - Service information
//! - `GET  /health`        - Health check
//! - `GET  /metrics`       - Prometheus metrics
//! - `POST /shorten`       - Create a short link
//! - `GET  /stats/{code}`  - Link statistics
//! - `GET  /{code}`        - Short link redirect
//! - anything else         - JSON 404
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Request id** - Assign `x-request-id` and echo it on the response
//! - **Tracing** - Structured request/response logging
//! - **Error sanitizing** - Hide internal error details in production
//! - **Panic recovery** - Convert handler panics into 500 responses
//! - **Metrics** - Per-route request duration (routed requests only)

use crate::api;
use crate::api::handlers::{
    health_handler, metrics_handler, not_found_handler, service_info_handler,
};
use crate::api::middleware::{errors, metrics, request_id, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;

/// Constructs the application router with all routes and middleware.
///
/// Trailing slash normalization is applied by the server around this router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .merge(api::routes::link_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            metrics::track_metrics,
        ))
        .fallback(not_found_handler)
        .with_state(state.clone())
        .layer(CatchPanicLayer::custom(errors::handle_panic))
        .layer(middleware::from_fn_with_state(
            state,
            errors::sanitize_errors,
        ))
        .layer(tracing::layer())
        .layer(request_id::propagate_layer())
        .layer(request_id::set_layer())
}
