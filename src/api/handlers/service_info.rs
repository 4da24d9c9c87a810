//! Handler for the root service description.

use axum::Json;
use std::collections::BTreeMap;

use crate::api::dto::service_info::ServiceInfoResponse;
use crate::api::handlers::health::SERVICE_NAME;

/// Describes the service and lists its endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn service_info_handler() -> Json<ServiceInfoResponse> {
    let endpoints = BTreeMap::from([
        ("shorten", "POST /shorten"),
        ("redirect", "GET /{shortCode}"),
        ("stats", "GET /stats/{shortCode}"),
        ("health", "GET /health"),
        ("metrics", "GET /metrics"),
    ]);

    Json(ServiceInfoResponse {
        service: SERVICE_NAME,
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}
