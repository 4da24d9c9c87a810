//! DTO for the root service description.

use serde::Serialize;
use std::collections::BTreeMap;

/// Basic service information and a map of available endpoints.
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}
