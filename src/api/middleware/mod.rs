//! HTTP middleware for request processing.
//!
//! Provides request ids, access logging, metrics and error sanitizing.

pub mod errors;
pub mod metrics;
pub mod request_id;
pub mod tracing;
