//! Infrastructure layer for storage and observability.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`metrics`] - Prometheus metrics registry and exposition
//! - [`persistence`] - Link registry implementations

pub mod metrics;
pub mod persistence;
