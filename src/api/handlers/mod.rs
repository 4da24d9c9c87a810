//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod metrics;
pub mod redirect;
pub mod service_info;
pub mod shorten;
pub mod stats;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use redirect::redirect_handler;
pub use service_info::service_info_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
