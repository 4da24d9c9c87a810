//! Shared application state injected into handlers and middleware.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::services::LinkService;
use crate::config::Environment;
use crate::infrastructure::metrics::Metrics;
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Link service over the in-memory registry.
pub type AppLinkService = LinkService<InMemoryLinkRepository>;

/// State shared by every request.
///
/// Cloning is cheap: services and metrics are behind `Arc`. The registry is
/// owned by the link service, so each `AppState` built from a fresh
/// repository is fully isolated from any other.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub metrics: Arc<Metrics>,
    pub environment: Environment,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        link_service: Arc<AppLinkService>,
        metrics: Arc<Metrics>,
        environment: Environment,
    ) -> Self {
        Self {
            link_service,
            metrics,
            environment,
            started_at: Instant::now(),
        }
    }

    /// Time since this state was created.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
