#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use tinylink::application::services::LinkService;
use tinylink::config::Environment;
use tinylink::infrastructure::metrics::Metrics;
use tinylink::infrastructure::persistence::InMemoryLinkRepository;
use tinylink::routes::app_router;
use tinylink::state::AppState;

pub const TEST_BASE_URL: &str = "http://tiny.test";

pub fn create_test_state() -> AppState {
    create_test_state_for(Environment::Development)
}

pub fn create_test_state_for(environment: Environment) -> AppState {
    let link_repo = Arc::new(InMemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(link_repo, TEST_BASE_URL));
    let metrics = Arc::new(Metrics::new().unwrap());

    AppState::new(link_service, metrics, environment)
}

/// Test server over the full application router.
pub fn create_app_server() -> (TestServer, AppState) {
    let state = create_test_state();
    let server = TestServer::new(app_router(state.clone())).unwrap();
    (server, state)
}

/// Stores a link directly through the service and returns its code.
pub async fn create_test_link(state: &AppState, url: &str) -> String {
    state
        .link_service
        .create_short_link(url.to_string())
        .await
        .unwrap()
        .code
}
