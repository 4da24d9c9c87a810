mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use std::sync::Arc;
use tinylink::api::handlers::redirect_handler;
use tinylink::application::services::LinkService;
use tinylink::config::Environment;
use tinylink::domain::repositories::LinkRepository;
use tinylink::infrastructure::metrics::Metrics;
use tinylink::infrastructure::persistence::InMemoryLinkRepository;
use tinylink::state::AppState;

fn redirect_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state();
    let code = common::create_test_link(&state, "https://example.com/target").await;
    let server = redirect_server(state);

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_records_click() {
    let state = common::create_test_state();
    let code = common::create_test_link(&state, "https://example.com").await;
    let server = redirect_server(state.clone());

    server.get(&format!("/{code}")).await;
    server.get(&format!("/{code}")).await;
    server.get(&format!("/{code}")).await;

    let link = state.link_service.get_stats(&code).await.unwrap();
    assert_eq!(link.clicks, 3);
    assert_eq!(state.metrics.url_redirects.get(), 3);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = redirect_server(common::create_test_state());

    let response = server.get("/zzzzzz").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "zzzzzz");
}

#[tokio::test]
async fn test_redirect_code_too_short() {
    let server = redirect_server(common::create_test_state());

    let response = server.get("/abc").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_redirect_code_too_long() {
    let server = redirect_server(common::create_test_state());

    server.get("/nonexistent123").await.assert_status_bad_request();
}

#[tokio::test]
async fn test_redirect_code_with_special_character() {
    let state = common::create_test_state();
    let server = redirect_server(state.clone());

    let response = server.get("/abc!23").await;

    response.assert_status_bad_request();
    assert_eq!(state.metrics.url_redirects.get(), 0);
}

#[tokio::test]
async fn test_redirect_invalid_utf8_segment_returns_json_error() {
    let server = redirect_server(common::create_test_state());

    let response = server.get("/%FF%FE%FD").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_redirect_unsendable_location_counts_no_click() {
    let link_repo = Arc::new(InMemoryLinkRepository::new());
    link_repo
        .save("abc123", "https://example.com/a\nb")
        .await
        .unwrap();
    let link_service = Arc::new(LinkService::new(link_repo.clone(), common::TEST_BASE_URL));
    let state = AppState::new(
        link_service,
        Arc::new(Metrics::new().unwrap()),
        Environment::Development,
    );
    let server = redirect_server(state.clone());

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "internal_error"
    );

    let link = link_repo.get("abc123").await.unwrap().unwrap();
    assert_eq!(link.clicks, 0);
    assert_eq!(state.metrics.url_redirects.get(), 0);
}
