mod common;

use axum::{Router, http::StatusCode, middleware, routing::get};
use axum_test::TestServer;
use serde_json::json;
use tinylink::api::middleware::errors::{handle_panic, sanitize_errors};
use tinylink::config::Environment;
use tower_http::catch_panic::CatchPanicLayer;

#[tokio::test]
async fn test_shorten_redirect_and_stats_flow() {
    let (server, _state) = common::create_app_server();

    let created = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let code = created.json::<serde_json::Value>()["shortCode"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(code.len(), 6);

    let redirect = server.get(&format!("/{code}")).await;
    redirect.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(redirect.header("location"), "https://example.com");

    let stats = server
        .get(&format!("/stats/{code}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(stats["clicks"], 1);

    server
        .get(&format!("/{code}"))
        .await
        .assert_status(StatusCode::MOVED_PERMANENTLY);

    let stats = server
        .get(&format!("/stats/{code}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(stats["clicks"], 2);
}

#[tokio::test]
async fn test_shorten_rejects_bad_input() {
    let (server, _state) = common::create_app_server();

    server
        .post("/shorten")
        .json(&json!({}))
        .await
        .assert_status_bad_request();
    server
        .post("/shorten")
        .json(&json!({ "url": "ftp://x" }))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_unknown_code_is_not_found() {
    let (server, _state) = common::create_app_server();

    server.get("/zzzzzz").await.assert_status_not_found();
    server.get("/stats/zzzzzz").await.assert_status_not_found();
}

#[tokio::test]
async fn test_malformed_code_is_rejected() {
    let (server, _state) = common::create_app_server();

    server.get("/abc").await.assert_status_bad_request();
    server.get("/abc!23").await.assert_status_bad_request();
    server.get("/stats/abc").await.assert_status_bad_request();
}

#[tokio::test]
async fn test_static_routes_take_precedence_over_codes() {
    let (server, _state) = common::create_app_server();

    let health = server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<serde_json::Value>()["status"], "healthy");

    server.get("/metrics").await.assert_status_ok();
}

#[tokio::test]
async fn test_service_info() {
    let (server, _state) = common::create_app_server();

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["service"], "TinyLink");
    assert_eq!(json["status"], "running");
    assert_eq!(json["endpoints"]["shorten"], "POST /shorten");
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let (server, _state) = common::create_app_server();

    let response = server.get("/unknown/route").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["path"], "/unknown/route");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let (server, _state) = common::create_app_server();

    let response = server.get("/health").await;

    let request_id = response.header("x-request-id");
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let (server, _state) = common::create_app_server();

    let response = server
        .get("/health")
        .add_header("x-request-id", "trace-me-123")
        .await;

    assert_eq!(response.header("x-request-id"), "trace-me-123");
}

#[tokio::test]
async fn test_metrics_record_request_durations() {
    let (server, _state) = common::create_app_server();

    server.get("/health").await.assert_status_ok();
    server.get("/zzzzzz").await.assert_status_not_found();

    let body = server.get("/metrics").await.text();

    assert!(body.contains("http_request_duration_seconds"));
    assert!(body.contains(r#"route="/health""#));
    assert!(body.contains(r#"route="/{code}""#));
    assert!(body.contains(r#"status_code="404""#));
}

async fn panicking_handler() -> &'static str {
    panic!("registry invariant broken")
}

fn panic_server(environment: Environment) -> TestServer {
    let state = common::create_test_state_for(environment);
    let app = Router::new()
        .route("/boom", get(panicking_handler))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn_with_state(state, sanitize_errors));

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_panic_details_visible_in_development() {
    let server = panic_server(Environment::Development);

    let response = server.get("/boom").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["details"]["panic"], "registry invariant broken");
}

#[tokio::test]
async fn test_panic_details_hidden_in_production() {
    let server = panic_server(Environment::Production);

    let response = server.get("/boom").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["message"], "Internal server error");
    assert_eq!(json["error"]["details"], json!({}));
}
