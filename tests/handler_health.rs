mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortlink::api::handlers::health_handler;

#[tokio::test]
async fn test_health_ok() {
    let pool = common::test_pool().await;
    let (state, _rx) = common::create_test_state(pool, 10);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["click_queue"]["status"], "ok");
}

#[tokio::test]
async fn test_health_degraded_without_workers() {
    let pool = common::test_pool().await;
    let (state, rx) = common::create_test_state(pool, 10);
    drop(rx);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["click_queue"]["status"], "error");
}
