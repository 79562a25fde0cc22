mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortlink::api::handlers::stats_handler;

#[tokio::test]
async fn test_stats_counts_clicks() {
    let pool = common::test_pool().await;
    let (state, _rx) = common::create_test_state(pool.clone(), 10);
    let app = Router::new()
        .route("/api/v1/links/{code}/stats", get(stats_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let link = common::create_test_link(&pool, "stat01", "https://example.com").await;
    let other = common::create_test_link(&pool, "stat02", "https://example.org").await;

    for _ in 0..3 {
        common::create_test_click(&pool, link.id, "10.0.0.1").await;
    }
    common::create_test_click(&pool, other.id, "10.0.0.2").await;

    let response = server.get("/api/v1/links/stat01/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_code"], "stat01");
    assert_eq!(json["long_url"], "https://example.com");
    assert_eq!(json["total_clicks"], 3);
}

#[tokio::test]
async fn test_stats_for_unclicked_link() {
    let pool = common::test_pool().await;
    let (state, _rx) = common::create_test_state(pool.clone(), 10);
    let app = Router::new()
        .route("/api/v1/links/{code}/stats", get(stats_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    common::create_test_link(&pool, "fresh1", "https://example.com").await;

    let response = server.get("/api/v1/links/fresh1/stats").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["total_clicks"], 0);
}

#[tokio::test]
async fn test_stats_not_found() {
    let pool = common::test_pool().await;
    let (state, _rx) = common::create_test_state(pool, 10);
    let app = Router::new()
        .route("/api/v1/links/{code}/stats", get(stats_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/v1/links/zzzzzz/stats").await;

    response.assert_status_not_found();
}
