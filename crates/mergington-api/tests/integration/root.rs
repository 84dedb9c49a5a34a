//! Root redirect, health and static asset routes.

use axum::http::StatusCode;

use crate::common::TestApp;

#[tokio::test]
async fn test_root_redirects_to_index() {
    let app = TestApp::new();
    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers["location"], "/static/index.html");
}

#[tokio::test]
async fn test_index_is_served() {
    let app = TestApp::new();
    let response = app.get("/static/index.html").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("Mergington High School"));
}

#[tokio::test]
async fn test_missing_static_asset() {
    let app = TestApp::new();
    let response = app.get("/static/nope.js").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_reports_activity_count() {
    let app = TestApp::new();
    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["status"], "healthy");
    assert_eq!(response.json["activity_count"], 9);
    assert_eq!(response.json["version"], env!("CARGO_PKG_VERSION"));
}
