//! Tests for the root-level `/health` route.

mod common;

use axum::http::StatusCode;
use tower::ServiceExt;

use common::{body_json, build_test_app, get};

#[tokio::test]
async fn health_reports_degraded_when_database_is_unreachable() {
    let (_store, app) = build_test_app();

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_ne!(json["database"], "up");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn health_is_not_mounted_under_api_prefix() {
    let (_store, app) = build_test_app();

    let response = app.oneshot(get("/api/v1/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
