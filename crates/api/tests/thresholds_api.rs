//! HTTP-level integration tests for thresholds and reading ingestion.
//!
//! Runs the full router against a migrated test database with the
//! Postgres-backed alert store.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

use common::{body_json, build_pg_test_app, get, post, post_json, put_json};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_hive(pool: &PgPool, user_id: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO hives (user_id, name, alerts_enabled) VALUES ($1, $2, true) RETURNING id",
    )
    .bind(user_id)
    .bind("North meadow")
    .fetch_one(pool)
    .await
    .expect("hive insert should succeed")
}

fn thresholds_body(temperature_min: f64, temperature_max: f64) -> serde_json::Value {
    json!({
        "temperature_min": temperature_min,
        "temperature_max": temperature_max,
        "humidity_min": 40.0,
        "humidity_max": 65.0,
        "sound_min": 30.0,
        "sound_max": 60.0,
        "weight_min": 10.0,
        "weight_max": 25.0,
    })
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_thresholds_falls_back_to_defaults(pool: PgPool) {
    let app = build_pg_test_app(pool);

    let response = app
        .oneshot(get("/api/v1/users/5/thresholds"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_default"], true);
    assert_eq!(json["data"]["temperature_min"], 32.0);
    assert_eq!(json["data"]["temperature_max"], 36.0);
    assert_eq!(json["data"]["weight_max"], 25.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_thresholds_stores_and_replaces(pool: PgPool) {
    let app = build_pg_test_app(pool);

    let response = app
        .clone()
        .oneshot(put_json("/api/v1/users/5/thresholds", thresholds_body(31.0, 37.5)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_default"], false);
    assert_eq!(json["data"]["temperature_max"], 37.5);

    app.clone()
        .oneshot(put_json("/api/v1/users/5/thresholds", thresholds_body(30.0, 39.0)))
        .await
        .unwrap();

    let response = app
        .oneshot(get("/api/v1/users/5/thresholds"))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_default"], false);
    assert_eq!(json["data"]["temperature_min"], 30.0);
    assert_eq!(json["data"]["temperature_max"], 39.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_thresholds_with_inverted_range_is_rejected(pool: PgPool) {
    let app = build_pg_test_app(pool);

    let response = app
        .clone()
        .oneshot(put_json("/api/v1/users/5/thresholds", thresholds_body(36.0, 32.0)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // Nothing was stored.
    let response = app
        .oneshot(get("/api/v1/users/5/thresholds"))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_default"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_thresholds_with_equal_bounds_is_rejected(pool: PgPool) {
    let app = build_pg_test_app(pool);

    let response = app
        .oneshot(put_json("/api/v1/users/5/thresholds", thresholds_body(34.0, 34.0)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Readings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn reading_without_metrics_is_rejected(pool: PgPool) {
    let hive_id = create_hive(&pool, 5).await;
    let app = build_pg_test_app(pool);

    let response = app
        .oneshot(post_json(
            &format!("/api/v1/hives/{hive_id}/readings"),
            json!({ "recorded_at": "2026-06-15T14:00:00Z" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reading_for_unknown_hive_returns_404(pool: PgPool) {
    let app = build_pg_test_app(pool);

    let response = app
        .oneshot(post_json(
            "/api/v1/hives/999999/readings",
            json!({ "temperature": 35.0, "recorded_at": "2026-06-15T14:00:00Z" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ingested_reading_drives_a_check(pool: PgPool) {
    let hive_id = create_hive(&pool, 5).await;
    let app = build_pg_test_app(pool);

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/v1/hives/{hive_id}/readings"),
            json!({ "temperature": 38.0, "humidity": 50.0, "recorded_at": "2026-06-15T14:00:00Z" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["hive_id"], hive_id);
    assert_eq!(json["data"]["temperature"], 38.0);

    let response = app
        .clone()
        .oneshot(post("/api/v1/users/5/alerts/check"))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["created"], 1);

    let response = app
        .oneshot(get("/api/v1/users/5/alerts"))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(
        json["data"][0]["message"],
        "Temperature is too high (38.0°C)"
    );
}
