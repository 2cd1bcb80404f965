pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{alerts, readings, thresholds};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users/{user_id}/alerts                          list (?status, unread_only)
/// /users/{user_id}/alerts/check                    run a check now (POST)
/// /users/{user_id}/thresholds                      get, replace (PUT)
///
/// /alerts/{id}/resolve                             resolve (POST)
/// /alerts/{id}/read                                mark read (POST)
///
/// /hives/{hive_id}/readings                        ingest a reading (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users/{user_id}/alerts", get(alerts::list_alerts))
        .route("/users/{user_id}/alerts/check", post(alerts::force_check))
        .route(
            "/users/{user_id}/thresholds",
            get(thresholds::get_thresholds).put(thresholds::update_thresholds),
        )
        .route("/alerts/{id}/resolve", post(alerts::resolve_alert))
        .route("/alerts/{id}/read", post(alerts::mark_read))
        .route("/hives/{hive_id}/readings", post(readings::create_reading))
}
