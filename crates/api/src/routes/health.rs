use std::time::Duration;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Upper bound for the database round trip so `/health` answers while Postgres hangs.
const DB_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// Liveness report for load balancers and the dashboard status badge.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the alert store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// `up`, `down` or `timeout`.
    pub database: &'static str,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match tokio::time::timeout(
        DB_CHECK_TIMEOUT,
        hivewatch_db::health_check(&state.pool),
    )
    .await
    {
        Ok(Ok(())) => "up",
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            "down"
        }
        Err(_) => {
            tracing::warn!("Health check: database did not answer in time");
            "timeout"
        }
    };

    Json(HealthResponse {
        status: if database == "up" { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

/// `GET /health`, mounted at the root rather than under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
