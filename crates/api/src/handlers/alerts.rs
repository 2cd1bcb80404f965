//! Handlers for hive alert endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hivewatch_core::alert::{Alert, AlertFilter, AlertStatus};
use hivewatch_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing alerts.
#[derive(Debug, Deserialize)]
pub struct ListAlertsQuery {
    /// `open` (default), `resolved` or `all`.
    pub status: Option<AlertStatus>,
    /// Only return alerts not yet read (default: false).
    pub unread_only: Option<bool>,
}

/// Result of a forced alert check.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub created: usize,
}

/// GET /users/{user_id}/alerts
pub async fn list_alerts(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Query(query): Query<ListAlertsQuery>,
) -> AppResult<Json<DataResponse<Vec<Alert>>>> {
    let filter = AlertFilter {
        status: query.status.unwrap_or_default(),
        unread_only: query.unread_only.unwrap_or(false),
    };
    let alerts = state.alerts.list_alerts(user_id, filter).await?;
    Ok(Json(DataResponse { data: alerts }))
}

/// POST /users/{user_id}/alerts/check
///
/// Run an alert check for the user immediately, outside the schedule.
pub async fn force_check(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<CheckResult>>> {
    let created = state.alerts.run_check(user_id).await?;
    tracing::info!(user_id, created, "Manual alert check finished");
    Ok(Json(DataResponse {
        data: CheckResult { created },
    }))
}

/// POST /alerts/{id}/resolve
///
/// Idempotent: resolving an already-resolved alert also returns 204.
pub async fn resolve_alert(
    State(state): State<AppState>,
    Path(alert_id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.alerts.resolve_alert(alert_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /alerts/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(alert_id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.alerts.mark_read(alert_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
