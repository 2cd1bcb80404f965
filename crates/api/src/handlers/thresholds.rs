//! Handlers for per-user alert thresholds.

use axum::extract::{Path, State};
use axum::Json;
use hivewatch_core::thresholds::Thresholds;
use hivewatch_core::types::DbId;
use hivewatch_db::repositories::ThresholdRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Thresholds in effect for a user.
#[derive(Debug, Serialize)]
pub struct EffectiveThresholds {
    #[serde(flatten)]
    pub thresholds: Thresholds,
    /// `true` when the user has no stored thresholds and defaults apply.
    pub is_default: bool,
}

/// GET /users/{user_id}/thresholds
pub async fn get_thresholds(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<EffectiveThresholds>>> {
    let stored = ThresholdRepo::find_by_user(&state.pool, user_id).await?;
    let data = match stored {
        Some(row) => EffectiveThresholds {
            thresholds: row.to_thresholds(),
            is_default: false,
        },
        None => EffectiveThresholds {
            thresholds: Thresholds::DEFAULT,
            is_default: true,
        },
    };
    Ok(Json(DataResponse { data }))
}

/// PUT /users/{user_id}/thresholds
///
/// Replace the user's thresholds. Every range must have `min < max`.
pub async fn update_thresholds(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<Thresholds>,
) -> AppResult<Json<DataResponse<EffectiveThresholds>>> {
    input.validate()?;
    let row = ThresholdRepo::upsert(&state.pool, user_id, &input).await?;
    tracing::info!(user_id, "Alert thresholds updated");
    Ok(Json(DataResponse {
        data: EffectiveThresholds {
            thresholds: row.to_thresholds(),
            is_default: false,
        },
    }))
}
