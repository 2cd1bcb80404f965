//! Handler for hive sensor reading ingestion.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hivewatch_core::types::DbId;
use hivewatch_db::models::reading::{CreateHiveReading, HiveReading};
use hivewatch_db::repositories::ReadingRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /hives/{hive_id}/readings
///
/// Append a sensor reading. At least one metric must be present and every
/// present value must be finite.
pub async fn create_reading(
    State(state): State<AppState>,
    Path(hive_id): Path<DbId>,
    Json(input): Json<CreateHiveReading>,
) -> AppResult<(StatusCode, Json<DataResponse<HiveReading>>)> {
    validate_reading(&input)?;
    let reading = ReadingRepo::insert(&state.pool, hive_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: reading })))
}

fn validate_reading(input: &CreateHiveReading) -> AppResult<()> {
    let values = [input.temperature, input.humidity, input.sound, input.weight];
    if values.iter().all(Option::is_none) {
        return Err(AppError::BadRequest(
            "reading must contain at least one metric".to_string(),
        ));
    }
    if values.iter().flatten().any(|v| !v.is_finite()) {
        return Err(AppError::BadRequest(
            "metric values must be finite numbers".to_string(),
        ));
    }
    Ok(())
}
