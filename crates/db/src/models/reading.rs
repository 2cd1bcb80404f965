//! Hive sensor reading model (append-only time series).

use hivewatch_core::reading::MetricReading;
use hivewatch_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `hive_readings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HiveReading {
    pub id: DbId,
    pub hive_id: DbId,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub sound: Option<f64>,
    pub weight: Option<f64>,
    pub recorded_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for inserting a reading.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHiveReading {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub sound: Option<f64>,
    pub weight: Option<f64>,
    pub recorded_at: Timestamp,
}

impl From<HiveReading> for MetricReading {
    fn from(row: HiveReading) -> Self {
        MetricReading {
            hive_id: row.hive_id,
            timestamp: row.recorded_at,
            temperature: row.temperature,
            humidity: row.humidity,
            sound: row.sound,
            weight: row.weight,
        }
    }
}
