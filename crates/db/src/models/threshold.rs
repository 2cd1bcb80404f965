//! Per-user alert threshold model.

use hivewatch_core::thresholds::Thresholds;
use hivewatch_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `alert_thresholds` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AlertThreshold {
    pub id: DbId,
    pub user_id: DbId,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub humidity_min: f64,
    pub humidity_max: f64,
    pub sound_min: f64,
    pub sound_max: f64,
    pub weight_min: f64,
    pub weight_max: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AlertThreshold {
    /// The eight bounds, without row bookkeeping.
    pub fn to_thresholds(&self) -> Thresholds {
        Thresholds {
            temperature_min: self.temperature_min,
            temperature_max: self.temperature_max,
            humidity_min: self.humidity_min,
            humidity_max: self.humidity_max,
            sound_min: self.sound_min,
            sound_max: self.sound_max,
            weight_min: self.weight_min,
            weight_max: self.weight_max,
        }
    }
}
