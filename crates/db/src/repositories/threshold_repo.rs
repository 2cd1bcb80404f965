//! Repository for the `alert_thresholds` table.

use hivewatch_core::thresholds::Thresholds;
use hivewatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::threshold::AlertThreshold;

/// Column list for `alert_thresholds` queries.
const COLUMNS: &str = "\
    id, user_id, \
    temperature_min, temperature_max, humidity_min, humidity_max, \
    sound_min, sound_max, weight_min, weight_max, \
    created_at, updated_at";

/// Provides query operations for per-user thresholds.
pub struct ThresholdRepo;

impl ThresholdRepo {
    /// Get a user's thresholds, if configured.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<AlertThreshold>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alert_thresholds WHERE user_id = $1");
        sqlx::query_as::<_, AlertThreshold>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace a user's thresholds (one row per user).
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        thresholds: &Thresholds,
    ) -> Result<AlertThreshold, sqlx::Error> {
        let query = format!(
            "INSERT INTO alert_thresholds \
                (user_id, temperature_min, temperature_max, humidity_min, humidity_max, \
                 sound_min, sound_max, weight_min, weight_max) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (user_id) \
             DO UPDATE SET \
                temperature_min = EXCLUDED.temperature_min, \
                temperature_max = EXCLUDED.temperature_max, \
                humidity_min = EXCLUDED.humidity_min, \
                humidity_max = EXCLUDED.humidity_max, \
                sound_min = EXCLUDED.sound_min, \
                sound_max = EXCLUDED.sound_max, \
                weight_min = EXCLUDED.weight_min, \
                weight_max = EXCLUDED.weight_max, \
                updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AlertThreshold>(&query)
            .bind(user_id)
            .bind(thresholds.temperature_min)
            .bind(thresholds.temperature_max)
            .bind(thresholds.humidity_min)
            .bind(thresholds.humidity_max)
            .bind(thresholds.sound_min)
            .bind(thresholds.sound_max)
            .bind(thresholds.weight_min)
            .bind(thresholds.weight_max)
            .fetch_one(pool)
            .await
    }
}
