//! Repository for the `hive_readings` table (append-only time series).

use hivewatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::reading::{CreateHiveReading, HiveReading};

/// Column list for `hive_readings` SELECT queries.
const COLUMNS: &str = "\
    id, hive_id, temperature, humidity, sound, weight, \
    recorded_at, created_at";

/// Provides query operations for hive sensor readings.
pub struct ReadingRepo;

impl ReadingRepo {
    /// Insert a single reading for a hive.
    pub async fn insert(
        pool: &PgPool,
        hive_id: DbId,
        reading: &CreateHiveReading,
    ) -> Result<HiveReading, sqlx::Error> {
        let query = format!(
            "INSERT INTO hive_readings \
                (hive_id, temperature, humidity, sound, weight, recorded_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HiveReading>(&query)
            .bind(hive_id)
            .bind(reading.temperature)
            .bind(reading.humidity)
            .bind(reading.sound)
            .bind(reading.weight)
            .bind(reading.recorded_at)
            .fetch_one(pool)
            .await
    }

    /// The most recent reading for a hive, by `recorded_at`.
    pub async fn latest_for_hive(
        pool: &PgPool,
        hive_id: DbId,
    ) -> Result<Option<HiveReading>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hive_readings \
             WHERE hive_id = $1 \
             ORDER BY recorded_at DESC, id DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, HiveReading>(&query)
            .bind(hive_id)
            .fetch_optional(pool)
            .await
    }
}
