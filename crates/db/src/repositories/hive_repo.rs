//! Repository for the `hives` table.

use hivewatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::hive::Hive;

/// Column list for `hives` queries.
const COLUMNS: &str = "id, user_id, name, alerts_enabled, created_at, updated_at";

/// Provides query operations for hives.
pub struct HiveRepo;

impl HiveRepo {
    /// List a user's hives that have alerting switched on.
    pub async fn list_alerting_enabled(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Hive>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hives \
             WHERE user_id = $1 AND alerts_enabled \
             ORDER BY id"
        );
        sqlx::query_as::<_, Hive>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Distinct owners of at least one alerting-enabled hive.
    pub async fn list_users_with_alerting(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT DISTINCT user_id FROM hives WHERE alerts_enabled ORDER BY user_id",
        )
        .fetch_all(pool)
        .await
    }
}
