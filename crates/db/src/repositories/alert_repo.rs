//! Repository for the `alerts` table.

use hivewatch_core::alert::{AlertFilter, AlertStatus, AlertUpdate, NewAlert};
use hivewatch_core::metrics::MetricType;
use hivewatch_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::alert::AlertRow;

/// Column list for `alerts` queries.
const COLUMNS: &str = "\
    id, user_id, hive_id, metric_type, message, severity, \
    created_at, resolved_at, is_read";

/// Provides query operations for alerts.
pub struct AlertRepo;

impl AlertRepo {
    /// Insert a new open, unread alert.
    pub async fn create(pool: &PgPool, alert: &NewAlert) -> Result<AlertRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO alerts (user_id, hive_id, metric_type, message, severity, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AlertRow>(&query)
            .bind(alert.user_id)
            .bind(alert.hive_id)
            .bind(alert.metric_type.as_str())
            .bind(&alert.message)
            .bind(alert.severity.as_str())
            .bind(alert.created_at)
            .fetch_one(pool)
            .await
    }

    /// Find an alert by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AlertRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alerts WHERE id = $1");
        sqlx::query_as::<_, AlertRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Open alerts for one user, hive and metric.
    pub async fn list_open(
        pool: &PgPool,
        user_id: DbId,
        hive_id: DbId,
        metric: MetricType,
    ) -> Result<Vec<AlertRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM alerts \
             WHERE user_id = $1 AND hive_id = $2 AND metric_type = $3 \
               AND resolved_at IS NULL \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, AlertRow>(&query)
            .bind(user_id)
            .bind(hive_id)
            .bind(metric.as_str())
            .fetch_all(pool)
            .await
    }

    /// Alerts for one user, hive and metric resolved strictly after `since`.
    pub async fn list_resolved_since(
        pool: &PgPool,
        user_id: DbId,
        hive_id: DbId,
        metric: MetricType,
        since: Timestamp,
    ) -> Result<Vec<AlertRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM alerts \
             WHERE user_id = $1 AND hive_id = $2 AND metric_type = $3 \
               AND resolved_at > $4 \
             ORDER BY resolved_at DESC"
        );
        sqlx::query_as::<_, AlertRow>(&query)
            .bind(user_id)
            .bind(hive_id)
            .bind(metric.as_str())
            .bind(since)
            .fetch_all(pool)
            .await
    }

    /// List a user's alerts, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        filter: AlertFilter,
    ) -> Result<Vec<AlertRow>, sqlx::Error> {
        let status = match filter.status {
            AlertStatus::Open => "AND resolved_at IS NULL",
            AlertStatus::Resolved => "AND resolved_at IS NOT NULL",
            AlertStatus::All => "",
        };
        let unread = if filter.unread_only {
            "AND is_read = false"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM alerts \
             WHERE user_id = $1 {status} {unread} \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, AlertRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update.
    ///
    /// `resolved_at` is only written if the alert is still open, so the first
    /// resolution time is kept. Returns `true` if the alert exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        update: &AlertUpdate,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE alerts SET \
                resolved_at = COALESCE(resolved_at, $2), \
                is_read = COALESCE($3, is_read) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(update.resolved_at)
        .bind(update.is_read)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
