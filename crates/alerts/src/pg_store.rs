//! [`AlertStore`] backed by the Postgres repositories in `hivewatch-db`.

use async_trait::async_trait;
use hivewatch_core::alert::{Alert, AlertFilter, AlertUpdate, NewAlert};
use hivewatch_core::metrics::MetricType;
use hivewatch_core::reading::{HiveRef, MetricReading};
use hivewatch_core::store::{AlertStore, StoreError};
use hivewatch_core::thresholds::Thresholds;
use hivewatch_core::types::{DbId, Timestamp};
use hivewatch_db::models::alert::AlertRow;
use hivewatch_db::repositories::{AlertRepo, HiveRepo, ReadingRepo, ThresholdRepo};
use hivewatch_db::DbPool;

/// Postgres implementation of [`AlertStore`].
#[derive(Clone)]
pub struct PgAlertStore {
    pool: DbPool,
}

impl PgAlertStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn to_alert(row: AlertRow) -> Result<Alert, StoreError> {
    let id = row.id;
    Alert::try_from(row).map_err(|e| StoreError::Malformed(format!("alert {id}: {e}")))
}

fn to_alerts(rows: Vec<AlertRow>) -> Result<Vec<Alert>, StoreError> {
    rows.into_iter().map(to_alert).collect()
}

#[async_trait]
impl AlertStore for PgAlertStore {
    async fn get_thresholds(&self, user_id: DbId) -> Result<Option<Thresholds>, StoreError> {
        let Some(row) = ThresholdRepo::find_by_user(&self.pool, user_id)
            .await
            .map_err(backend)?
        else {
            return Ok(None);
        };

        let thresholds = row.to_thresholds();
        thresholds
            .validate()
            .map_err(|e| StoreError::Malformed(format!("thresholds {}: {e}", row.id)))?;
        Ok(Some(thresholds))
    }

    async fn get_alerting_enabled_hives(&self, user_id: DbId) -> Result<Vec<HiveRef>, StoreError> {
        let hives = HiveRepo::list_alerting_enabled(&self.pool, user_id)
            .await
            .map_err(backend)?;
        Ok(hives.into_iter().map(HiveRef::from).collect())
    }

    async fn get_latest_reading(&self, hive_id: DbId) -> Result<Option<MetricReading>, StoreError> {
        let row = ReadingRepo::latest_for_hive(&self.pool, hive_id)
            .await
            .map_err(backend)?;
        Ok(row.map(MetricReading::from))
    }

    async fn get_open_alerts(
        &self,
        user_id: DbId,
        hive_id: DbId,
        metric: MetricType,
    ) -> Result<Vec<Alert>, StoreError> {
        let rows = AlertRepo::list_open(&self.pool, user_id, hive_id, metric)
            .await
            .map_err(backend)?;
        to_alerts(rows)
    }

    async fn get_recently_resolved_alerts(
        &self,
        user_id: DbId,
        hive_id: DbId,
        metric: MetricType,
        since: Timestamp,
    ) -> Result<Vec<Alert>, StoreError> {
        let rows = AlertRepo::list_resolved_since(&self.pool, user_id, hive_id, metric, since)
            .await
            .map_err(backend)?;
        to_alerts(rows)
    }

    async fn insert_alert(&self, alert: &NewAlert) -> Result<Alert, StoreError> {
        let row = AlertRepo::create(&self.pool, alert)
            .await
            .map_err(backend)?;
        to_alert(row)
    }

    async fn update_alert(&self, alert_id: DbId, update: &AlertUpdate) -> Result<bool, StoreError> {
        AlertRepo::update(&self.pool, alert_id, update)
            .await
            .map_err(backend)
    }

    async fn get_alert(&self, alert_id: DbId) -> Result<Option<Alert>, StoreError> {
        AlertRepo::find_by_id(&self.pool, alert_id)
            .await
            .map_err(backend)?
            .map(to_alert)
            .transpose()
    }

    async fn list_alerts(&self, user_id: DbId, filter: AlertFilter) -> Result<Vec<Alert>, StoreError> {
        let rows = AlertRepo::list_for_user(&self.pool, user_id, filter)
            .await
            .map_err(backend)?;
        to_alerts(rows)
    }

    async fn list_users_with_alerting(&self) -> Result<Vec<DbId>, StoreError> {
        HiveRepo::list_users_with_alerting(&self.pool)
            .await
            .map_err(backend)
    }
}
