//! Persistence surface consumed by the alert lifecycle.
//!
//! Each method is one bounded round trip to the backing store. Timeouts are
//! applied by the caller; implementations only report what went wrong.

use async_trait::async_trait;

use crate::alert::{Alert, AlertFilter, AlertUpdate, NewAlert};
use crate::metrics::MetricType;
use crate::reading::{HiveRef, MetricReading};
use crate::thresholds::Thresholds;
use crate::types::{DbId, Timestamp};

/// A failed store access.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend rejected or failed the request (network, pool, SQL).
    #[error("Store backend error: {0}")]
    Backend(String),

    /// The request did not complete within the allotted time.
    #[error("Store request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// A stored row could not be mapped onto the domain model.
    #[error("Malformed stored record: {0}")]
    Malformed(String),
}

/// Everything the alert lifecycle reads from or writes to.
#[async_trait]
pub trait AlertStore: Send + Sync {
    /// The user's thresholds, or `None` if they never configured any.
    async fn get_thresholds(&self, user_id: DbId) -> Result<Option<Thresholds>, StoreError>;

    /// Hives owned by `user_id` that have alerting switched on.
    async fn get_alerting_enabled_hives(&self, user_id: DbId) -> Result<Vec<HiveRef>, StoreError>;

    /// The most recent reading for a hive, if any was ever recorded.
    async fn get_latest_reading(&self, hive_id: DbId) -> Result<Option<MetricReading>, StoreError>;

    /// Open alerts for one user, hive and metric.
    async fn get_open_alerts(
        &self,
        user_id: DbId,
        hive_id: DbId,
        metric: MetricType,
    ) -> Result<Vec<Alert>, StoreError>;

    /// Alerts for one user, hive and metric with `resolved_at > since`.
    async fn get_recently_resolved_alerts(
        &self,
        user_id: DbId,
        hive_id: DbId,
        metric: MetricType,
        since: Timestamp,
    ) -> Result<Vec<Alert>, StoreError>;

    /// Persist a new open, unread alert.
    async fn insert_alert(&self, alert: &NewAlert) -> Result<Alert, StoreError>;

    /// Apply a partial update. Returns `false` if no alert has that id.
    ///
    /// `update.resolved_at` only takes effect on an open alert; an existing
    /// resolution time is never overwritten.
    async fn update_alert(&self, alert_id: DbId, update: &AlertUpdate) -> Result<bool, StoreError>;

    /// Fetch one alert by id.
    async fn get_alert(&self, alert_id: DbId) -> Result<Option<Alert>, StoreError>;

    /// A user's alerts matching `filter`, newest first.
    async fn list_alerts(&self, user_id: DbId, filter: AlertFilter) -> Result<Vec<Alert>, StoreError>;

    /// Users owning at least one hive with alerting switched on.
    async fn list_users_with_alerting(&self) -> Result<Vec<DbId>, StoreError>;
}
