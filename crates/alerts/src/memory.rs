//! In-process [`AlertStore`] with fault injection.
//!
//! Mirrors the Postgres store's query semantics closely enough to drive the
//! lifecycle in tests and local runs without a database.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use hivewatch_core::alert::{Alert, AlertFilter, AlertUpdate, NewAlert};
use hivewatch_core::metrics::MetricType;
use hivewatch_core::reading::{HiveRef, MetricReading};
use hivewatch_core::store::{AlertStore, StoreError};
use hivewatch_core::thresholds::Thresholds;
use hivewatch_core::types::{DbId, Timestamp};

#[derive(Debug, Clone)]
struct StoredHive {
    user_id: DbId,
    hive: HiveRef,
    alerts_enabled: bool,
}

/// Injected failures. Hive-scoped sets apply to the named hive only.
#[derive(Debug, Default)]
struct Faults {
    thresholds: bool,
    hive_listing: bool,
    readings: HashSet<DbId>,
    slow_readings: HashMap<DbId, Duration>,
    alert_lookups: HashSet<DbId>,
    inserts: HashSet<DbId>,
}

#[derive(Debug, Default)]
struct Inner {
    thresholds: HashMap<DbId, Thresholds>,
    hives: Vec<StoredHive>,
    readings: Vec<MetricReading>,
    alerts: Vec<Alert>,
    next_alert_id: DbId,
    faults: Faults,
}

/// A [`AlertStore`] held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryAlertStore {
    inner: Mutex<Inner>,
}

impl MemoryAlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Configure thresholds for a user.
    pub fn set_thresholds(&self, user_id: DbId, thresholds: Thresholds) {
        self.lock().thresholds.insert(user_id, thresholds);
    }

    /// Register a hive owned by `user_id`.
    pub fn add_hive(&self, user_id: DbId, hive_id: DbId, alerts_enabled: bool) {
        self.lock().hives.push(StoredHive {
            user_id,
            hive: HiveRef { hive_id },
            alerts_enabled,
        });
    }

    /// Record a sensor reading.
    pub fn add_reading(&self, reading: MetricReading) {
        self.lock().readings.push(reading);
    }

    /// Store an alert as-is, assigning the next id.
    pub fn seed_alert(&self, new_alert: &NewAlert, resolved_at: Option<Timestamp>) -> Alert {
        let mut inner = self.lock();
        let mut alert = inner.push_alert(new_alert);
        if resolved_at.is_some() {
            alert.resolved_at = resolved_at;
            alert.is_read = true;
            if let Some(stored) = inner.alerts.iter_mut().find(|a| a.id == alert.id) {
                *stored = alert.clone();
            }
        }
        alert
    }

    /// Snapshot of every stored alert, in insertion order.
    pub fn alerts(&self) -> Vec<Alert> {
        self.lock().alerts.clone()
    }

    /// Make `get_thresholds` fail.
    pub fn fail_thresholds(&self) {
        self.lock().faults.thresholds = true;
    }

    /// Make `get_alerting_enabled_hives` fail.
    pub fn fail_hive_listing(&self) {
        self.lock().faults.hive_listing = true;
    }

    /// Make `get_latest_reading` fail for one hive.
    pub fn fail_readings_for(&self, hive_id: DbId) {
        self.lock().faults.readings.insert(hive_id);
    }

    /// Make `get_latest_reading` take `delay` for one hive.
    pub fn delay_readings_for(&self, hive_id: DbId, delay: Duration) {
        self.lock().faults.slow_readings.insert(hive_id, delay);
    }

    /// Make open / recently-resolved lookups fail for one hive.
    pub fn fail_alert_lookups_for(&self, hive_id: DbId) {
        self.lock().faults.alert_lookups.insert(hive_id);
    }

    /// Make `insert_alert` fail for one hive.
    pub fn fail_inserts_for(&self, hive_id: DbId) {
        self.lock().faults.inserts.insert(hive_id);
    }
}

impl Inner {
    fn push_alert(&mut self, new_alert: &NewAlert) -> Alert {
        self.next_alert_id += 1;
        let alert = Alert {
            id: self.next_alert_id,
            user_id: new_alert.user_id,
            hive_id: new_alert.hive_id,
            metric_type: new_alert.metric_type,
            message: new_alert.message.clone(),
            severity: new_alert.severity,
            created_at: new_alert.created_at,
            resolved_at: None,
            is_read: false,
        };
        self.alerts.push(alert.clone());
        alert
    }

    fn series<'a>(
        &'a self,
        user_id: DbId,
        hive_id: DbId,
        metric: MetricType,
    ) -> impl Iterator<Item = &'a Alert> + 'a {
        self.alerts.iter().filter(move |a| {
            a.user_id == user_id && a.hive_id == hive_id && a.metric_type == metric
        })
    }

    fn check_alert_lookup(&self, hive_id: DbId) -> Result<(), StoreError> {
        if self.faults.alert_lookups.contains(&hive_id) {
            return Err(StoreError::Backend(format!(
                "injected alert lookup failure for hive {hive_id}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl AlertStore for MemoryAlertStore {
    async fn get_thresholds(&self, user_id: DbId) -> Result<Option<Thresholds>, StoreError> {
        let inner = self.lock();
        if inner.faults.thresholds {
            return Err(StoreError::Backend("injected thresholds failure".into()));
        }
        Ok(inner.thresholds.get(&user_id).copied())
    }

    async fn get_alerting_enabled_hives(&self, user_id: DbId) -> Result<Vec<HiveRef>, StoreError> {
        let inner = self.lock();
        if inner.faults.hive_listing {
            return Err(StoreError::Backend("injected hive listing failure".into()));
        }
        Ok(inner
            .hives
            .iter()
            .filter(|h| h.user_id == user_id && h.alerts_enabled)
            .map(|h| h.hive.clone())
            .collect())
    }

    async fn get_latest_reading(&self, hive_id: DbId) -> Result<Option<MetricReading>, StoreError> {
        let delay = {
            let inner = self.lock();
            if inner.faults.readings.contains(&hive_id) {
                return Err(StoreError::Backend(format!(
                    "injected reading failure for hive {hive_id}"
                )));
            }
            inner.faults.slow_readings.get(&hive_id).copied()
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let inner = self.lock();
        Ok(inner
            .readings
            .iter()
            .filter(|r| r.hive_id == hive_id)
            .max_by_key(|r| r.timestamp)
            .cloned())
    }

    async fn get_open_alerts(
        &self,
        user_id: DbId,
        hive_id: DbId,
        metric: MetricType,
    ) -> Result<Vec<Alert>, StoreError> {
        let inner = self.lock();
        inner.check_alert_lookup(hive_id)?;
        Ok(inner
            .series(user_id, hive_id, metric)
            .filter(|a| a.is_open())
            .cloned()
            .collect())
    }

    async fn get_recently_resolved_alerts(
        &self,
        user_id: DbId,
        hive_id: DbId,
        metric: MetricType,
        since: Timestamp,
    ) -> Result<Vec<Alert>, StoreError> {
        let inner = self.lock();
        inner.check_alert_lookup(hive_id)?;
        Ok(inner
            .series(user_id, hive_id, metric)
            .filter(|a| a.resolved_at.is_some_and(|at| at > since))
            .cloned()
            .collect())
    }

    async fn insert_alert(&self, alert: &NewAlert) -> Result<Alert, StoreError> {
        let mut inner = self.lock();
        if inner.faults.inserts.contains(&alert.hive_id) {
            return Err(StoreError::Backend(format!(
                "injected insert failure for hive {}",
                alert.hive_id
            )));
        }
        Ok(inner.push_alert(alert))
    }

    async fn update_alert(&self, alert_id: DbId, update: &AlertUpdate) -> Result<bool, StoreError> {
        let mut inner = self.lock();
        let Some(alert) = inner.alerts.iter_mut().find(|a| a.id == alert_id) else {
            return Ok(false);
        };
        if alert.resolved_at.is_none() {
            alert.resolved_at = update.resolved_at;
        }
        if let Some(is_read) = update.is_read {
            alert.is_read = is_read;
        }
        Ok(true)
    }

    async fn get_alert(&self, alert_id: DbId) -> Result<Option<Alert>, StoreError> {
        Ok(self.lock().alerts.iter().find(|a| a.id == alert_id).cloned())
    }

    async fn list_alerts(&self, user_id: DbId, filter: AlertFilter) -> Result<Vec<Alert>, StoreError> {
        let inner = self.lock();
        let mut alerts: Vec<Alert> = inner
            .alerts
            .iter()
            .filter(|a| a.user_id == user_id && filter.matches(a))
            .cloned()
            .collect();
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(alerts)
    }

    async fn list_users_with_alerting(&self) -> Result<Vec<DbId>, StoreError> {
        let inner = self.lock();
        let mut users: Vec<DbId> = inner
            .hives
            .iter()
            .filter(|h| h.alerts_enabled)
            .map(|h| h.user_id)
            .collect();
        users.sort_unstable();
        users.dedup();
        Ok(users)
    }
}
