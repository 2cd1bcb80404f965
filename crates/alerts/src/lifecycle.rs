//! Alert lifecycle manager.
//!
//! Runs threshold checks for a user and owns resolve / mark-read. A check is
//! a single sequential pass; concurrent checks for the same user are not
//! serialised, the dedup gate is the only guard against duplicate alerts.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use hivewatch_core::alert::{Alert, AlertFilter, AlertUpdate, NewAlert};
use hivewatch_core::alerting::{decide, evaluate, recent_resolution_cutoff, GateDecision};
use hivewatch_core::error::CoreError;
use hivewatch_core::store::{AlertStore, StoreError};
use hivewatch_core::thresholds::Thresholds;
use hivewatch_core::types::DbId;

use crate::error::AlertError;

/// Per-run counters, logged when a check completes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub hives: usize,
    pub created: usize,
    pub suppressed: usize,
    pub failed_writes: usize,
    pub hives_without_reading: usize,
    pub hives_failed: usize,
}

/// Orchestrates alert checks against an [`AlertStore`].
pub struct AlertLifecycle {
    store: Arc<dyn AlertStore>,
    store_timeout: Duration,
}

impl AlertLifecycle {
    /// Create a manager. Every store access is cut off after `store_timeout`.
    pub fn new(store: Arc<dyn AlertStore>, store_timeout: Duration) -> Self {
        Self {
            store,
            store_timeout,
        }
    }

    /// Check every alerting-enabled hive of `user_id` and return the number
    /// of alerts created.
    ///
    /// Fails only if the user's thresholds or hive list cannot be loaded.
    /// Anything that goes wrong for a single hive is logged and that hive is
    /// skipped.
    pub async fn run_check(&self, user_id: DbId) -> Result<usize, AlertError> {
        self.run_check_summary(user_id)
            .await
            .map(|summary| summary.created)
    }

    /// Same as [`run_check`](Self::run_check), returning all counters.
    pub async fn run_check_summary(&self, user_id: DbId) -> Result<CheckSummary, AlertError> {
        let thresholds = match self.bounded(self.store.get_thresholds(user_id)).await {
            Ok(Some(thresholds)) => thresholds,
            Ok(None) => {
                tracing::debug!(user_id, "No thresholds configured, using defaults");
                Thresholds::DEFAULT
            }
            Err(source) => return Err(AlertError::Thresholds { user_id, source }),
        };

        let hives = self
            .bounded(self.store.get_alerting_enabled_hives(user_id))
            .await
            .map_err(|source| AlertError::Hives { user_id, source })?;

        let mut summary = CheckSummary {
            hives: hives.len(),
            ..CheckSummary::default()
        };

        if hives.is_empty() {
            tracing::debug!(user_id, "No hives with alerting enabled");
            return Ok(summary);
        }

        for hive in &hives {
            if let Err(e) = self
                .check_hive(user_id, hive.hive_id, &thresholds, &mut summary)
                .await
            {
                summary.hives_failed += 1;
                tracing::warn!(
                    user_id,
                    hive_id = hive.hive_id,
                    error = %e,
                    "Skipping hive after store failure"
                );
            }
        }

        tracing::info!(
            user_id,
            hives = summary.hives,
            created = summary.created,
            suppressed = summary.suppressed,
            failed_writes = summary.failed_writes,
            hives_without_reading = summary.hives_without_reading,
            hives_failed = summary.hives_failed,
            "Alert check complete"
        );

        Ok(summary)
    }

    /// Evaluate one hive's latest reading and write the alerts the gate lets
    /// through. A failed insert is counted and does not stop the hive.
    async fn check_hive(
        &self,
        user_id: DbId,
        hive_id: DbId,
        thresholds: &Thresholds,
        summary: &mut CheckSummary,
    ) -> Result<(), StoreError> {
        let Some(reading) = self.bounded(self.store.get_latest_reading(hive_id)).await? else {
            summary.hives_without_reading += 1;
            tracing::debug!(user_id, hive_id, "No reading recorded for hive");
            return Ok(());
        };

        let conditions = evaluate(&reading, thresholds);
        if conditions.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let since = recent_resolution_cutoff(now);

        for condition in &conditions {
            let metric = condition.metric;
            let open = self
                .bounded(self.store.get_open_alerts(user_id, hive_id, metric))
                .await?;
            let recently_resolved = self
                .bounded(
                    self.store
                        .get_recently_resolved_alerts(user_id, hive_id, metric, since),
                )
                .await?;

            match decide(condition, &open, &recently_resolved, now) {
                GateDecision::Create => {
                    let new_alert = NewAlert::from_condition(user_id, condition, now);
                    match self.bounded(self.store.insert_alert(&new_alert)).await {
                        Ok(alert) => {
                            summary.created += 1;
                            tracing::info!(
                                user_id,
                                hive_id,
                                alert_id = alert.id,
                                metric = %metric,
                                severity = %alert.severity,
                                message = %alert.message,
                                "Alert created"
                            );
                        }
                        Err(e) => {
                            summary.failed_writes += 1;
                            tracing::warn!(
                                user_id,
                                hive_id,
                                metric = %metric,
                                error = %e,
                                "Failed to write alert"
                            );
                        }
                    }
                }
                GateDecision::Suppress {
                    reason,
                    matched_alert_id,
                } => {
                    summary.suppressed += 1;
                    tracing::debug!(
                        user_id,
                        hive_id,
                        metric = %metric,
                        ?reason,
                        matched_alert_id,
                        "Alert suppressed"
                    );
                }
            }
        }

        Ok(())
    }

    /// Resolve an alert and mark it read.
    ///
    /// Resolving an already-resolved alert succeeds without touching it.
    pub async fn resolve_alert(&self, alert_id: DbId) -> Result<(), AlertError> {
        let alert = self.find_alert(alert_id).await?;
        if !alert.is_open() {
            tracing::debug!(alert_id, "Alert already resolved");
            return Ok(());
        }

        let update = AlertUpdate {
            resolved_at: Some(Utc::now()),
            is_read: Some(true),
        };
        if !self
            .bounded(self.store.update_alert(alert_id, &update))
            .await?
        {
            return Err(alert_not_found(alert_id));
        }

        tracing::info!(alert_id, hive_id = alert.hive_id, "Alert resolved");
        Ok(())
    }

    /// Mark an alert read without changing its resolution state.
    pub async fn mark_read(&self, alert_id: DbId) -> Result<(), AlertError> {
        let update = AlertUpdate {
            resolved_at: None,
            is_read: Some(true),
        };
        if !self
            .bounded(self.store.update_alert(alert_id, &update))
            .await?
        {
            return Err(alert_not_found(alert_id));
        }
        Ok(())
    }

    /// A user's alerts matching `filter`, newest first.
    pub async fn list_alerts(
        &self,
        user_id: DbId,
        filter: AlertFilter,
    ) -> Result<Vec<Alert>, AlertError> {
        Ok(self
            .bounded(self.store.list_alerts(user_id, filter))
            .await?)
    }

    /// Users the scheduler should check.
    pub async fn users_with_alerting(&self) -> Result<Vec<DbId>, AlertError> {
        Ok(self
            .bounded(self.store.list_users_with_alerting())
            .await?)
    }

    async fn find_alert(&self, alert_id: DbId) -> Result<Alert, AlertError> {
        self.bounded(self.store.get_alert(alert_id))
            .await?
            .ok_or_else(|| alert_not_found(alert_id))
    }

    /// Run one store access, turning an overrun into [`StoreError::Timeout`].
    async fn bounded<T>(
        &self,
        access: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        tokio::time::timeout(self.store_timeout, access)
            .await
            .unwrap_or(Err(StoreError::Timeout(self.store_timeout)))
    }
}

fn alert_not_found(alert_id: DbId) -> AlertError {
    AlertError::Core(CoreError::NotFound {
        entity: "alert",
        id: alert_id,
    })
}
