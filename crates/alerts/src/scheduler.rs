//! Periodic alert checks for every user with alerting switched on.
//!
//! Spawned as a background task with a [`CancellationToken`] for graceful
//! shutdown, in the same shape as the other background jobs.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::config::AlertCheckConfig;
use crate::lifecycle::AlertLifecycle;

/// Totals for one scheduler tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub users: usize,
    pub alerts_created: usize,
    pub users_failed: usize,
}

/// Background service running [`AlertLifecycle::run_check`] on a timer.
pub struct AlertCheckScheduler {
    lifecycle: Arc<AlertLifecycle>,
    config: AlertCheckConfig,
}

impl AlertCheckScheduler {
    pub fn new(lifecycle: Arc<AlertLifecycle>, config: AlertCheckConfig) -> Self {
        Self { lifecycle, config }
    }

    /// Run the check loop until `cancel` is triggered.
    ///
    /// The first tick fires immediately. A tick in progress is finished
    /// before cancellation is observed.
    pub async fn run(&self, cancel: CancellationToken) {
        tracing::info!(
            interval_secs = self.config.interval.as_secs(),
            concurrency = self.config.concurrency,
            "Alert check scheduler started"
        );

        let mut interval = tokio::time::interval(self.config.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Alert check scheduler stopping");
                    break;
                }
                _ = interval.tick() => {
                    self.tick().await;
                }
            }
        }
    }

    /// Check every alerting user once, at most `concurrency` at a time.
    pub async fn tick(&self) -> TickReport {
        let users = match self.lifecycle.users_with_alerting().await {
            Ok(users) => users,
            Err(e) => {
                tracing::error!(error = %e, "Alert check: failed to list users");
                return TickReport::default();
            }
        };

        let mut report = TickReport {
            users: users.len(),
            ..TickReport::default()
        };

        let concurrency = self.config.concurrency.max(1);
        let mut results = stream::iter(users)
            .map(|user_id| {
                let lifecycle = Arc::clone(&self.lifecycle);
                async move { (user_id, lifecycle.run_check(user_id).await) }
            })
            .buffer_unordered(concurrency);

        while let Some((user_id, result)) = results.next().await {
            match result {
                Ok(created) => report.alerts_created += created,
                Err(e) => {
                    report.users_failed += 1;
                    tracing::error!(user_id, error = %e, "Alert check failed for user");
                }
            }
        }

        if report.users > 0 {
            tracing::info!(
                users = report.users,
                alerts_created = report.alerts_created,
                users_failed = report.users_failed,
                "Alert check tick complete"
            );
        } else {
            tracing::debug!("Alert check: no users with alerting enabled");
        }

        report
    }
}
