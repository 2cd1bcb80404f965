#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use hivewatch_alerts::{AlertLifecycle, MemoryAlertStore};
use hivewatch_core::alert::{NewAlert, Severity};
use hivewatch_core::metrics::MetricType;
use hivewatch_core::reading::MetricReading;
use hivewatch_core::types::{DbId, Timestamp};

/// Store timeout used by test lifecycles.
pub const TEST_STORE_TIMEOUT: Duration = Duration::from_millis(200);

/// Build a lifecycle over a fresh in-memory store, returning both.
pub fn lifecycle() -> (Arc<MemoryAlertStore>, AlertLifecycle) {
    let store = Arc::new(MemoryAlertStore::new());
    let lifecycle = AlertLifecycle::new(store.clone(), TEST_STORE_TIMEOUT);
    (store, lifecycle)
}

/// A reading taken now with only temperature and humidity set.
pub fn reading(hive_id: DbId, temperature: Option<f64>, humidity: Option<f64>) -> MetricReading {
    reading_at(hive_id, Utc::now(), temperature, humidity)
}

pub fn reading_at(
    hive_id: DbId,
    timestamp: Timestamp,
    temperature: Option<f64>,
    humidity: Option<f64>,
) -> MetricReading {
    MetricReading {
        hive_id,
        timestamp,
        temperature,
        humidity,
        sound: None,
        weight: None,
    }
}

/// An existing temperature-high alert created two hours ago.
pub fn temperature_high_alert(user_id: DbId, hive_id: DbId, message: &str) -> NewAlert {
    NewAlert {
        user_id,
        hive_id,
        metric_type: MetricType::Temperature,
        message: message.to_string(),
        severity: Severity::High,
        created_at: Utc::now() - ChronoDuration::hours(2),
    }
}
