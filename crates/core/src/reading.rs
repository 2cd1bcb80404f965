//! Sensor readings and hive references as seen by the alerting core.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// A single sensor snapshot for one hive. Any metric may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricReading {
    pub hive_id: DbId,
    pub timestamp: Timestamp,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub sound: Option<f64>,
    pub weight: Option<f64>,
}

/// A hive owned by a user with alerting switched on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiveRef {
    pub hive_id: DbId,
}
