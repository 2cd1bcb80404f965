//! Hive metric alert types: transient conditions and persisted alerts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::metrics::MetricType;
use crate::types::{DbId, Timestamp};

/// Severity level attached to an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => Err(CoreError::UnknownVariant {
                kind: "severity",
                value: other.to_string(),
            }),
        }
    }
}

/// Which side of the acceptable range a value fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    AboveMax,
    BelowMin,
}

/// A threshold violation detected for one metric on one hive.
///
/// Produced by [`crate::alerting::evaluate`]; never persisted directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertCondition {
    pub hive_id: DbId,
    pub metric: MetricType,
    /// Human-readable description including the measured value.
    pub message: String,
    pub severity: Severity,
    pub direction: Direction,
}

/// A persisted alert record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: DbId,
    pub user_id: DbId,
    pub hive_id: DbId,
    pub metric_type: MetricType,
    pub message: String,
    pub severity: Severity,
    pub created_at: Timestamp,
    /// `None` while the alert is open.
    pub resolved_at: Option<Timestamp>,
    pub is_read: bool,
}

impl Alert {
    pub fn is_open(&self) -> bool {
        self.resolved_at.is_none()
    }
}

/// DTO for inserting a new alert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAlert {
    pub user_id: DbId,
    pub hive_id: DbId,
    pub metric_type: MetricType,
    pub message: String,
    pub severity: Severity,
    pub created_at: Timestamp,
}

impl NewAlert {
    /// Build the insert DTO for an approved condition.
    pub fn from_condition(user_id: DbId, condition: &AlertCondition, now: Timestamp) -> Self {
        Self {
            user_id,
            hive_id: condition.hive_id,
            metric_type: condition.metric,
            message: condition.message.clone(),
            severity: condition.severity,
            created_at: now,
        }
    }
}

/// Partial update of an alert. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertUpdate {
    pub resolved_at: Option<Timestamp>,
    pub is_read: Option<bool>,
}

/// Resolution-state filter for alert listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    #[default]
    Open,
    Resolved,
    All,
}

/// Filter for listing a user's alerts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertFilter {
    pub status: AlertStatus,
    pub unread_only: bool,
}

impl AlertFilter {
    /// Whether `alert` passes this filter.
    pub fn matches(&self, alert: &Alert) -> bool {
        let status_ok = match self.status {
            AlertStatus::Open => alert.is_open(),
            AlertStatus::Resolved => !alert.is_open(),
            AlertStatus::All => true,
        };
        status_ok && (!self.unread_only || !alert.is_read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_round_trips_through_str() {
        for severity in [Severity::Low, Severity::Medium, Severity::High] {
            assert_eq!(severity.as_str().parse::<Severity>().unwrap(), severity);
        }
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn filter_matches_resolution_and_read_state() {
        let alert = Alert {
            id: 1,
            user_id: 1,
            hive_id: 1,
            metric_type: MetricType::Sound,
            message: "Sound is too low (12.0 dB)".to_string(),
            severity: Severity::Low,
            created_at: chrono::Utc::now(),
            resolved_at: None,
            is_read: true,
        };

        assert!(AlertFilter::default().matches(&alert));
        assert!(!AlertFilter {
            status: AlertStatus::Resolved,
            unread_only: false
        }
        .matches(&alert));
        assert!(!AlertFilter {
            status: AlertStatus::All,
            unread_only: true
        }
        .matches(&alert));
    }
}
