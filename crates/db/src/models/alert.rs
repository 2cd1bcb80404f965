//! Alert entity model.
//!
//! `metric_type` and `severity` are stored as text and parsed into the
//! core enums on the way out.

use hivewatch_core::alert::Alert;
use hivewatch_core::error::CoreError;
use hivewatch_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `alerts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AlertRow {
    pub id: DbId,
    pub user_id: DbId,
    pub hive_id: DbId,
    pub metric_type: String,
    pub message: String,
    pub severity: String,
    pub created_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
    pub is_read: bool,
}

impl TryFrom<AlertRow> for Alert {
    type Error = CoreError;

    fn try_from(row: AlertRow) -> Result<Self, Self::Error> {
        Ok(Alert {
            id: row.id,
            user_id: row.user_id,
            hive_id: row.hive_id,
            metric_type: row.metric_type.parse()?,
            message: row.message,
            severity: row.severity.parse()?,
            created_at: row.created_at,
            resolved_at: row.resolved_at,
            is_read: row.is_read,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use hivewatch_core::alert::Severity;
    use hivewatch_core::metrics::MetricType;

    use super::*;

    fn row(metric_type: &str, severity: &str) -> AlertRow {
        AlertRow {
            id: 3,
            user_id: 1,
            hive_id: 2,
            metric_type: metric_type.to_string(),
            message: "Humidity is too low (31.0%)".to_string(),
            severity: severity.to_string(),
            created_at: Utc::now(),
            resolved_at: None,
            is_read: false,
        }
    }

    #[test]
    fn converts_valid_row() {
        let alert = Alert::try_from(row("humidity", "medium")).unwrap();
        assert_eq!(alert.metric_type, MetricType::Humidity);
        assert_eq!(alert.severity, Severity::Medium);
        assert!(alert.is_open());
    }

    #[test]
    fn rejects_unknown_metric() {
        let err = Alert::try_from(row("pressure", "medium")).unwrap_err();
        assert!(matches!(err, CoreError::UnknownVariant { kind: "metric type", .. }));
    }

    #[test]
    fn rejects_unknown_severity() {
        assert!(Alert::try_from(row("sound", "critical")).is_err());
    }
}
