//! Threshold evaluator: one reading against one threshold set.

use crate::alert::{AlertCondition, Direction};
use crate::metrics::MetricType;
use crate::reading::MetricReading;
use crate::thresholds::Thresholds;

/// Compare every metric present in `reading` against `thresholds`.
///
/// Returns one condition per out-of-range metric, in [`MetricType::ALL`]
/// order. Missing values and values exactly on a bound produce nothing.
pub fn evaluate(reading: &MetricReading, thresholds: &Thresholds) -> Vec<AlertCondition> {
    MetricType::ALL
        .into_iter()
        .filter_map(|metric| {
            let value = metric.value(reading)?;
            let direction = metric.bounds(thresholds).violation(value)?;
            Some(AlertCondition {
                hive_id: reading.hive_id,
                metric,
                message: condition_message(metric, direction, value),
                severity: metric.severity(direction),
                direction,
            })
        })
        .collect()
}

/// Format the alert text, e.g. `"Temperature is too high (38.0°C)"`.
fn condition_message(metric: MetricType, direction: Direction, value: f64) -> String {
    let adjective = match direction {
        Direction::AboveMax => "high",
        Direction::BelowMin => "low",
    };
    format!(
        "{} is too {adjective} ({value:.1}{})",
        metric.label(),
        metric.unit()
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
