//! The hive sensor metrics and their fixed per-metric properties.
//!
//! These names are the canonical `metric_type` values stored in the `alerts`
//! table and used as column prefixes in `alert_thresholds`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alert::{Direction, Severity};
use crate::error::CoreError;
use crate::reading::MetricReading;
use crate::thresholds::{Bounds, Thresholds};

/// Brood-nest temperature in degrees Celsius.
pub const METRIC_TEMPERATURE: &str = "temperature";

/// Relative humidity inside the hive, in percent.
pub const METRIC_HUMIDITY: &str = "humidity";

/// Colony sound level in decibels.
pub const METRIC_SOUND: &str = "sound";

/// Total hive weight in kilograms.
pub const METRIC_WEIGHT: &str = "weight";

/// One of the four monitored hive metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Temperature,
    Humidity,
    Sound,
    Weight,
}

impl MetricType {
    /// Every metric, in evaluation order.
    pub const ALL: [MetricType; 4] = [
        MetricType::Temperature,
        MetricType::Humidity,
        MetricType::Sound,
        MetricType::Weight,
    ];

    /// Canonical lowercase name (see the `METRIC_*` constants).
    pub fn as_str(self) -> &'static str {
        match self {
            MetricType::Temperature => METRIC_TEMPERATURE,
            MetricType::Humidity => METRIC_HUMIDITY,
            MetricType::Sound => METRIC_SOUND,
            MetricType::Weight => METRIC_WEIGHT,
        }
    }

    /// Capitalised name used at the start of alert messages.
    pub fn label(self) -> &'static str {
        match self {
            MetricType::Temperature => "Temperature",
            MetricType::Humidity => "Humidity",
            MetricType::Sound => "Sound",
            MetricType::Weight => "Weight",
        }
    }

    /// Unit suffix appended directly after the formatted value.
    pub fn unit(self) -> &'static str {
        match self {
            MetricType::Temperature => "°C",
            MetricType::Humidity => "%",
            MetricType::Sound => " dB",
            MetricType::Weight => " kg",
        }
    }

    /// Fixed severity for a violation in the given direction.
    ///
    /// Severity does not scale with how far the value is out of range.
    pub fn severity(self, direction: Direction) -> Severity {
        match (self, direction) {
            (MetricType::Temperature, Direction::AboveMax) => Severity::High,
            (MetricType::Temperature, Direction::BelowMin) => Severity::Medium,
            (MetricType::Humidity, _) => Severity::Medium,
            (MetricType::Sound, Direction::AboveMax) => Severity::Medium,
            (MetricType::Sound, Direction::BelowMin) => Severity::Low,
            (MetricType::Weight, Direction::AboveMax) => Severity::Medium,
            (MetricType::Weight, Direction::BelowMin) => Severity::High,
        }
    }

    /// The reading's value for this metric, if the sensor reported one.
    pub fn value(self, reading: &MetricReading) -> Option<f64> {
        match self {
            MetricType::Temperature => reading.temperature,
            MetricType::Humidity => reading.humidity,
            MetricType::Sound => reading.sound,
            MetricType::Weight => reading.weight,
        }
    }

    /// The acceptable range for this metric.
    pub fn bounds(self, thresholds: &Thresholds) -> Bounds {
        let (min, max) = match self {
            MetricType::Temperature => (thresholds.temperature_min, thresholds.temperature_max),
            MetricType::Humidity => (thresholds.humidity_min, thresholds.humidity_max),
            MetricType::Sound => (thresholds.sound_min, thresholds.sound_max),
            MetricType::Weight => (thresholds.weight_min, thresholds.weight_max),
        };
        Bounds { min, max }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricType::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "metric type",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_table_matches_operations_guide() {
        use Direction::{AboveMax, BelowMin};

        assert_eq!(MetricType::Temperature.severity(AboveMax), Severity::High);
        assert_eq!(MetricType::Temperature.severity(BelowMin), Severity::Medium);
        assert_eq!(MetricType::Humidity.severity(AboveMax), Severity::Medium);
        assert_eq!(MetricType::Humidity.severity(BelowMin), Severity::Medium);
        assert_eq!(MetricType::Sound.severity(AboveMax), Severity::Medium);
        assert_eq!(MetricType::Sound.severity(BelowMin), Severity::Low);
        assert_eq!(MetricType::Weight.severity(AboveMax), Severity::Medium);
        assert_eq!(MetricType::Weight.severity(BelowMin), Severity::High);
    }

    #[test]
    fn parses_canonical_names() {
        for metric in MetricType::ALL {
            assert_eq!(metric.as_str().parse::<MetricType>().unwrap(), metric);
        }
    }

    #[test]
    fn rejects_unknown_name() {
        assert!("pressure".parse::<MetricType>().is_err());
        assert!("Temperature".parse::<MetricType>().is_err());
    }
}
