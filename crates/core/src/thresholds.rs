//! Per-user acceptable operating ranges for hive metrics.

use serde::{Deserialize, Serialize};

use crate::alert::Direction;
use crate::error::CoreError;
use crate::metrics::MetricType;

/// An acceptable `[min, max]` range for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Classify a value against the range.
    ///
    /// Both ends are inclusive: a value equal to `min` or `max` is in range.
    pub fn violation(&self, value: f64) -> Option<Direction> {
        if value > self.max {
            Some(Direction::AboveMax)
        } else if value < self.min {
            Some(Direction::BelowMin)
        } else {
            None
        }
    }
}

/// Threshold configuration for one user: a min/max pair per metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub humidity_min: f64,
    pub humidity_max: f64,
    pub sound_min: f64,
    pub sound_max: f64,
    pub weight_min: f64,
    pub weight_max: f64,
}

impl Thresholds {
    /// System-wide ranges used when a user has not configured their own.
    pub const DEFAULT: Thresholds = Thresholds {
        temperature_min: 32.0,
        temperature_max: 36.0,
        humidity_min: 40.0,
        humidity_max: 65.0,
        sound_min: 30.0,
        sound_max: 60.0,
        weight_min: 10.0,
        weight_max: 25.0,
    };

    /// Check that every range is finite and has `min < max`.
    ///
    /// Returns a `CoreError::Validation` naming the first offending metric.
    pub fn validate(&self) -> Result<(), CoreError> {
        for metric in MetricType::ALL {
            let Bounds { min, max } = metric.bounds(self);
            if !min.is_finite() || !max.is_finite() {
                return Err(CoreError::Validation(format!(
                    "{metric} bounds must be finite numbers"
                )));
            }
            if min >= max {
                return Err(CoreError::Validation(format!(
                    "{metric}_min must be less than {metric}_max, got {min} >= {max}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
