//! Dedup gate: decides whether a detected condition becomes a new alert.
//!
//! A condition is suppressed when an open alert for the same hive and metric
//! already says the same thing, or when one was resolved within the last
//! hour. The second rule stops a condition from re-alerting immediately
//! after someone resolves it.

use chrono::Duration;

use crate::alert::{Alert, AlertCondition};
use crate::alerting::similarity::is_similar;
use crate::types::{DbId, Timestamp};

/// How long (in minutes) a resolved alert keeps suppressing similar new
/// conditions.
pub const RECENT_RESOLUTION_WINDOW_MINUTES: i64 = 60;

/// Why a condition was not turned into an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// A similar alert is still open.
    OpenDuplicate,
    /// A similar alert was resolved within the recent-resolution window.
    RecentlyResolved,
}

/// Outcome of running a condition through the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Create,
    Suppress {
        reason: SuppressReason,
        /// The existing alert that matched.
        matched_alert_id: DbId,
    },
}

impl GateDecision {
    pub fn is_create(&self) -> bool {
        matches!(self, GateDecision::Create)
    }
}

/// Earliest `resolved_at` (exclusive) that still counts as recently resolved.
pub fn recent_resolution_cutoff(now: Timestamp) -> Timestamp {
    now - Duration::minutes(RECENT_RESOLUTION_WINDOW_MINUTES)
}

/// Run `candidate` through the gate.
///
/// `open_alerts` and `recently_resolved` are what the store returned for the
/// candidate's hive and metric. Records for another hive or metric, open
/// alerts that are in fact resolved, and resolutions outside the window are
/// ignored, so an over-inclusive store query cannot cause a suppression.
///
/// Similarity is measured from the candidate's side: when both messages have
/// the same number of tokens the candidate counts as the shorter one.
pub fn decide(
    candidate: &AlertCondition,
    open_alerts: &[Alert],
    recently_resolved: &[Alert],
    now: Timestamp,
) -> GateDecision {
    let same_series =
        |a: &&Alert| a.hive_id == candidate.hive_id && a.metric_type == candidate.metric;

    if let Some(open) = open_alerts
        .iter()
        .filter(same_series)
        .filter(|a| a.is_open())
        .find(|a| is_similar(&candidate.message, &a.message))
    {
        return GateDecision::Suppress {
            reason: SuppressReason::OpenDuplicate,
            matched_alert_id: open.id,
        };
    }

    let cutoff = recent_resolution_cutoff(now);
    if let Some(resolved) = recently_resolved
        .iter()
        .filter(same_series)
        .filter(|a| a.resolved_at.is_some_and(|at| at > cutoff))
        .find(|a| is_similar(&candidate.message, &a.message))
    {
        return GateDecision::Suppress {
            reason: SuppressReason::RecentlyResolved,
            matched_alert_id: resolved.id,
        };
    }

    GateDecision::Create
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
