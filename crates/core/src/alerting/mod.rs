//! Threshold evaluation and alert deduplication.
//!
//! Pure logic, no store access. The lifecycle manager in `hivewatch-alerts`
//! fetches readings and existing alerts and passes them in.

pub mod dedup;
pub mod evaluate;
pub mod similarity;

pub use dedup::{
    decide, recent_resolution_cutoff, GateDecision, SuppressReason,
    RECENT_RESOLUTION_WINDOW_MINUTES,
};
pub use evaluate::evaluate;
pub use similarity::{is_similar, similarity, SIMILARITY_THRESHOLD};
