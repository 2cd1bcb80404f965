use hivewatch_core::error::CoreError;
use hivewatch_core::store::StoreError;
use hivewatch_core::types::DbId;

/// Errors surfaced by [`crate::AlertLifecycle`] operations.
///
/// Per-hive store failures during a check never show up here; they are
/// logged and the hive is skipped.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    /// A domain-level error (e.g. unknown alert id).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store access outside of a per-hive check failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The check could not start because thresholds were unreadable.
    #[error("Could not load thresholds for user {user_id}: {source}")]
    Thresholds {
        user_id: DbId,
        #[source]
        source: StoreError,
    },

    /// The check could not start because the hive list was unreadable.
    #[error("Could not load hives for user {user_id}: {source}")]
    Hives {
        user_id: DbId,
        #[source]
        source: StoreError,
    },
}

impl AlertError {
    /// Whether the whole check run was refused before any hive was touched.
    pub fn is_run_abort(&self) -> bool {
        matches!(self, AlertError::Thresholds { .. } | AlertError::Hives { .. })
    }
}
