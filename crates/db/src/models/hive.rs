//! Hive entity model.

use hivewatch_core::reading::HiveRef;
use hivewatch_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `hives` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hive {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub alerts_enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Hive> for HiveRef {
    fn from(hive: Hive) -> Self {
        HiveRef { hive_id: hive.id }
    }
}
