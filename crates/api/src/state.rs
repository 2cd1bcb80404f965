use std::sync::Arc;

use hivewatch_alerts::AlertLifecycle;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: hivewatch_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Alert lifecycle manager shared with the background scheduler.
    pub alerts: Arc<AlertLifecycle>,
}
