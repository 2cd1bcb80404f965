//! Request handlers.
//!
//! Alert handlers delegate to the shared [`AlertLifecycle`]; threshold and
//! reading handlers go straight to the repositories in `hivewatch_db`. All
//! map errors via [`AppError`].
//!
//! [`AlertLifecycle`]: hivewatch_alerts::AlertLifecycle
//! [`AppError`]: crate::error::AppError

pub mod alerts;
pub mod readings;
pub mod thresholds;
