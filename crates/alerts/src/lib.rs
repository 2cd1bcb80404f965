//! Hive alert lifecycle: periodic threshold checks, deduplicated alert
//! creation, resolution and read state.
//!
//! - [`AlertLifecycle`] orchestrates a check for one user and exposes
//!   resolve / mark-read.
//! - [`PgAlertStore`] implements [`AlertStore`] on top of `hivewatch-db`.
//! - [`MemoryAlertStore`] is an in-process store with fault injection.
//! - [`AlertCheckScheduler`] runs checks for every alerting user on a timer.
//!
//! [`AlertStore`]: hivewatch_core::store::AlertStore

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod memory;
pub mod pg_store;
pub mod scheduler;

pub use config::AlertCheckConfig;
pub use error::AlertError;
pub use lifecycle::AlertLifecycle;
pub use memory::MemoryAlertStore;
pub use pg_store::PgAlertStore;
pub use scheduler::AlertCheckScheduler;
