//! Domain logic for hive metric alerting.
//!
//! Everything in this crate is free of I/O except the [`store::AlertStore`]
//! trait, which describes the narrow persistence surface the alert lifecycle
//! needs. Implementations live in `hivewatch-alerts` (Postgres) and in tests
//! (in-memory).

pub mod alert;
pub mod alerting;
pub mod error;
pub mod metrics;
pub mod reading;
pub mod store;
pub mod thresholds;
pub mod types;
