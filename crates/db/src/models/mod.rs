//! Row models for the hive alerting tables.
//!
//! Each model derives `FromRow` and converts into the matching
//! `hivewatch_core` domain type.

pub mod alert;
pub mod hive;
pub mod reading;
pub mod threshold;
