//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod alert_repo;
pub mod hive_repo;
pub mod reading_repo;
pub mod threshold_repo;

pub use alert_repo::AlertRepo;
pub use hive_repo::HiveRepo;
pub use reading_repo::ReadingRepo;
pub use threshold_repo::ThresholdRepo;
