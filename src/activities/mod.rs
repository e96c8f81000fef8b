//! Activity logging.
//!
//! Covers the fixed category/type taxonomy, the calorie table used to estimate energy
//! burned, and the append-only activity log.

pub mod calories;
pub mod log;
pub mod types;

pub use log::ActivityLog;
pub use types::{ensure_pair, resolve_pair, Activity, ActivityEvent, ActivityType, Category};
