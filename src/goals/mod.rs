//! Goals module.
//!
//! Goals are numeric targets (calories or minutes) with a deadline. Progress is a
//! running counter fed by every logged activity; it is never recomputed from the log.

pub mod engine;
pub mod types;

// Re-exports for convenience
pub use engine::GoalEngine;
pub use types::{Goal, GoalType};
