//! Reusable UI widgets.

pub mod goal_progress;

pub use goal_progress::GoalProgress;
