//! Fitness Tracker - single-user desktop activity tracker
//!
//! Keeps a user profile with BMI, a log of timed activities with estimated
//! calories, and cumulative goals that advance as activities are logged.
//! Produces weekly summaries and CSV exports, and persists everything to a
//! single versioned data file.

pub mod activities;
pub mod clock;
pub mod error;
pub mod goals;
pub mod profile;
pub mod reports;
pub mod storage;
pub mod tracker;
pub mod ui;
pub mod views;

// Re-export commonly used types
pub use error::TrackerError;
pub use storage::config::AppConfig;
pub use tracker::{FitnessTracker, TrackerEvent};
