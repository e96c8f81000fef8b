//! Storage module for the data file and configuration.

pub mod config;
pub mod data_file;

pub use config::{AppConfig, ConfigError, Theme, UiSettings};
pub use data_file::{DataFile, DataFileError, TrackerState};
