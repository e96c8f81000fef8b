//! Error kinds surfaced at the tracker boundary.

use thiserror::Error;

use crate::reports::exporter_csv::ExportError;
use crate::storage::data_file::DataFileError;

/// Errors returned by tracker operations.
///
/// Every operation the UI invokes returns one of these instead of panicking; the UI
/// turns the `Display` text into a message for the user.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// A field failed to parse, was out of range, or named something outside the taxonomy.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Logging an activity or setting a goal before a profile exists.
    #[error("Please set up a user profile first.")]
    ProfileRequired,

    /// A report or export was requested with nothing to report.
    #[error("{0}")]
    EmptyState(String),

    /// Loading or saving the data file failed.
    #[error("Persistence error: {0}")]
    Persistence(#[from] DataFileError),

    /// Writing a CSV export failed.
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Build an `InvalidInput` error for a named field.
    pub fn invalid(field: &str, reason: impl std::fmt::Display) -> Self {
        TrackerError::InvalidInput(format!("{}: {}", field, reason))
    }
}

impl From<ExportError> for TrackerError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::NoData => TrackerError::EmptyState(err.to_string()),
            other => TrackerError::Export(other.to_string()),
        }
    }
}

/// Parse a trimmed form field, mapping failures to `InvalidInput`.
pub(crate) fn parse_field<T>(field: &str, raw: &str) -> Result<T, TrackerError>
where
    T: std::str::FromStr,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::invalid(field, "value is required"));
    }
    trimmed
        .parse::<T>()
        .map_err(|_| TrackerError::invalid(field, format!("'{}' is not a valid number", trimmed)))
}
