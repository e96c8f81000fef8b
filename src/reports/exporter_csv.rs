//! CSV export of the activity log.

use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::activities::Activity;

/// Header row of the export.
pub const CSV_HEADER: &str = "Date,Type,Category,Duration,Calories";

/// Suggested file name for the save dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "fitness_export.csv";

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing has been logged
    #[error("No data to export.")]
    NoData,

    /// Failed to create the export file
    #[error("Failed to create file: {0}")]
    FileCreationFailed(String),

    /// Failed to write export data
    #[error("Failed to write data: {0}")]
    WriteFailed(String),
}

/// Render activities as CSV, one row per activity in log order.
pub fn export_csv(activities: &[Activity]) -> Result<String, ExportError> {
    if activities.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut output = Vec::new();

    writeln!(output, "{}", CSV_HEADER).map_err(|e| ExportError::WriteFailed(e.to_string()))?;

    for activity in activities {
        writeln!(
            output,
            "{},{},{},{},{:.1}",
            activity.date.format("%Y-%m-%d"),
            csv_field(activity.activity_type.display_name()),
            csv_field(activity.category.display_name()),
            activity.duration_min,
            activity.calories,
        )
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    }

    String::from_utf8(output).map_err(|e| ExportError::WriteFailed(e.to_string()))
}

/// Export activities to CSV and write them to `path`.
///
/// Returns the number of data rows written.
pub fn export_csv_to_file(activities: &[Activity], path: &Path) -> Result<usize, ExportError> {
    let content = export_csv(activities)?;

    let mut file = std::fs::File::create(path)
        .map_err(|e| ExportError::FileCreationFailed(format!("{}: {}", path.display(), e)))?;
    file.write_all(content.as_bytes())
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

    tracing::info!("Exported {} activities to {}", activities.len(), path.display());
    Ok(activities.len())
}

/// Quote a field if it contains a delimiter, quote or line break.
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
