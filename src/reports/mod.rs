//! Read-only reporting over the activity log.

pub mod exporter_csv;
pub mod weekly;

pub use exporter_csv::{export_csv, export_csv_to_file, ExportError};
pub use weekly::{weekly_report, CategoryTotals, WeeklyReport};
