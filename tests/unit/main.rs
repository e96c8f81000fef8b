//! Unit test modules.

mod csv_export_test;
mod data_file_test;
mod profile_test;
mod weekly_report_test;
