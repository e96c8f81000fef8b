//! Unit tests for CSV export.

use chrono::NaiveDate;

use fitness_tracker::activities::{Activity, ActivityType, Category};
use fitness_tracker::reports::exporter_csv::CSV_HEADER;
use fitness_tracker::reports::{export_csv, export_csv_to_file, ExportError};

fn sample_log() -> Vec<Activity> {
    let mut activities = Vec::new();
    let mut day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    for (i, activity_type) in ActivityType::ALL.into_iter().enumerate() {
        activities.push(Activity::new(
            day,
            activity_type.category(),
            activity_type,
            5 + i as u32 * 7,
        ));
        day = day.succ_opt().unwrap();
    }
    activities
}

/// Split a row written by the exporter; only multi-word names are quoted.
fn parse_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[test]
fn test_rows_parse_back_to_activities() {
    let activities = sample_log();
    let csv = export_csv(&activities).unwrap();
    let mut lines = csv.lines();

    assert_eq!(lines.next(), Some(CSV_HEADER));

    let rows: Vec<Vec<String>> = lines.map(parse_row).collect();
    assert_eq!(rows.len(), activities.len());

    for (row, activity) in rows.iter().zip(&activities) {
        let date = NaiveDate::parse_from_str(&row[0], "%Y-%m-%d").unwrap();
        let activity_type: ActivityType = row[1].parse().unwrap();
        let category: Category = row[2].parse().unwrap();
        let duration: u32 = row[3].parse().unwrap();
        let calories: f64 = row[4].parse().unwrap();

        assert_eq!(date, activity.date);
        assert_eq!(activity_type, activity.activity_type);
        assert_eq!(category, activity.category);
        assert_eq!(duration, activity.duration_min);
        assert_eq!(calories, (activity.calories * 10.0).round() / 10.0);
    }
}

#[test]
fn test_export_empty_log_is_an_error() {
    assert!(matches!(export_csv(&[]), Err(ExportError::NoData)));
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");
    let activities = sample_log();

    let rows = export_csv_to_file(&activities, &path).unwrap();
    assert_eq!(rows, activities.len());

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, export_csv(&activities).unwrap());
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("export.csv");

    let result = export_csv_to_file(&sample_log(), &path);
    assert!(matches!(result, Err(ExportError::FileCreationFailed(_))));
}
