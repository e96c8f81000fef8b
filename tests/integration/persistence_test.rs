//! Save/load round trips through the facade.

use chrono::NaiveDate;

use fitness_tracker::clock::FixedClock;
use fitness_tracker::storage::DataFile;
use fitness_tracker::{FitnessTracker, TrackerError, TrackerEvent};

fn tracker_for(path: &std::path::Path) -> FitnessTracker {
    let clock = FixedClock::new(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
    FitnessTracker::new(DataFile::new(path), Box::new(clock))
}

#[test]
fn test_restart_recovers_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fitness_tracker_data.txt");

    let mut tracker = tracker_for(&path);
    tracker.set_profile("Ada", "30", "65.0", "170.0").unwrap();
    tracker.set_goal("Calories Burned", "1000", "7").unwrap();
    tracker.log_activity("Cardio", "Running", "30").unwrap();
    tracker.log_activity("Cardio", "Running", "30").unwrap();
    tracker.log_activity("Flexibility", "Yoga", "60").unwrap();
    tracker.log_activity("Sports", "Soccer", "10").unwrap();
    tracker.save().unwrap();
    let before = tracker.state();
    drop(tracker);

    let mut restarted = tracker_for(&path);
    restarted.load().unwrap();

    assert_eq!(restarted.state(), before);
    assert_eq!(restarted.profile().unwrap().name, "Ada");
    let types: Vec<String> = restarted
        .list_activities()
        .into_iter()
        .map(|row| row.activity_type)
        .collect();
    assert_eq!(types, vec!["Running", "Running", "Yoga", "Soccer"]);
    assert_eq!(restarted.goals().len(), 1);
    assert_eq!(restarted.goals()[0].progress, 1030.0);
}

#[test]
fn test_quit_saves_and_load_publishes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");

    let mut tracker = tracker_for(&path);
    tracker.set_profile("Ada", "30", "65.0", "170.0").unwrap();
    tracker.log_activity("Cardio", "Swimming", "40").unwrap();
    let rx = tracker.subscribe();
    tracker.quit().unwrap();
    assert!(matches!(rx.try_recv(), Ok(TrackerEvent::Saved)));

    let mut restarted = tracker_for(&path);
    let rx = restarted.subscribe();
    restarted.load().unwrap();

    let events: Vec<TrackerEvent> = rx.try_iter().collect();
    assert!(matches!(events[0], TrackerEvent::Loaded));
    match &events[1] {
        TrackerEvent::Refreshed(views) => {
            assert_eq!(views.activity_rows.len(), 1);
            assert_eq!(views.activity_rows[0].calories, "320.0");
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn test_failed_save_keeps_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");

    let mut tracker = tracker_for(&path);
    tracker.set_profile("Ada", "30", "65.0", "170.0").unwrap();
    tracker.save().unwrap();
    let saved = std::fs::read_to_string(&path).unwrap();

    // A directory where the temporary file should go makes the write fail
    std::fs::create_dir(dir.path().join("data.txt.tmp")).unwrap();
    tracker.log_activity("Cardio", "Running", "30").unwrap();

    assert!(matches!(tracker.save(), Err(TrackerError::Persistence(_))));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), saved);
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::write(&path, "FTRK 9\n").unwrap();

    let mut tracker = tracker_for(&path);
    let result = tracker.load();

    assert!(matches!(result, Err(TrackerError::Persistence(_))));
    assert!(tracker.profile().is_none());
    assert!(tracker.activities().is_empty());
    assert!(tracker.goals().is_empty());
}

#[test]
fn test_file_with_invalid_records_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::write(
        &path,
        concat!(
            "FTRK 1\n",
            r#"profile {"name":"","age":0,"weight_kg":-3.0,"height_cm":0.0}"#,
            "\n",
            r#"activities [{"date":"2025-01-10","category":"Cardio","type":"Yoga","duration_min":0,"calories":-50.0}]"#,
            "\n",
            "goals []\n",
        ),
    )
    .unwrap();

    let mut tracker = tracker_for(&path);
    let result = tracker.load();

    assert!(matches!(result, Err(TrackerError::Persistence(_))));
    assert!(tracker.profile().is_none());
    assert!(tracker.activities().is_empty());
}

#[test]
fn test_extreme_user_values_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");

    let mut tracker = tracker_for(&path);
    tracker
        .set_profile("Ada", "30", "1.0715660391465826e-75", "170")
        .unwrap();
    tracker
        .set_goal("Calories Burned", "1.0715660391465826e-75", "7")
        .unwrap();
    tracker.save().unwrap();
    let before = tracker.state();

    let mut restarted = tracker_for(&path);
    restarted.load().unwrap();

    assert_eq!(restarted.state(), before);
}
