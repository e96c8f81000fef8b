//! Unit tests for the data file.

use chrono::NaiveDate;

use fitness_tracker::activities::{Activity, ActivityType, Category};
use fitness_tracker::goals::{Goal, GoalType};
use fitness_tracker::profile::UserProfile;
use fitness_tracker::storage::{DataFile, DataFileError, TrackerState};

fn populated_state() -> TrackerState {
    let start = NaiveDate::from_ymd_opt(2025, 1, 4).unwrap();
    let mut activities = Vec::new();
    let mut goal = Goal::new(GoalType::ActivityDuration, 300.0, 14, start).unwrap();

    for (offset, activity_type) in [
        ActivityType::Swimming,
        ActivityType::Pilates,
        ActivityType::Soccer,
    ]
    .into_iter()
    .enumerate()
    {
        let date = start + chrono::Duration::days(offset as i64);
        let activity = Activity::new(date, activity_type.category(), activity_type, 25);
        goal.add_progress(f64::from(activity.duration_min));
        activities.push(activity);
    }

    TrackerState {
        profile: Some(UserProfile::new("Grace O'Neil, Jr.", 61, 72.3, 168.2).unwrap()),
        activities,
        goals: vec![goal],
    }
}

#[test]
fn test_round_trip_preserves_order_and_progress() {
    let dir = tempfile::tempdir().unwrap();
    let file = DataFile::new(dir.path().join("data.txt"));
    let state = populated_state();

    file.save(&state).unwrap();
    let loaded = file.load().unwrap();

    assert_eq!(loaded, state);
    assert_eq!(loaded.goals[0].progress, 75.0);
    assert_eq!(loaded.activities[2].activity_type, ActivityType::Soccer);
}

#[test]
fn test_missing_file_is_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let file = DataFile::new(dir.path().join("never_saved.txt"));

    assert_eq!(file.load().unwrap(), TrackerState::default());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("data.txt");
    let file = DataFile::new(&path);

    file.save(&TrackerState::default()).unwrap();

    assert!(path.exists());
    assert!(!dir.path().join("nested/deeper/data.txt.tmp").exists());
}

#[test]
fn test_rejects_other_formats() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    let file = DataFile::new(&path);

    std::fs::write(&path, "FTRK 2\nprofile null\nactivities []\ngoals []\n").unwrap();
    assert!(matches!(
        file.load(),
        Err(DataFileError::UnsupportedVersion(2))
    ));

    std::fs::write(&path, "\u{ac}\u{ed}\u{0}\u{5}sr\u{0}java.util.ArrayList").unwrap();
    assert!(matches!(file.load(), Err(DataFileError::InvalidMagic)));

    std::fs::write(&path, "FTRK 1\nprofile null\nactivities [{\"date\":\n").unwrap();
    assert!(file.load().is_err());
}

#[test]
fn test_unknown_activity_type_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::write(
        &path,
        "FTRK 1\nprofile null\nactivities [{\"date\":\"2025-01-10\",\"category\":\"Cardio\",\"type\":\"Rowing\",\"duration_min\":10,\"calories\":50.0}]\ngoals []\n",
    )
    .unwrap();

    let result = DataFile::new(&path).load();
    assert!(matches!(result, Err(DataFileError::Serialization(_))));
}

fn load_text(body: &str) -> Result<TrackerState, DataFileError> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::write(&path, body).unwrap();
    DataFile::new(&path).load()
}

#[test]
fn test_out_of_range_profile_is_corrupt() {
    let profiles = [
        r#"{"name":"","age":30,"weight_kg":65.0,"height_cm":170.0}"#,
        r#"{"name":"Ada","age":0,"weight_kg":65.0,"height_cm":170.0}"#,
        r#"{"name":"Ada","age":30,"weight_kg":-3.0,"height_cm":170.0}"#,
        r#"{"name":"Ada","age":30,"weight_kg":65.0,"height_cm":0.0}"#,
    ];

    for profile in profiles {
        let body = format!("FTRK 1\nprofile {}\nactivities []\ngoals []\n", profile);
        assert!(
            matches!(load_text(&body), Err(DataFileError::Corrupt(_))),
            "accepted {}",
            profile
        );
    }
}

#[test]
fn test_invalid_activity_is_corrupt() {
    let activities = [
        // Yoga is not a Cardio activity
        r#"{"date":"2025-01-10","category":"Cardio","type":"Yoga","duration_min":15,"calories":60.0}"#,
        r#"{"date":"2025-01-10","category":"Cardio","type":"Running","duration_min":0,"calories":0.0}"#,
        r#"{"date":"2025-01-10","category":"Cardio","type":"Running","duration_min":30,"calories":-50.0}"#,
    ];

    for activity in activities {
        let body = format!("FTRK 1\nprofile null\nactivities [{}]\ngoals []\n", activity);
        assert!(
            matches!(load_text(&body), Err(DataFileError::Corrupt(_))),
            "accepted {}",
            activity
        );
    }
}

#[test]
fn test_invalid_goal_is_corrupt() {
    let id = "6f1c1f0e-2d4b-4c53-9a57-1f6f0c8f8a11";
    let goals = [
        r#""target":0.0,"progress":0.0,"start_date":"2025-01-10","end_date":"2025-01-17""#,
        r#""target":100.0,"progress":-5.0,"start_date":"2025-01-10","end_date":"2025-01-17""#,
        r#""target":100.0,"progress":0.0,"start_date":"2025-01-10","end_date":"2025-01-10""#,
    ];

    for fields in goals {
        let body = format!(
            "FTRK 1\nprofile null\nactivities []\ngoals [{{\"id\":\"{}\",\"goal_type\":\"Calories Burned\",{}}}]\n",
            id, fields
        );
        assert!(
            matches!(load_text(&body), Err(DataFileError::Corrupt(_))),
            "accepted {}",
            fields
        );
    }
}

#[test]
fn test_valid_hand_written_file_loads() {
    let body = concat!(
        "FTRK 1\n",
        r#"profile {"name":"Ada","age":30,"weight_kg":65.0,"height_cm":170.0}"#,
        "\n",
        r#"activities [{"date":"2025-01-10","category":"Cardio","type":"Running","duration_min":30,"calories":345.0}]"#,
        "\n",
        r#"goals [{"id":"6f1c1f0e-2d4b-4c53-9a57-1f6f0c8f8a11","goal_type":"Calories Burned","target":1000.0,"progress":345.0,"start_date":"2025-01-10","end_date":"2025-01-17"}]"#,
        "\n",
    );

    let state = load_text(body).unwrap();
    assert_eq!(state.activities.len(), 1);
    assert_eq!(state.goals[0].progress, 345.0);
}

#[test]
fn test_extreme_floats_round_trip_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let file = DataFile::new(dir.path().join("data.txt"));
    let value = 1.0715660391465826e-75;

    let start = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    let state = TrackerState {
        profile: Some(UserProfile::new("Ada", 30, value, 170.0).unwrap()),
        activities: Vec::new(),
        goals: vec![Goal::new(GoalType::CaloriesBurned, value, 7, start).unwrap()],
    };

    file.save(&state).unwrap();
    let loaded = file.load().unwrap();

    let weight = loaded.profile.as_ref().unwrap().weight_kg;
    assert_eq!(weight.to_bits(), value.to_bits());
    assert_eq!(loaded.goals[0].target.to_bits(), value.to_bits());
    assert_eq!(loaded, state);
}
