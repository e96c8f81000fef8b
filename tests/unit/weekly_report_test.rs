//! Unit tests for the weekly report window and totals.

use chrono::NaiveDate;

use fitness_tracker::activities::{Activity, ActivityType, Category};
use fitness_tracker::reports::weekly_report;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_window_is_inclusive_on_both_ends() {
    let today = date(2025, 1, 10);
    let activities = vec![
        Activity::new(date(2025, 1, 2), Category::Cardio, ActivityType::Walking, 10),
        Activity::new(date(2025, 1, 3), Category::Cardio, ActivityType::Walking, 20),
        Activity::new(date(2025, 1, 10), Category::Cardio, ActivityType::Walking, 30),
        Activity::new(date(2025, 1, 11), Category::Cardio, ActivityType::Walking, 40),
    ];

    let report = weekly_report(&activities, today).unwrap();

    assert_eq!(report.from, date(2025, 1, 3));
    assert_eq!(report.to, today);
    assert_eq!(report.count(), 2);
    assert_eq!(report.total_duration_min, 50);
}

#[test]
fn test_category_sums_partition_totals() {
    let today = date(2025, 3, 1);
    let activities = vec![
        Activity::new(today, Category::Flexibility, ActivityType::Yoga, 45),
        Activity::new(today, Category::Cardio, ActivityType::Swimming, 30),
        Activity::new(today, Category::Sports, ActivityType::Basketball, 20),
        Activity::new(today, Category::Cardio, ActivityType::Cycling, 40),
        Activity::new(today, Category::Strength, ActivityType::BodyweightExercises, 15),
    ];

    let report = weekly_report(&activities, today).unwrap();

    let duration: u64 = report.by_category.iter().map(|t| t.duration_min).sum();
    let calories: f64 = report.by_category.iter().map(|t| t.calories).sum();
    assert_eq!(duration, report.total_duration_min);
    assert!((calories - report.total_calories).abs() < 1e-9);

    // First appearance order
    let order: Vec<Category> = report.by_category.iter().map(|t| t.category).collect();
    assert_eq!(
        order,
        vec![
            Category::Flexibility,
            Category::Cardio,
            Category::Sports,
            Category::Strength
        ]
    );

    let cardio = report.category(Category::Cardio).unwrap();
    assert_eq!(cardio.duration_min, 70);
    assert_eq!(cardio.calories, 240.0 + 300.0);
}

#[test]
fn test_empty_log_has_no_report() {
    assert!(weekly_report(&[], date(2025, 1, 10)).is_none());
}

#[test]
fn test_nothing_in_window_gives_zero_totals() {
    let activities = vec![Activity::new(
        date(2024, 1, 1),
        Category::Cardio,
        ActivityType::Running,
        30,
    )];

    let report = weekly_report(&activities, date(2025, 1, 10)).unwrap();

    assert_eq!(report.count(), 0);
    assert_eq!(report.total_duration_min, 0);
    assert_eq!(report.total_calories, 0.0);
    assert!(report.by_category.is_empty());
}
