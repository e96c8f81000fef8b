//! Unit tests for profile validation and BMI banding.

use fitness_tracker::profile::{BmiCategory, Profile, UserProfile};
use fitness_tracker::TrackerError;

#[test]
fn test_bmi_formula() {
    let cases = [(65.0, 170.0), (50.0, 180.0), (95.5, 175.5), (120.0, 160.0)];

    for (weight, height) in cases {
        let profile = UserProfile::new("Ada", 30, weight, height).unwrap();
        let expected = weight / ((height / 100.0) * (height / 100.0));
        assert!((profile.bmi() - expected).abs() < 1e-9);
        assert_eq!(profile.bmi_category(), BmiCategory::from_bmi(expected));
    }
}

#[test]
fn test_bmi_band_edges() {
    assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(29.99), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
}

#[test]
fn test_invalid_fields_leave_profile_unchanged() {
    let mut profile = Profile::new();
    profile.set("Ada", 30, 65.0, 170.0).unwrap();

    let rejected = [
        ("", 30, 65.0, 170.0),
        ("Bob", 0, 65.0, 170.0),
        ("Bob", 151, 65.0, 170.0),
        ("Bob", 30, 0.0, 170.0),
        ("Bob", 30, 501.0, 170.0),
        ("Bob", 30, 65.0, 0.0),
        ("Bob", 30, 65.0, 301.0),
        ("Bob", 30, f64::NAN, 170.0),
    ];

    for (name, age, weight, height) in rejected {
        let result = profile.set(name, age, weight, height);
        assert!(
            matches!(result, Err(TrackerError::InvalidInput(_))),
            "accepted {:?}",
            (name, age, weight, height)
        );
        assert_eq!(profile.get().unwrap().name, "Ada");
    }
}

#[test]
fn test_set_replaces_previous_profile() {
    let mut profile = Profile::new();
    assert!(!profile.is_set());

    profile.set("Ada", 30, 65.0, 170.0).unwrap();
    profile.set("Grace", 45, 70.0, 165.0).unwrap();

    let current = profile.get().unwrap();
    assert_eq!(current.name, "Grace");
    assert_eq!(current.age, 45);
}
