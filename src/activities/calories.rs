//! Per-minute calorie coefficients by activity type.
//!
//! Only the types listed in the table have their own rate. Everything else, including
//! "Bodyweight Exercises", "Resistance Training" and "Other Sports", burns at the
//! default rate; stored data relies on exactly these values.

/// Rate used for any type without its own entry.
pub const DEFAULT_CALORIES_PER_MINUTE: f64 = 5.0;

/// Calories burned per minute for an activity type name.
pub fn coefficient(activity_type: &str) -> f64 {
    match activity_type {
        "Running" => 11.5,
        "Walking" => 5.0,
        "Cycling" => 7.5,
        "Swimming" => 8.0,
        "Weight Training" => 6.0,
        "Yoga" => 4.0,
        "Stretching" => 2.5,
        "Pilates" => 4.5,
        "Basketball" => 9.0,
        "Tennis" => 8.0,
        "Soccer" => 10.0,
        _ => DEFAULT_CALORIES_PER_MINUTE,
    }
}

/// Estimated calories for `duration_min` minutes of `activity_type`.
pub fn estimate(activity_type: &str, duration_min: u32) -> f64 {
    f64::from(duration_min) * coefficient(activity_type)
}
