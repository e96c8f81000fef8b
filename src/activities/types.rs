//! Activity taxonomy and the logged activity record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calories;
use crate::error::TrackerError;

/// Top-level grouping of activity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Cardio,
    Strength,
    Flexibility,
    Sports,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Cardio,
        Category::Strength,
        Category::Flexibility,
        Category::Sports,
    ];

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Cardio => "Cardio",
            Category::Strength => "Strength",
            Category::Flexibility => "Flexibility",
            Category::Sports => "Sports",
        }
    }

    /// Activity types that belong to this category.
    pub fn types(&self) -> &'static [ActivityType] {
        match self {
            Category::Cardio => &[
                ActivityType::Running,
                ActivityType::Walking,
                ActivityType::Cycling,
                ActivityType::Swimming,
            ],
            Category::Strength => &[
                ActivityType::WeightTraining,
                ActivityType::BodyweightExercises,
                ActivityType::ResistanceTraining,
            ],
            Category::Flexibility => &[
                ActivityType::Yoga,
                ActivityType::Stretching,
                ActivityType::Pilates,
            ],
            Category::Sports => &[
                ActivityType::Basketball,
                ActivityType::Tennis,
                ActivityType::Soccer,
                ActivityType::OtherSports,
            ],
        }
    }

    /// Whether `activity_type` is listed under this category.
    pub fn contains(&self, activity_type: ActivityType) -> bool {
        self.types().contains(&activity_type)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Category {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.display_name() == s.trim())
            .ok_or_else(|| TrackerError::invalid("Category", format!("unknown category '{}'", s)))
    }
}

/// A specific kind of exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    Running,
    Walking,
    Cycling,
    Swimming,
    #[serde(rename = "Weight Training")]
    WeightTraining,
    #[serde(rename = "Bodyweight Exercises")]
    BodyweightExercises,
    #[serde(rename = "Resistance Training")]
    ResistanceTraining,
    Yoga,
    Stretching,
    Pilates,
    Basketball,
    Tennis,
    Soccer,
    #[serde(rename = "Other Sports")]
    OtherSports,
}

impl ActivityType {
    /// Every type across all categories.
    pub const ALL: [ActivityType; 14] = [
        ActivityType::Running,
        ActivityType::Walking,
        ActivityType::Cycling,
        ActivityType::Swimming,
        ActivityType::WeightTraining,
        ActivityType::BodyweightExercises,
        ActivityType::ResistanceTraining,
        ActivityType::Yoga,
        ActivityType::Stretching,
        ActivityType::Pilates,
        ActivityType::Basketball,
        ActivityType::Tennis,
        ActivityType::Soccer,
        ActivityType::OtherSports,
    ];

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityType::Running => "Running",
            ActivityType::Walking => "Walking",
            ActivityType::Cycling => "Cycling",
            ActivityType::Swimming => "Swimming",
            ActivityType::WeightTraining => "Weight Training",
            ActivityType::BodyweightExercises => "Bodyweight Exercises",
            ActivityType::ResistanceTraining => "Resistance Training",
            ActivityType::Yoga => "Yoga",
            ActivityType::Stretching => "Stretching",
            ActivityType::Pilates => "Pilates",
            ActivityType::Basketball => "Basketball",
            ActivityType::Tennis => "Tennis",
            ActivityType::Soccer => "Soccer",
            ActivityType::OtherSports => "Other Sports",
        }
    }

    /// The category this type is listed under.
    pub fn category(&self) -> Category {
        match self {
            ActivityType::Running
            | ActivityType::Walking
            | ActivityType::Cycling
            | ActivityType::Swimming => Category::Cardio,
            ActivityType::WeightTraining
            | ActivityType::BodyweightExercises
            | ActivityType::ResistanceTraining => Category::Strength,
            ActivityType::Yoga | ActivityType::Stretching | ActivityType::Pilates => {
                Category::Flexibility
            }
            ActivityType::Basketball
            | ActivityType::Tennis
            | ActivityType::Soccer
            | ActivityType::OtherSports => Category::Sports,
        }
    }

    /// Calories burned per minute for this type.
    pub fn calories_per_minute(&self) -> f64 {
        calories::coefficient(self.display_name())
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for ActivityType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|t| t.display_name() == s.trim())
            .ok_or_else(|| {
                TrackerError::invalid("Activity type", format!("unknown activity type '{}'", s))
            })
    }
}

/// Resolve a category/type name pair, rejecting pairs outside the taxonomy.
pub fn resolve_pair(
    category: &str,
    activity_type: &str,
) -> Result<(Category, ActivityType), TrackerError> {
    let category: Category = category.parse()?;
    let activity_type: ActivityType = activity_type.parse()?;
    ensure_pair(category, activity_type)?;
    Ok((category, activity_type))
}

/// Check that `activity_type` is listed under `category`.
pub fn ensure_pair(
    category: Category,
    activity_type: ActivityType,
) -> Result<(), TrackerError> {
    if category.contains(activity_type) {
        Ok(())
    } else {
        Err(TrackerError::invalid(
            "Activity type",
            format!("{} is not a {} activity", activity_type, category),
        ))
    }
}

/// One logged exercise session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Local calendar day the session was logged
    pub date: NaiveDate,
    /// Category the session was logged under
    pub category: Category,
    /// Kind of exercise
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Duration in minutes
    pub duration_min: u32,
    /// Calories burned, fixed when the session was logged
    pub calories: f64,
}

impl Activity {
    /// Create an activity, computing calories from the current table.
    pub fn new(
        date: NaiveDate,
        category: Category,
        activity_type: ActivityType,
        duration_min: u32,
    ) -> Self {
        Self {
            date,
            category,
            activity_type,
            duration_min,
            calories: calories::estimate(activity_type.display_name(), duration_min),
        }
    }

    /// Check the taxonomy pair, the duration and that calories match the table.
    pub fn validate(&self) -> Result<(), TrackerError> {
        ensure_pair(self.category, self.activity_type)?;
        if self.duration_min == 0 {
            return Err(TrackerError::invalid(
                "Duration",
                "must be a positive number of minutes",
            ));
        }
        let expected = calories::estimate(self.activity_type.display_name(), self.duration_min);
        if self.calories != expected {
            return Err(TrackerError::invalid(
                "Calories",
                format!(
                    "{} does not match {} for {}",
                    self.calories, expected, self.activity_type
                ),
            ));
        }
        Ok(())
    }

    /// The event goals receive when this activity is logged.
    pub fn event(&self) -> ActivityEvent {
        ActivityEvent {
            date: self.date,
            activity_type: self.activity_type,
            category: self.category,
            duration_min: self.duration_min,
            calories: self.calories,
        }
    }
}

/// Notification sent to the goal engine for each new activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityEvent {
    pub date: NaiveDate,
    pub activity_type: ActivityType,
    pub category: Category,
    pub duration_min: u32,
    pub calories: f64,
}
