//! Goal type definitions.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::activities::ActivityEvent;
use crate::error::TrackerError;

/// What a goal accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalType {
    /// Sum of calories over logged activities
    #[serde(rename = "Calories Burned")]
    CaloriesBurned,
    /// Sum of minutes over logged activities
    #[serde(rename = "Activity Duration")]
    ActivityDuration,
}

impl GoalType {
    /// All goal types in display order.
    pub const ALL: [GoalType; 2] = [GoalType::CaloriesBurned, GoalType::ActivityDuration];

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalType::CaloriesBurned => "Calories Burned",
            GoalType::ActivityDuration => "Activity Duration",
        }
    }

    /// Get unit of measurement.
    pub fn unit(&self) -> &'static str {
        match self {
            GoalType::CaloriesBurned => "kcal",
            GoalType::ActivityDuration => "min",
        }
    }

    /// How much an activity moves a goal of this type.
    pub fn contribution(&self, event: &ActivityEvent) -> f64 {
        match self {
            GoalType::CaloriesBurned => event.calories,
            GoalType::ActivityDuration => f64::from(event.duration_min),
        }
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for GoalType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalType::ALL
            .into_iter()
            .find(|g| g.display_name() == s.trim())
            .ok_or_else(|| TrackerError::invalid("Goal type", format!("unknown goal type '{}'", s)))
    }
}

/// A numeric target to reach by a deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: Uuid,
    /// What the goal accumulates
    pub goal_type: GoalType,
    /// Value to reach
    pub target: f64,
    /// Running total accrued from activities
    pub progress: f64,
    /// Day the goal was set
    pub start_date: NaiveDate,
    /// Deadline (start date plus the requested number of days)
    pub end_date: NaiveDate,
}

impl Goal {
    /// Create a goal starting on `start_date` and lasting `duration_days`.
    pub fn new(
        goal_type: GoalType,
        target: f64,
        duration_days: u32,
        start_date: NaiveDate,
    ) -> Result<Self, TrackerError> {
        if duration_days == 0 {
            return Err(TrackerError::invalid("Duration", "must be at least one day"));
        }
        let end_date = start_date
            .checked_add_days(Days::new(u64::from(duration_days)))
            .ok_or_else(|| TrackerError::invalid("Duration", "deadline is out of range"))?;

        let goal = Self {
            id: Uuid::new_v4(),
            goal_type,
            target,
            progress: 0.0,
            start_date,
            end_date,
        };
        goal.validate()?;
        Ok(goal)
    }

    /// Check the target, the running total and the deadline.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if !(self.target.is_finite() && self.target > 0.0) {
            return Err(TrackerError::invalid("Target", "must be a positive number"));
        }
        if !(self.progress.is_finite() && self.progress >= 0.0) {
            return Err(TrackerError::invalid("Progress", "must not be negative"));
        }
        if self.end_date <= self.start_date {
            return Err(TrackerError::invalid("Deadline", "must be after the start date"));
        }
        Ok(())
    }

    /// Add to the running total.
    pub fn add_progress(&mut self, amount: f64) {
        self.progress += amount;
    }

    /// Whole percent of the target reached, rounded down. Can exceed 100.
    ///
    /// Saturates at `u64::MAX` when the ratio is beyond what a `u64` holds.
    pub fn progress_pct(&self) -> u64 {
        (100.0 * self.progress / self.target).floor() as u64
    }

    /// Progress as a fraction clamped to [0, 1] for progress bars.
    pub fn completion_fraction(&self) -> f32 {
        (self.progress / self.target).clamp(0.0, 1.0) as f32
    }

    pub fn is_achieved(&self) -> bool {
        self.progress >= self.target
    }

    /// Days until the deadline (negative once it has passed).
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days()
    }

    /// Whether the deadline has passed without reaching the target.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_achieved() && self.days_remaining(today) < 0
    }
}
