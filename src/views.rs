//! Display formatting for profile, activities, goals and reports.
//!
//! Domain types carry only values; everything the UI shows as text is built here.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::activities::Activity;
use crate::goals::{Goal, GoalType};
use crate::profile::UserProfile;
use crate::reports::WeeklyReport;

pub const NO_PROFILE_MESSAGE: &str = "No user profile set";
pub const NO_GOALS_MESSAGE: &str = "No active goals";
pub const NO_ACTIVITIES_MESSAGE: &str = "No activities logged yet.";
pub const NO_EXPORT_DATA_MESSAGE: &str = "No data to export.";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column titles of the activities table.
pub const ACTIVITY_COLUMNS: [&str; 5] = ["Date", "Type", "Category", "Duration (min)", "Calories"];

/// One row of the activities table.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    pub date: String,
    pub activity_type: String,
    pub category: String,
    pub duration_min: u32,
    pub calories: String,
}

impl ActivityRow {
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            date: activity.date.format(DATE_FORMAT).to_string(),
            activity_type: activity.activity_type.display_name().to_string(),
            category: activity.category.display_name().to_string(),
            duration_min: activity.duration_min,
            calories: format!("{:.1}", activity.calories),
        }
    }

    /// Cells in column order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.date.clone(),
            self.activity_type.clone(),
            self.category.clone(),
            self.duration_min.to_string(),
            self.calories.clone(),
        ]
    }
}

/// A goal with its derived progress figures.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalView {
    pub id: Uuid,
    pub goal_type: GoalType,
    pub progress: f64,
    pub target: f64,
    pub progress_pct: u64,
    /// Progress-bar fill in [0, 1]
    pub bar_fraction: f32,
    pub end_date: NaiveDate,
    pub days_remaining: i64,
    pub achieved: bool,
    /// Full text line for lists
    pub label: String,
}

impl GoalView {
    pub fn from_goal(goal: &Goal, today: NaiveDate) -> Self {
        Self {
            id: goal.id,
            goal_type: goal.goal_type,
            progress: goal.progress,
            target: goal.target,
            progress_pct: goal.progress_pct(),
            bar_fraction: goal.completion_fraction(),
            end_date: goal.end_date,
            days_remaining: goal.days_remaining(today),
            achieved: goal.is_achieved(),
            label: goal_line(goal),
        }
    }
}

/// Everything the main window renders after a change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackerViews {
    pub profile_summary: String,
    pub activity_rows: Vec<ActivityRow>,
    pub goals: Vec<GoalView>,
}

/// `Name: Ada, Age: 30, Weight: 65.0 kg, Height: 170.0 cm, BMI: 22.5 (Normal)`
pub fn profile_summary(profile: Option<&UserProfile>) -> String {
    match profile {
        Some(p) => format!(
            "Name: {}, Age: {}, Weight: {:.1} kg, Height: {:.1} cm, BMI: {:.1} ({})",
            p.name,
            p.age,
            p.weight_kg,
            p.height_cm,
            p.bmi(),
            p.bmi_category()
        ),
        None => NO_PROFILE_MESSAGE.to_string(),
    }
}

/// `Running (Cardio) - 30 minutes - 345.0 calories burned - 2025-01-10`
pub fn activity_line(activity: &Activity) -> String {
    format!(
        "{} ({}) - {} minutes - {:.1} calories burned - {}",
        activity.activity_type,
        activity.category,
        activity.duration_min,
        activity.calories,
        activity.date.format(DATE_FORMAT)
    )
}

/// `Calories Burned: 930.0/1000.0 calories burned (93%) - Due: 2025-01-17`
pub fn goal_line(goal: &Goal) -> String {
    let line = format!(
        "{}: {:.1}/{:.1} {} ({}%) - Due: {}",
        goal.goal_type,
        goal.progress,
        goal.target,
        goal.goal_type.display_name().to_lowercase(),
        goal.progress_pct(),
        goal.end_date.format(DATE_FORMAT)
    );
    if goal.is_achieved() {
        format!("{} \u{2713}", line)
    } else {
        line
    }
}

/// Plain-text rendering of a weekly report.
pub fn weekly_report_text(report: &WeeklyReport) -> String {
    let mut text = String::new();
    text.push_str("Weekly Activity Report\n");
    text.push_str(&format!(
        "Period: {} to {}\n\n",
        report.from.format(DATE_FORMAT),
        report.to.format(DATE_FORMAT)
    ));

    text.push_str("Summary:\n");
    text.push_str(&format!("Total Activities: {}\n", report.count()));
    text.push_str(&format!(
        "Total Duration: {} minutes\n",
        report.total_duration_min
    ));
    text.push_str(&format!(
        "Total Calories Burned: {:.1}\n\n",
        report.total_calories_rounded()
    ));

    text.push_str("By Category:\n");
    for totals in &report.by_category {
        text.push_str(&format!("{}:\n", totals.category));
        text.push_str(&format!("  Duration: {} minutes\n", totals.duration_min));
        text.push_str(&format!("  Calories: {:.1}\n", totals.calories));
    }

    text
}
