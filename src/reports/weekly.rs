//! Weekly activity summary.

use chrono::{Duration, NaiveDate};

use crate::activities::{Activity, Category};

/// Days before `today` included in the weekly window.
pub const WINDOW_DAYS: i64 = 7;

/// Duration and calorie sums for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotals {
    pub category: Category,
    pub duration_min: u64,
    pub calories: f64,
}

/// Summary of the activities in `[from, to]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyReport {
    /// First day of the window
    pub from: NaiveDate,
    /// Last day of the window (the report date)
    pub to: NaiveDate,
    /// Activities inside the window, in log order
    pub activities: Vec<Activity>,
    /// Total minutes across the window
    pub total_duration_min: u64,
    /// Total calories across the window
    pub total_calories: f64,
    /// Per-category sums, in order of first appearance
    pub by_category: Vec<CategoryTotals>,
}

impl WeeklyReport {
    /// Number of activities in the window.
    pub fn count(&self) -> usize {
        self.activities.len()
    }

    /// Total calories rounded to one decimal.
    pub fn total_calories_rounded(&self) -> f64 {
        (self.total_calories * 10.0).round() / 10.0
    }

    /// Totals for one category, if it appeared in the window.
    pub fn category(&self, category: Category) -> Option<&CategoryTotals> {
        self.by_category.iter().find(|t| t.category == category)
    }
}

/// Build the report for the week ending on `today`.
///
/// Returns `None` when nothing has been logged at all. A non-empty log with no
/// activity in the window yields a report with zero totals.
pub fn weekly_report(activities: &[Activity], today: NaiveDate) -> Option<WeeklyReport> {
    if activities.is_empty() {
        return None;
    }

    let from = today - Duration::days(WINDOW_DAYS);
    let in_window: Vec<Activity> = activities
        .iter()
        .filter(|a| a.date >= from && a.date <= today)
        .cloned()
        .collect();

    let mut by_category: Vec<CategoryTotals> = Vec::new();
    let mut total_duration_min = 0u64;
    let mut total_calories = 0.0;

    for activity in &in_window {
        total_duration_min += u64::from(activity.duration_min);
        total_calories += activity.calories;

        match by_category
            .iter_mut()
            .find(|t| t.category == activity.category)
        {
            Some(totals) => {
                totals.duration_min += u64::from(activity.duration_min);
                totals.calories += activity.calories;
            }
            None => by_category.push(CategoryTotals {
                category: activity.category,
                duration_min: u64::from(activity.duration_min),
                calories: activity.calories,
            }),
        }
    }

    tracing::debug!(
        "Weekly report {} to {}: {} of {} activities",
        from,
        today,
        in_window.len(),
        activities.len()
    );

    Some(WeeklyReport {
        from,
        to: today,
        activities: in_window,
        total_duration_min,
        total_calories,
        by_category,
    })
}
