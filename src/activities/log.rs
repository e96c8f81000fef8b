//! Append-only log of activities.

use chrono::NaiveDate;

use super::types::{Activity, ActivityType, Category};
use crate::error::TrackerError;

/// Activities in the order they were logged.
///
/// There is no update or delete: the only mutation is [`ActivityLog::record`].
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<Activity>,
}

impl ActivityLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from persisted entries, keeping their order.
    pub fn from_entries(entries: Vec<Activity>) -> Self {
        Self { entries }
    }

    /// Validate and append a new activity dated `date`.
    pub fn record(
        &mut self,
        category: Category,
        activity_type: ActivityType,
        duration_min: u32,
        date: NaiveDate,
    ) -> Result<&Activity, TrackerError> {
        let activity = Activity::new(date, category, activity_type, duration_min);
        activity.validate()?;

        self.entries.push(activity);
        let activity = &self.entries[self.entries.len() - 1];

        tracing::info!(
            "Logged {} ({}) for {} min, {:.1} kcal",
            activity.activity_type,
            activity.category,
            activity.duration_min,
            activity.calories
        );
        Ok(activity)
    }

    /// Activities in insertion order.
    pub fn list(&self) -> &[Activity] {
        &self.entries
    }

    /// Number of logged activities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
