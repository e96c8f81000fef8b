//! Application facade.
//!
//! `FitnessTracker` owns the profile, the activity log and the goals. The UI calls
//! its operations with raw form text; each returns a view or a [`TrackerError`].
//! After every successful change the refreshed views are published to subscribers.

use std::path::Path;

use crossbeam::channel::{unbounded, Receiver, Sender};

use crate::activities::{resolve_pair, Activity, ActivityLog};
use crate::clock::{Clock, SystemClock};
use crate::error::{parse_field, TrackerError};
use crate::goals::{Goal, GoalEngine, GoalType};
use crate::profile::{Profile, UserProfile};
use crate::reports::{self, WeeklyReport};
use crate::storage::{AppConfig, DataFile, TrackerState};
use crate::views::{self, ActivityRow, GoalView, TrackerViews};

/// Change notification published to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerEvent {
    /// State changed; carries the views to redraw
    Refreshed(TrackerViews),
    /// A goal reached its target with the latest activity
    GoalAchieved(GoalView),
    /// State was written to the data file
    Saved,
    /// State was read from the data file
    Loaded,
}

/// Single entry point for the UI.
pub struct FitnessTracker {
    profile: Profile,
    activities: ActivityLog,
    goals: GoalEngine,
    data_file: DataFile,
    clock: Box<dyn Clock>,
    autosave_on_exit: bool,
    subscribers: Vec<Sender<TrackerEvent>>,
}

impl FitnessTracker {
    /// Create an empty tracker backed by `data_file`.
    pub fn new(data_file: DataFile, clock: Box<dyn Clock>) -> Self {
        Self {
            profile: Profile::new(),
            activities: ActivityLog::new(),
            goals: GoalEngine::new(),
            data_file,
            clock,
            autosave_on_exit: true,
            subscribers: Vec::new(),
        }
    }

    /// Create an empty tracker from configuration, using the system clock.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut tracker = Self::new(
            DataFile::new(config.data_file.clone()),
            Box::new(SystemClock),
        );
        tracker.autosave_on_exit = config.autosave_on_exit;
        tracker
    }

    /// Receive change notifications.
    pub fn subscribe(&mut self) -> Receiver<TrackerEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Set or replace the profile from form text.
    pub fn set_profile(
        &mut self,
        name: &str,
        age: &str,
        weight_kg: &str,
        height_cm: &str,
    ) -> Result<String, TrackerError> {
        let age: u32 = parse_field("Age", age)?;
        let weight_kg: f64 = parse_field("Weight", weight_kg)?;
        let height_cm: f64 = parse_field("Height", height_cm)?;

        self.profile.set(name, age, weight_kg, height_cm)?;
        self.publish_refresh();
        Ok(self.profile.summary())
    }

    /// Log an activity from form text and feed it to every goal.
    pub fn log_activity(
        &mut self,
        category: &str,
        activity_type: &str,
        duration_min: &str,
    ) -> Result<ActivityRow, TrackerError> {
        if !self.profile.is_set() {
            return Err(TrackerError::ProfileRequired);
        }
        let (category, activity_type) = resolve_pair(category, activity_type)?;
        let duration_min: u32 = parse_field("Duration", duration_min)?;

        let today = self.clock.today();
        let activity = self
            .activities
            .record(category, activity_type, duration_min, today)?;
        let row = ActivityRow::from_activity(activity);
        let event = activity.event();

        let achieved = self.goals.apply(&event);
        for id in achieved {
            if let Some(goal) = self.goals.get(id) {
                let view = GoalView::from_goal(goal, today);
                self.publish(TrackerEvent::GoalAchieved(view));
            }
        }

        self.publish_refresh();
        Ok(row)
    }

    /// Create a goal from form text.
    pub fn set_goal(
        &mut self,
        goal_type: &str,
        target: &str,
        duration_days: &str,
    ) -> Result<GoalView, TrackerError> {
        if !self.profile.is_set() {
            return Err(TrackerError::ProfileRequired);
        }
        let goal_type: GoalType = goal_type.parse()?;
        let target: f64 = parse_field("Target", target)?;
        let duration_days: u32 = parse_field("Duration", duration_days)?;

        let today = self.clock.today();
        let goal = self.goals.create(goal_type, target, duration_days, today)?;
        let view = GoalView::from_goal(goal, today);

        self.publish_refresh();
        Ok(view)
    }

    /// Rows for the activities table, in log order.
    pub fn list_activities(&self) -> Vec<ActivityRow> {
        self.activities
            .list()
            .iter()
            .map(ActivityRow::from_activity)
            .collect()
    }

    /// Goals with derived progress, in creation order.
    pub fn list_goals(&self) -> Vec<GoalView> {
        let today = self.clock.today();
        self.goals
            .list()
            .iter()
            .map(|goal| GoalView::from_goal(goal, today))
            .collect()
    }

    /// Summary of the week ending today.
    pub fn weekly_report(&self) -> Result<WeeklyReport, TrackerError> {
        reports::weekly_report(self.activities.list(), self.clock.today())
            .ok_or_else(|| TrackerError::EmptyState(views::NO_ACTIVITIES_MESSAGE.to_string()))
    }

    /// Write the activity log as CSV to `path`; returns the number of rows.
    pub fn export_csv(&self, path: &Path) -> Result<usize, TrackerError> {
        if self.activities.is_empty() {
            return Err(TrackerError::EmptyState(
                views::NO_EXPORT_DATA_MESSAGE.to_string(),
            ));
        }
        Ok(reports::export_csv_to_file(self.activities.list(), path)?)
    }

    /// Write all state to the data file.
    pub fn save(&mut self) -> Result<(), TrackerError> {
        if let Err(e) = self.data_file.save(&self.state()) {
            tracing::error!("Failed to save {}: {}", self.data_file.path().display(), e);
            return Err(e.into());
        }
        self.publish(TrackerEvent::Saved);
        Ok(())
    }

    /// Replace in-memory state with the data file's contents.
    ///
    /// On failure the tracker continues with empty state and the error is returned
    /// for the UI to show.
    pub fn load(&mut self) -> Result<(), TrackerError> {
        let result = self.data_file.load();
        let state = match result {
            Ok(state) => state,
            Err(e) => {
                tracing::error!("Failed to load {}: {}", self.data_file.path().display(), e);
                self.restore(TrackerState::default());
                self.publish_refresh();
                return Err(e.into());
            }
        };

        self.restore(state);
        self.publish(TrackerEvent::Loaded);
        self.publish_refresh();
        Ok(())
    }

    /// Prepare for shutdown, saving first when autosave is enabled.
    pub fn quit(&mut self) -> Result<(), TrackerError> {
        tracing::info!("Shutting down");
        if self.autosave_on_exit {
            self.save()?;
        }
        Ok(())
    }

    /// Current profile, if set.
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.get()
    }

    /// Profile summary line for the header panel.
    pub fn profile_summary(&self) -> String {
        self.profile.summary()
    }

    pub fn activities(&self) -> &[Activity] {
        self.activities.list()
    }

    pub fn goals(&self) -> &[Goal] {
        self.goals.list()
    }

    /// Snapshot of everything that gets persisted.
    pub fn state(&self) -> TrackerState {
        TrackerState {
            profile: self.profile.get().cloned(),
            activities: self.activities.list().to_vec(),
            goals: self.goals.list().to_vec(),
        }
    }

    /// Views for the main window.
    pub fn views(&self) -> TrackerViews {
        TrackerViews {
            profile_summary: self.profile.summary(),
            activity_rows: self.list_activities(),
            goals: self.list_goals(),
        }
    }

    pub fn data_file(&self) -> &DataFile {
        &self.data_file
    }

    fn restore(&mut self, state: TrackerState) {
        self.profile = Profile::from_user(state.profile);
        self.activities = ActivityLog::from_entries(state.activities);
        self.goals = GoalEngine::from_goals(state.goals);
    }

    fn publish_refresh(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let views = self.views();
        self.publish(TrackerEvent::Refreshed(views));
    }

    fn publish(&mut self, event: TrackerEvent) {
        // Drop subscribers whose receiver is gone
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
