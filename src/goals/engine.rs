//! Goal engine: owns the goals and accrues progress from activity events.

use chrono::NaiveDate;
use uuid::Uuid;

use super::types::{Goal, GoalType};
use crate::activities::ActivityEvent;
use crate::error::TrackerError;

/// Ordered collection of goals.
#[derive(Debug, Clone, Default)]
pub struct GoalEngine {
    goals: Vec<Goal>,
}

impl GoalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted goals, keeping their order and progress.
    pub fn from_goals(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    /// Validate and append a new goal starting `today`.
    pub fn create(
        &mut self,
        goal_type: GoalType,
        target: f64,
        duration_days: u32,
        today: NaiveDate,
    ) -> Result<&Goal, TrackerError> {
        let goal = Goal::new(goal_type, target, duration_days, today)?;
        tracing::info!(
            "Created goal {}: {} {} by {}",
            goal.id,
            goal.target,
            goal.goal_type.unit(),
            goal.end_date
        );

        self.goals.push(goal);
        Ok(&self.goals[self.goals.len() - 1])
    }

    /// Accrue an activity into every goal, in creation order.
    ///
    /// Progress counts the activity whether or not its date falls inside the goal's
    /// start/end window. Returns the ids of goals that reached their target with this
    /// event.
    pub fn apply(&mut self, event: &ActivityEvent) -> Vec<Uuid> {
        let mut newly_achieved = Vec::new();

        for goal in &mut self.goals {
            let was_achieved = goal.is_achieved();
            goal.add_progress(goal.goal_type.contribution(event));

            if !was_achieved && goal.is_achieved() {
                tracing::info!("Goal {} achieved ({})", goal.id, goal.goal_type);
                newly_achieved.push(goal.id);
            }
        }

        newly_achieved
    }

    /// Goals in creation order.
    pub fn list(&self) -> &[Goal] {
        &self.goals
    }

    /// Find a goal by id.
    pub fn get(&self, id: Uuid) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}
