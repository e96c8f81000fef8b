//! Goal list screen.

use egui::{RichText, ScrollArea, Ui};

use crate::ui::widgets::GoalProgress;
use crate::views::{GoalView, NO_GOALS_MESSAGE};

/// Goals screen UI.
pub struct GoalsScreen;

impl GoalsScreen {
    pub fn show(ui: &mut Ui, goals: &[GoalView]) {
        ui.heading(RichText::new("Goals").strong());
        ui.add_space(12.0);

        if goals.is_empty() {
            ui.label(RichText::new(NO_GOALS_MESSAGE).weak());
            return;
        }

        ScrollArea::vertical().show(ui, |ui| {
            for goal in goals {
                GoalProgress::new(goal).bar_width(200.0).show(ui);
                let remaining = if goal.achieved {
                    "Achieved".to_string()
                } else if goal.days_remaining < 0 {
                    "Overdue".to_string()
                } else {
                    format!("{} days remaining", goal.days_remaining)
                };
                ui.label(RichText::new(remaining).small().weak());
                ui.separator();
            }
        });
    }
}
