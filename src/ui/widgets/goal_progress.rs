//! Goal card with a progress bar.

use egui::{ProgressBar, RichText, Ui};

use crate::ui::theme::Palette;
use crate::views::GoalView;

/// A single goal line with its progress bar on the right.
pub struct GoalProgress<'a> {
    goal: &'a GoalView,
    bar_width: f32,
}

impl<'a> GoalProgress<'a> {
    pub fn new(goal: &'a GoalView) -> Self {
        Self {
            goal,
            bar_width: 150.0,
        }
    }

    /// Set the width of the progress bar.
    pub fn bar_width(mut self, width: f32) -> Self {
        self.bar_width = width;
        self
    }

    /// Render the card.
    pub fn show(self, ui: &mut Ui) {
        let palette = Palette::of(ui.visuals());
        ui.horizontal(|ui| {
            let text = RichText::new(&self.goal.label);
            let text = if self.goal.achieved {
                text.color(palette.achieved)
            } else if self.goal.days_remaining < 0 {
                text.color(palette.overdue)
            } else {
                text
            };
            ui.label(text);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(
                    ProgressBar::new(self.goal.bar_fraction)
                        .desired_width(self.bar_width)
                        .fill(palette.accent)
                        .text(format!("{}%", self.goal.progress_pct.min(100))),
                );
            });
        });
    }
}
