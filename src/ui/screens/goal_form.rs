//! Goal form.

use egui::{ComboBox, Grid, RichText, TextEdit, Ui};

use super::{form_buttons, FormAction};
use crate::goals::GoalType;

/// Selected goal type plus the raw target and duration text.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalForm {
    pub goal_type: GoalType,
    pub target: String,
    pub duration_days: String,
}

impl Default for GoalForm {
    fn default() -> Self {
        Self {
            goal_type: GoalType::CaloriesBurned,
            target: String::new(),
            duration_days: String::new(),
        }
    }
}

impl GoalForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the form.
    pub fn show(&mut self, ui: &mut Ui) -> Option<FormAction> {
        ui.heading(RichText::new("Set Goal").strong());
        ui.add_space(12.0);

        Grid::new("goal_form_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Goal Type:");
                ComboBox::from_id_salt("goal_type")
                    .selected_text(self.goal_type.display_name())
                    .show_ui(ui, |ui| {
                        for goal_type in GoalType::ALL {
                            ui.selectable_value(
                                &mut self.goal_type,
                                goal_type,
                                goal_type.display_name(),
                            );
                        }
                    });
                ui.end_row();

                ui.label(format!("Target ({}):", self.goal_type.unit()));
                ui.add(TextEdit::singleline(&mut self.target));
                ui.end_row();

                ui.label("Duration (days):");
                ui.add(TextEdit::singleline(&mut self.duration_days));
                ui.end_row();
            });

        ui.add_space(12.0);
        form_buttons(ui)
    }
}
