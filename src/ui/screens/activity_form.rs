//! Activity form with dependent category/type selectors.

use egui::{ComboBox, Grid, RichText, TextEdit, Ui};

use super::{form_buttons, FormAction};
use crate::activities::{ActivityType, Category};

/// Selected category and type plus the raw duration text.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityForm {
    pub category: Category,
    pub activity_type: ActivityType,
    pub duration: String,
}

impl Default for ActivityForm {
    fn default() -> Self {
        let category = Category::Cardio;
        Self {
            category,
            activity_type: category.types()[0],
            duration: String::new(),
        }
    }
}

impl ActivityForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change category, resetting the type if it no longer belongs.
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        if !category.contains(self.activity_type) {
            self.activity_type = category.types()[0];
        }
    }

    /// Render the form.
    pub fn show(&mut self, ui: &mut Ui) -> Option<FormAction> {
        ui.heading(RichText::new("Log Activity").strong());
        ui.add_space(12.0);

        let mut selected_category = self.category;

        Grid::new("activity_form_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Category:");
                ComboBox::from_id_salt("activity_category")
                    .selected_text(selected_category.display_name())
                    .show_ui(ui, |ui| {
                        for category in Category::ALL {
                            ui.selectable_value(
                                &mut selected_category,
                                category,
                                category.display_name(),
                            );
                        }
                    });
                ui.end_row();

                ui.label("Activity Type:");
                ComboBox::from_id_salt("activity_type")
                    .selected_text(self.activity_type.display_name())
                    .show_ui(ui, |ui| {
                        for activity_type in self.category.types() {
                            ui.selectable_value(
                                &mut self.activity_type,
                                *activity_type,
                                activity_type.display_name(),
                            );
                        }
                    });
                ui.end_row();

                ui.label("Duration (minutes):");
                ui.add(TextEdit::singleline(&mut self.duration));
                ui.end_row();
            });

        if selected_category != self.category {
            self.select_category(selected_category);
        }

        ui.add_space(12.0);
        form_buttons(ui)
    }
}
