//! Profile form.

use egui::{Grid, RichText, TextEdit, Ui};

use super::{form_buttons, FormAction};
use crate::profile::UserProfile;

/// Raw text of the profile fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub weight_kg: String,
    pub height_cm: String,
}

impl ProfileForm {
    /// Fill the fields from an existing profile, or leave them blank.
    pub fn prefill(profile: Option<&UserProfile>) -> Self {
        match profile {
            Some(p) => Self {
                name: p.name.clone(),
                age: p.age.to_string(),
                weight_kg: p.weight_kg.to_string(),
                height_cm: p.height_cm.to_string(),
            },
            None => Self::default(),
        }
    }

    /// Render the form.
    pub fn show(&mut self, ui: &mut Ui) -> Option<FormAction> {
        ui.heading(RichText::new("User Profile").strong());
        ui.add_space(12.0);

        Grid::new("profile_form_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Name:");
                ui.add(TextEdit::singleline(&mut self.name));
                ui.end_row();

                ui.label("Age:");
                ui.add(TextEdit::singleline(&mut self.age));
                ui.end_row();

                ui.label("Weight (kg):");
                ui.add(TextEdit::singleline(&mut self.weight_kg));
                ui.end_row();

                ui.label("Height (cm):");
                ui.add(TextEdit::singleline(&mut self.height_cm));
                ui.end_row();
            });

        ui.add_space(12.0);
        form_buttons(ui)
    }
}
