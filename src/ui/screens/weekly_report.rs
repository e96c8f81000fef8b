//! Weekly report screen.

use egui::{RichText, ScrollArea, TextEdit, Ui};

/// Weekly report screen UI.
pub struct WeeklyReportScreen;

impl WeeklyReportScreen {
    /// Show the rendered report; returns true when the user asks to close it.
    pub fn show(ui: &mut Ui, text: &str) -> bool {
        ui.heading(RichText::new("Weekly Report").strong());
        ui.add_space(12.0);

        ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
            let mut shown = text;
            ui.add(
                TextEdit::multiline(&mut shown)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );
        });

        ui.add_space(12.0);
        ui.button("Close").clicked()
    }
}
