//! Main window contents: profile, goals panel and activity table.

use egui::{Grid, RichText, ScrollArea, Ui};

use crate::ui::widgets::GoalProgress;
use crate::views::{TrackerViews, ACTIVITY_COLUMNS, NO_ACTIVITIES_MESSAGE, NO_GOALS_MESSAGE};

/// Dashboard screen UI.
pub struct DashboardScreen;

impl DashboardScreen {
    pub fn show(ui: &mut Ui, views: &TrackerViews) {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("User Profile").strong());
            ui.label(&views.profile_summary);
        });

        ui.add_space(8.0);

        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Active Goals").strong());
            if views.goals.is_empty() {
                ui.label(RichText::new(NO_GOALS_MESSAGE).weak());
            } else {
                for goal in &views.goals {
                    GoalProgress::new(goal).show(ui);
                }
            }
        });

        ui.add_space(8.0);

        ui.label(RichText::new("Activities").strong());
        if views.activity_rows.is_empty() {
            ui.label(RichText::new(NO_ACTIVITIES_MESSAGE).weak());
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Grid::new("activities_table")
                    .num_columns(ACTIVITY_COLUMNS.len())
                    .striped(true)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        for title in ACTIVITY_COLUMNS {
                            ui.label(RichText::new(title).strong());
                        }
                        ui.end_row();

                        for row in &views.activity_rows {
                            for cell in row.cells() {
                                ui.label(cell);
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}
