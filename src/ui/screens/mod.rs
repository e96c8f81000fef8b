//! UI screens for the application.

pub mod activity_form;
pub mod dashboard;
pub mod goal_form;
pub mod goals;
pub mod profile_form;
pub mod weekly_report;

pub use activity_form::ActivityForm;
pub use dashboard::DashboardScreen;
pub use goal_form::GoalForm;
pub use goals::GoalsScreen;
pub use profile_form::ProfileForm;
pub use weekly_report::WeeklyReportScreen;

/// Screen navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Profile summary, goals panel and activity table
    #[default]
    Dashboard,
    /// Profile form
    Profile,
    /// Activity form
    LogActivity,
    /// Goal form
    SetGoal,
    /// Goal list
    Goals,
    /// Weekly report text
    WeeklyReport,
}

impl Screen {
    /// Whether the screen needs a profile before it can be opened.
    pub fn requires_profile(&self) -> bool {
        matches!(self, Screen::LogActivity | Screen::SetGoal)
    }
}

/// What the user did with a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    Cancel,
}

/// OK / Cancel button row shared by the forms.
pub(crate) fn form_buttons(ui: &mut egui::Ui) -> Option<FormAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("OK").clicked() {
            action = Some(FormAction::Submit);
        }
        if ui.button("Cancel").clicked() {
            action = Some(FormAction::Cancel);
        }
    });
    action
}
