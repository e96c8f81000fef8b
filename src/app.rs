//! Main application state and eframe::App implementation.

use crossbeam::channel::Receiver;
use eframe::egui;

use fitness_tracker::storage::config::{self, Theme};
use fitness_tracker::tracker::{FitnessTracker, TrackerEvent};
use fitness_tracker::ui::screens::{
    ActivityForm, DashboardScreen, FormAction, GoalForm, GoalsScreen, ProfileForm, Screen,
    WeeklyReportScreen,
};
use fitness_tracker::ui::theme;
use fitness_tracker::views::{self, TrackerViews};
use fitness_tracker::{AppConfig, TrackerError};

/// Main application state.
pub struct FitnessTrackerApp {
    tracker: FitnessTracker,
    events: Receiver<TrackerEvent>,
    /// Last views published by the tracker
    views: TrackerViews,
    current_screen: Screen,
    profile_form: ProfileForm,
    activity_form: ActivityForm,
    goal_form: GoalForm,
    report_text: String,
    /// Status bar text
    status: String,
    /// Message shown in the modal error window
    error: Option<String>,
    theme: Theme,
    config: AppConfig,
    /// Set after a failed save on close; the next close request goes through
    force_close: bool,
}

impl FitnessTrackerApp {
    /// Create a new application instance and load the data file.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let theme = config.ui.theme;
        cc.egui_ctx.set_visuals(theme::visuals(theme));
        cc.egui_ctx.set_zoom_factor(config.ui.font_scale);

        let mut tracker = FitnessTracker::from_config(&config);
        let events = tracker.subscribe();

        let error = match tracker.load() {
            Ok(()) => None,
            Err(e) => Some(e.to_string()),
        };

        Self {
            views: tracker.views(),
            tracker,
            events,
            current_screen: Screen::Dashboard,
            profile_form: ProfileForm::default(),
            activity_form: ActivityForm::new(),
            goal_form: GoalForm::new(),
            report_text: String::new(),
            status: "Ready".to_string(),
            error,
            theme,
            config,
            force_close: false,
        }
    }

    /// Apply pending tracker notifications.
    fn process_events(&mut self) {
        for event in self.events.try_iter() {
            match event {
                TrackerEvent::Refreshed(views) => self.views = views,
                TrackerEvent::GoalAchieved(goal) => {
                    tracing::info!("Goal achieved: {}", goal.label);
                    self.status = format!("Goal achieved: {}", goal.goal_type);
                }
                TrackerEvent::Saved => self.status = "Data saved".to_string(),
                TrackerEvent::Loaded => self.status = "Data loaded".to_string(),
            }
        }
    }

    /// Navigate to a different screen.
    fn navigate(&mut self, screen: Screen) {
        if screen.requires_profile() && self.tracker.profile().is_none() {
            self.show_error(TrackerError::ProfileRequired);
            return;
        }

        match screen {
            Screen::Profile => {
                self.profile_form = ProfileForm::prefill(self.tracker.profile());
            }
            Screen::LogActivity => self.activity_form = ActivityForm::new(),
            Screen::SetGoal => self.goal_form = GoalForm::new(),
            Screen::WeeklyReport => match self.tracker.weekly_report() {
                Ok(report) => self.report_text = views::weekly_report_text(&report),
                Err(e) => {
                    self.show_error(e);
                    return;
                }
            },
            Screen::Dashboard | Screen::Goals => {}
        }

        tracing::debug!("Navigating from {:?} to {:?}", self.current_screen, screen);
        self.current_screen = screen;
    }

    fn show_error(&mut self, error: TrackerError) {
        tracing::warn!("{}", error);
        self.error = Some(error.to_string());
    }

    fn submit_profile(&mut self) {
        let form = &self.profile_form;
        match self
            .tracker
            .set_profile(&form.name, &form.age, &form.weight_kg, &form.height_cm)
        {
            Ok(summary) => {
                self.status = "Profile updated".to_string();
                tracing::debug!("{}", summary);
                self.current_screen = Screen::Dashboard;
            }
            Err(e) => self.show_error(e),
        }
    }

    fn submit_activity(&mut self) {
        let form = &self.activity_form;
        match self.tracker.log_activity(
            form.category.display_name(),
            form.activity_type.display_name(),
            &form.duration,
        ) {
            Ok(_) => {
                if let Some(activity) = self.tracker.activities().last() {
                    self.status = format!("Logged {}", views::activity_line(activity));
                }
                self.current_screen = Screen::Dashboard;
            }
            Err(e) => self.show_error(e),
        }
    }

    fn submit_goal(&mut self) {
        let form = &self.goal_form;
        match self.tracker.set_goal(
            form.goal_type.display_name(),
            &form.target,
            &form.duration_days,
        ) {
            Ok(goal) => {
                self.status = format!("Goal set: {}", goal.goal_type);
                self.current_screen = Screen::Dashboard;
            }
            Err(e) => self.show_error(e),
        }
    }

    fn export_csv(&mut self) {
        if self.tracker.activities().is_empty() {
            self.error = Some(views::NO_EXPORT_DATA_MESSAGE.to_string());
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(&self.config.export_file_name)
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };

        match self.tracker.export_csv(&path) {
            Ok(rows) => {
                self.status = format!("Exported {} activities to {}", rows, path.display());
            }
            Err(e) => self.show_error(e),
        }
    }

    fn save(&mut self) {
        if let Err(e) = self.tracker.save() {
            self.show_error(e);
        }
    }

    /// Toggle the theme and remember the choice.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = theme::toggled(self.theme);
        ctx.set_visuals(theme::visuals(self.theme));

        self.config.ui.theme = self.theme;
        if let Err(e) = config::save_config(&self.config) {
            tracing::warn!("Failed to save configuration: {}", e);
        }
    }

    /// Save on close; a failed save keeps the window open once.
    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) || self.force_close {
            return;
        }

        if let Err(e) = self.tracker.quit() {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_error(e);
            self.status = "Close again to exit without saving".to_string();
            self.force_close = true;
        }
    }

    fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("menu_panel")
            .resizable(false)
            .default_width(160.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);

                ui.label(egui::RichText::new("Profile").strong());
                if ui.button("Edit Profile").clicked() {
                    self.navigate(Screen::Profile);
                }

                ui.separator();
                ui.label(egui::RichText::new("Activities").strong());
                if ui.button("Log Activity").clicked() {
                    self.navigate(Screen::LogActivity);
                }
                if ui.button("View Activities").clicked() {
                    self.navigate(Screen::Dashboard);
                }

                ui.separator();
                ui.label(egui::RichText::new("Goals").strong());
                if ui.button("Set Goal").clicked() {
                    self.navigate(Screen::SetGoal);
                }
                if ui.button("View Goals").clicked() {
                    self.navigate(Screen::Goals);
                }

                ui.separator();
                ui.label(egui::RichText::new("Reports").strong());
                if ui.button("Weekly Report").clicked() {
                    self.navigate(Screen::WeeklyReport);
                }
                if ui.button("Export Data").clicked() {
                    self.export_csv();
                }

                ui.separator();
                if ui.button("Save").clicked() {
                    self.save();
                }
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
    }

    fn render_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error.clone() else {
            return;
        };

        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.colored_label(ui.visuals().error_fg_color, message);
                ui.add_space(12.0);
                if ui.button("OK").clicked() {
                    self.error = None;
                }
            });
    }
}

impl eframe::App for FitnessTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events();
        self.handle_close_request(ctx);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape))
            && self.current_screen != Screen::Dashboard
        {
            self.navigate(Screen::Dashboard);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Fitness Tracker Pro");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = match self.theme {
                        Theme::Dark => "\u{1F319}",
                        Theme::Light => "\u{2600}",
                    };
                    if ui.button(theme_icon).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.tracker.data_file().path().display().to_string())
                            .small()
                            .weak(),
                    );
                });
            });
        });

        self.render_side_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.current_screen {
            Screen::Dashboard => DashboardScreen::show(ui, &self.views),
            Screen::Profile => match self.profile_form.show(ui) {
                Some(FormAction::Submit) => self.submit_profile(),
                Some(FormAction::Cancel) => self.current_screen = Screen::Dashboard,
                None => {}
            },
            Screen::LogActivity => match self.activity_form.show(ui) {
                Some(FormAction::Submit) => self.submit_activity(),
                Some(FormAction::Cancel) => self.current_screen = Screen::Dashboard,
                None => {}
            },
            Screen::SetGoal => match self.goal_form.show(ui) {
                Some(FormAction::Submit) => self.submit_goal(),
                Some(FormAction::Cancel) => self.current_screen = Screen::Dashboard,
                None => {}
            },
            Screen::Goals => GoalsScreen::show(ui, &self.views.goals),
            Screen::WeeklyReport => {
                if WeeklyReportScreen::show(ui, &self.report_text) {
                    self.current_screen = Screen::Dashboard;
                }
            }
        });

        self.render_error_dialog(ctx);
    }
}
