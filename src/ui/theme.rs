//! UI theme definitions.
//!
//! Stock egui visuals, tinted with the colours the tracker uses for goal states.

use egui::{Color32, Visuals};

use crate::storage::config::Theme;

/// Colours for goal and message states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Goal reached
    pub achieved: Color32,
    /// Deadline passed before the target was reached
    pub overdue: Color32,
    /// Failed operation
    pub error: Color32,
    /// Selection and progress-bar fill
    pub accent: Color32,
}

impl Palette {
    pub const DARK: Palette = Palette {
        achieved: Color32::from_rgb(96, 200, 120),
        overdue: Color32::from_rgb(240, 176, 64),
        error: Color32::from_rgb(240, 96, 84),
        accent: Color32::from_rgb(72, 160, 220),
    };

    pub const LIGHT: Palette = Palette {
        achieved: Color32::from_rgb(30, 130, 60),
        overdue: Color32::from_rgb(176, 110, 0),
        error: Color32::from_rgb(190, 40, 30),
        accent: Color32::from_rgb(20, 110, 180),
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::DARK,
            Theme::Light => Self::LIGHT,
        }
    }

    /// Palette matching the visuals currently in use.
    pub fn of(visuals: &Visuals) -> Self {
        if visuals.dark_mode {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}

/// Get the egui Visuals for a theme.
pub fn visuals(theme: Theme) -> Visuals {
    let palette = Palette::for_theme(theme);
    let mut visuals = match theme {
        Theme::Dark => Visuals::dark(),
        Theme::Light => Visuals::light(),
    };

    visuals.warn_fg_color = palette.overdue;
    visuals.error_fg_color = palette.error;
    visuals.hyperlink_color = palette.accent;
    visuals.selection.bg_fill = palette.accent.linear_multiply(0.4);
    visuals.selection.stroke.color = palette.accent;

    visuals
}

/// The other theme.
pub fn toggled(theme: Theme) -> Theme {
    match theme {
        Theme::Dark => Theme::Light,
        Theme::Light => Theme::Dark,
    }
}
