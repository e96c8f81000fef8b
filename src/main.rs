//! Fitness Tracker Pro
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Fitness Tracker v{}", env!("CARGO_PKG_VERSION"));

    let config = match fitness_tracker::storage::config::load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default configuration: {}", e);
            fitness_tracker::AppConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Fitness Tracker Pro"),
        ..Default::default()
    };

    eframe::run_native(
        "Fitness Tracker Pro",
        options,
        Box::new(|cc| Ok(Box::new(app::FitnessTrackerApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
