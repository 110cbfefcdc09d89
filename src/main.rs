// Countdown Timer Application
// Main entry point

use countdown_timer::services::settings::SettingsService;
use countdown_timer::ui_egui::{CountdownApp, MIN_ROOT_HEIGHT, MIN_ROOT_WIDTH};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Countdown Timer");

    let settings_service = SettingsService::from_project_dirs();
    let settings = settings_service.load_or_default();
    log::info!("Using settings from {}", settings_service.path().display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Countdown Timer")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([MIN_ROOT_WIDTH, MIN_ROOT_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Countdown Timer",
        options,
        Box::new(|cc| Ok(Box::new(CountdownApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
