mod countdown_panel;
mod date_picker;
mod lifecycle;
mod notifications;
mod status_bar;
mod toast;

use self::date_picker::DatePickerState;
use self::notifications::AppNotifier;
use crate::models::settings::Settings;
use crate::services::countdown::CountdownTimer;

pub const MIN_ROOT_WIDTH: f32 = 320.0;
pub const MIN_ROOT_HEIGHT: f32 = 220.0;

pub struct CountdownApp {
    /// Preferences loaded at startup
    settings: Settings,
    /// The countdown controller and its collaborators
    timer: CountdownTimer<AppNotifier>,
    date_picker: DatePickerState,
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
