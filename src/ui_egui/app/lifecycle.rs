use super::date_picker::DatePickerState;
use super::notifications::AppNotifier;
use super::CountdownApp;
use crate::models::settings::{Settings, ThemePreference};
use crate::services::clock::{Clock, SystemClock};
use crate::services::countdown::{CountdownConfig, CountdownDisplay, CountdownTimer, TickOutcome};

impl CountdownApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        log::info!(
            "Loaded settings: toast_position={:?}, system_notifications={}",
            settings.toast_position,
            settings.use_system_notifications
        );

        let clock = SystemClock;
        let date_picker = DatePickerState::new(clock.now());
        let timer = CountdownTimer::new(
            CountdownConfig::from_settings(&settings),
            Box::new(clock),
            AppNotifier::from_settings(&settings),
            CountdownDisplay::new(),
        );

        let app = Self {
            settings,
            timer,
            date_picker,
        };
        app.apply_theme(&cc.egui_ctx);
        app
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        // With the system preference, ask the desktop for its mode
        let dark = match self.settings.theme {
            ThemePreference::Dark => true,
            ThemePreference::Light => false,
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => true,
                dark_light::Mode::Light => false,
                dark_light::Mode::Default => ctx.style().visuals.dark_mode,
            },
        };

        ctx.set_visuals(if dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(outcome) = self.timer.poll() {
            match outcome {
                TickOutcome::Rendered(remaining) => log::trace!("Tick: {:?}", remaining),
                TickOutcome::Completed => log::debug!("Final tick processed"),
            }
        }

        self.render_status_bar(ctx);
        self.render_countdown_panel(ctx);

        if let Some(selected) = self.date_picker.render(ctx, &self.settings.picker) {
            self.timer.on_date_selected(selected);
        }

        let is_dark = ctx.style().visuals.dark_mode;
        self.timer.notifier_mut().toasts_mut().render(ctx, is_dark);

        // Wake up for the next tick even without user input
        if let Some(wait) = self.timer.next_tick_in() {
            ctx.request_repaint_after(wait);
        }
    }
}
