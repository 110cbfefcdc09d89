use egui::RichText;

use super::CountdownApp;
use crate::models::countdown::TimeUnit;

const DIGIT_SIZE: f32 = 40.0;

impl CountdownApp {
    /// Main panel: target selection, the four countdown slots and the Start control.
    pub(super) fn render_countdown_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui
                        .button("📅 Pick date")
                        .on_hover_text("Choose when the countdown ends")
                        .clicked()
                    {
                        let now = self.timer.now();
                        let previous = self.timer.target();
                        self.date_picker.open(now, previous, &self.settings.picker);
                    }

                    let target_text = match self.timer.target() {
                        Some(target) => target.format("%Y-%m-%d %H:%M").to_string(),
                        None => "No date selected".to_string(),
                    };
                    ui.label(target_text);
                });

                ui.add_space(12.0);
                self.render_slots(ui);
                ui.add_space(12.0);

                let start_enabled = self.timer.display().start_enabled();
                if ui
                    .add_enabled(start_enabled, egui::Button::new("Start"))
                    .clicked()
                {
                    self.timer.start();
                }
            });
        });
    }

    fn render_slots(&self, ui: &mut egui::Ui) {
        let display = self.timer.display();
        egui::Grid::new("countdown_slots")
            .num_columns(TimeUnit::ALL.len())
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                for unit in TimeUnit::ALL {
                    ui.label(RichText::new(display.slot(unit)).size(DIGIT_SIZE).strong().monospace());
                }
                ui.end_row();
                for unit in TimeUnit::ALL {
                    ui.label(RichText::new(unit.label()).small());
                }
                ui.end_row();
            });
    }
}
