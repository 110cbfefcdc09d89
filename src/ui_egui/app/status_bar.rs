use super::CountdownApp;

impl CountdownApp {
    pub(super) fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.timer.phase().description());
                if let Some(wait) = self.timer.next_tick_in() {
                    ui.separator();
                    ui.weak(format!("next tick in {} ms", wait.as_millis()));
                }
            });
        });
    }
}
