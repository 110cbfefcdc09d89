//! Date and time picker window.
//!
//! The picker reports a selection whenever it is closed, either through the
//! Done button or the window's close control.

use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use egui_extras::DatePickerButton;

use crate::models::settings::PickerSettings;
use crate::utils::date::{
    combine_date_with_time, from_12_hour, hour_minute, snap_minute, to_12_hour,
};

#[derive(Debug, Clone)]
pub(super) struct DatePickerState {
    pub(super) is_open: bool,
    date: NaiveDate,
    hour: u32,
    minute: u32,
}

impl DatePickerState {
    pub(super) fn new(now: DateTime<Local>) -> Self {
        let (hour, minute) = hour_minute(&now);
        Self {
            is_open: false,
            date: now.date_naive(),
            hour,
            minute,
        }
    }

    /// Open the picker at the previous target. Without one, `default_to_now`
    /// seeds it from `now`; otherwise the last composed value is kept.
    pub(super) fn open(
        &mut self,
        now: DateTime<Local>,
        previous: Option<DateTime<Local>>,
        settings: &PickerSettings,
    ) {
        if let Some(seed) = previous.or(settings.default_to_now.then_some(now)) {
            let (hour, minute) = hour_minute(&seed);
            self.date = seed.date_naive();
            self.hour = hour;
            self.minute = minute;
        }
        self.minute = snap_minute(self.minute, settings.minute_step());
        self.is_open = true;
    }

    /// The instant currently composed in the picker.
    pub(super) fn selected(&self, settings: &PickerSettings) -> DateTime<Local> {
        let time = if settings.enable_time {
            NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
        } else {
            NaiveTime::MIN
        };
        combine_date_with_time(self.date, time)
    }

    /// Render the picker window. Returns the selection when the picker closes.
    pub(super) fn render(
        &mut self,
        ctx: &egui::Context,
        settings: &PickerSettings,
    ) -> Option<DateTime<Local>> {
        if !self.is_open {
            return None;
        }

        let mut window_open = true;
        let mut done = false;
        egui::Window::new("📅 Select date and time")
            .collapsible(false)
            .resizable(false)
            .auto_sized()
            .open(&mut window_open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Date:");
                    ui.add(DatePickerButton::new(&mut self.date).id_source("countdown_target_date"));
                });

                if settings.enable_time {
                    ui.horizontal(|ui| {
                        ui.label("Time:");
                        self.render_time_selectors(ui, settings);
                    });
                }

                ui.separator();
                if ui.button("Done").clicked() {
                    done = true;
                }
            });

        if done || !window_open {
            self.is_open = false;
            return Some(self.selected(settings));
        }
        None
    }

    fn render_time_selectors(&mut self, ui: &mut egui::Ui, settings: &PickerSettings) {
        if settings.time_24hr {
            egui::ComboBox::from_id_source("countdown_picker_hour")
                .width(60.0)
                .selected_text(format!("{:02}", self.hour))
                .show_ui(ui, |ui| {
                    for h in 0..24 {
                        ui.selectable_value(&mut self.hour, h, format!("{:02}", h));
                    }
                });
        } else {
            let (mut hour_12, mut is_pm) = to_12_hour(self.hour);
            egui::ComboBox::from_id_source("countdown_picker_hour")
                .width(60.0)
                .selected_text(format!("{:02}", hour_12))
                .show_ui(ui, |ui| {
                    for h in 1..=12 {
                        ui.selectable_value(&mut hour_12, h, format!("{:02}", h));
                    }
                });
            ui.selectable_value(&mut is_pm, false, "AM");
            ui.selectable_value(&mut is_pm, true, "PM");
            self.hour = from_12_hour(hour_12, is_pm);
        }

        ui.label(":");

        egui::ComboBox::from_id_source("countdown_picker_minute")
            .width(60.0)
            .selected_text(format!("{:02}", self.minute))
            .show_ui(ui, |ui| {
                for m in (0..60).step_by(settings.minute_step() as usize) {
                    ui.selectable_value(&mut self.minute, m, format!("{:02}", m));
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 10, 12, 7, 30).unwrap()
    }

    #[test]
    fn opens_at_now_with_seconds_dropped() {
        let mut picker = DatePickerState::new(noon());
        picker.open(noon(), None, &PickerSettings::default());

        let selected = picker.selected(&PickerSettings::default());
        assert!(picker.is_open);
        assert_eq!((selected.hour(), selected.minute(), selected.second()), (12, 7, 0));
    }

    #[test]
    fn reopen_keeps_previous_target() {
        let settings = PickerSettings::default();
        let previous = noon() + chrono::Duration::days(3);
        let mut picker = DatePickerState::new(noon());
        picker.open(noon(), Some(previous), &settings);

        let selected = picker.selected(&settings);
        assert_eq!(selected.date_naive(), previous.date_naive());
        assert_eq!((selected.hour(), selected.minute()), (12, 7));
    }

    #[test]
    fn without_default_to_now_keeps_last_composed_value() {
        let settings = PickerSettings {
            default_to_now: false,
            ..PickerSettings::default()
        };
        let mut picker = DatePickerState::new(noon());
        picker.open(noon() + chrono::Duration::days(9), None, &settings);

        assert_eq!(picker.selected(&settings).date_naive(), noon().date_naive());
    }

    #[test]
    fn reopens_at_previous_target_with_minute_step() {
        let settings = PickerSettings {
            default_to_now: false,
            minute_increment: 5,
            ..PickerSettings::default()
        };
        let previous = noon() + chrono::Duration::days(1);
        let mut picker = DatePickerState::new(noon());
        picker.open(noon(), Some(previous), &settings);

        let selected = picker.selected(&settings);
        assert_eq!(selected.date_naive(), previous.date_naive());
        assert_eq!(selected.minute(), 5);
    }

    #[test]
    fn date_only_picker_selects_midnight() {
        let settings = PickerSettings {
            enable_time: false,
            ..PickerSettings::default()
        };
        let mut picker = DatePickerState::new(noon());
        picker.open(noon(), None, &settings);

        let selected = picker.selected(&settings);
        assert_eq!((selected.hour(), selected.minute()), (0, 0));
    }
}
