// Settings module
// Persisted application preferences, stored as TOML by SettingsService

use serde::{Deserialize, Serialize};

/// Corner of the window where toasts are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl ToastPosition {
    pub fn is_top(&self) -> bool {
        matches!(self, ToastPosition::TopRight | ToastPosition::TopLeft)
    }

    pub fn is_right(&self) -> bool {
        matches!(self, ToastPosition::TopRight | ToastPosition::BottomRight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

/// Behaviour of the date/time picker window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// Show hour/minute selectors next to the calendar
    pub enable_time: bool,
    /// 24-hour clock; otherwise 12-hour with AM/PM
    pub time_24hr: bool,
    /// Open the picker at the current moment rather than the last selection
    pub default_to_now: bool,
    /// Step between selectable minutes
    pub minute_increment: u32,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            enable_time: true,
            time_24hr: true,
            default_to_now: true,
            minute_increment: 1,
        }
    }
}

impl PickerSettings {
    /// Minute step clamped to a usable range.
    pub fn minute_step(&self) -> u32 {
        self.minute_increment.clamp(1, 30)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemePreference,
    pub toast_position: ToastPosition,
    /// Seconds a toast stays on screen
    pub toast_duration_secs: u64,
    /// Also raise a desktop notification when the countdown finishes
    pub use_system_notifications: bool,
    pub window_width: f32,
    pub window_height: f32,
    pub picker: PickerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            toast_position: ToastPosition::TopRight,
            toast_duration_secs: 5,
            use_system_notifications: true,
            window_width: 480.0,
            window_height: 320.0,
            picker: PickerSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("toast_position = \"bottom_left\"").unwrap();
        assert_eq!(settings.toast_position, ToastPosition::BottomLeft);
        assert_eq!(settings.picker, PickerSettings::default());
        assert!(settings.use_system_notifications);
    }

    #[test]
    fn minute_step_is_clamped() {
        let picker = PickerSettings {
            minute_increment: 0,
            ..PickerSettings::default()
        };
        assert_eq!(picker.minute_step(), 1);
    }
}
