// Test fixtures - reusable test data
// Provides a fixed clock origin and a notifier that records what it receives

#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use countdown_timer::services::clock::ManualClock;
use countdown_timer::services::countdown::{
    CountdownConfig, CountdownDisplay, CountdownTimer, Notice, Notifier,
};

/// Sample instants for testing
pub mod dates {
    use super::*;

    /// Returns Mar 14, 2026 at 09:30:00 local time
    pub fn origin() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }
}

/// Keeps every notice for later inspection
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

pub type TestTimer = CountdownTimer<RecordingNotifier, CountdownDisplay>;

/// A timer on a manual clock starting at [`dates::origin`]
pub fn timer_at_origin() -> (TestTimer, ManualClock) {
    let clock = ManualClock::new(dates::origin());
    let timer = CountdownTimer::new(
        CountdownConfig::default(),
        Box::new(clock.clone()),
        RecordingNotifier::default(),
        CountdownDisplay::new(),
    );
    (timer, clock)
}
