//! Countdown value types: remaining-time decomposition, display formatting
//! and the controller lifecycle phase.

pub const SECOND_MS: u64 = 1_000;
pub const MINUTE_MS: u64 = SECOND_MS * 60;
pub const HOUR_MS: u64 = MINUTE_MS * 60;
pub const DAY_MS: u64 = HOUR_MS * 24;

/// Time remaining until the target, split into whole display units.
///
/// Sub-second remainders are discarded, so reconstructing the total with
/// [`RemainingDuration::whole_millis`] may fall short of the source value by
/// less than one second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RemainingDuration {
    pub days: u64,
    /// 0..=23
    pub hours: u64,
    /// 0..=59
    pub minutes: u64,
    /// 0..=59
    pub seconds: u64,
}

impl RemainingDuration {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a non-negative millisecond span into days/hours/minutes/seconds.
    ///
    /// Each unit takes the remainder left by the next larger unit, so the
    /// result is a strict hierarchical split of `ms`.
    pub fn from_millis(ms: u64) -> Self {
        let after_days = ms % DAY_MS;
        let after_hours = after_days % HOUR_MS;
        let after_minutes = after_hours % MINUTE_MS;

        Self {
            days: ms / DAY_MS,
            hours: after_days / HOUR_MS,
            minutes: after_hours / MINUTE_MS,
            seconds: after_minutes / SECOND_MS,
        }
    }

    /// Decompose a signed chrono span; negative spans clamp to zero.
    pub fn from_chrono(span: chrono::Duration) -> Self {
        let ms = span.num_milliseconds();
        if ms <= 0 {
            Self::ZERO
        } else {
            Self::from_millis(ms as u64)
        }
    }

    /// Milliseconds covered by the whole units.
    pub fn whole_millis(&self) -> u64 {
        self.days * DAY_MS + self.hours * HOUR_MS + self.minutes * MINUTE_MS + self.seconds * SECOND_MS
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn get(&self, unit: TimeUnit) -> u64 {
        match unit {
            TimeUnit::Days => self.days,
            TimeUnit::Hours => self.hours,
            TimeUnit::Minutes => self.minutes,
            TimeUnit::Seconds => self.seconds,
        }
    }
}

/// One of the four display slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Days => "Days",
            TimeUnit::Hours => "Hours",
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Seconds => "Seconds",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TimeUnit::Days => 0,
            TimeUnit::Hours => 1,
            TimeUnit::Minutes => 2,
            TimeUnit::Seconds => 3,
        }
    }
}

/// Format a unit value as at least two digits, left-padded with zeros.
/// Values of 100 or more are never truncated.
pub fn pad_unit(value: u64) -> String {
    format!("{:02}", value)
}

/// Lifecycle of the countdown controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownPhase {
    /// No valid target has been selected yet
    #[default]
    Idle,
    /// A future target is selected but no tick is registered
    Armed,
    /// A recurring tick is live
    Running,
    /// The target was reached; a new selection is required to start again
    Completed,
}

impl CountdownPhase {
    pub fn description(&self) -> &'static str {
        match self {
            CountdownPhase::Idle => "Pick a future date to begin",
            CountdownPhase::Armed => "Ready to start",
            CountdownPhase::Running => "Counting down",
            CountdownPhase::Completed => "Finished",
        }
    }
}
