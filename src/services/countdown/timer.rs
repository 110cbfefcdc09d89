//! The countdown controller.
//!
//! `CountdownTimer` owns the target instant and the single tick
//! registration. The host feeds it picker selections and start clicks, and
//! calls [`CountdownTimer::poll`] from its event loop so due ticks run.

use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Local};

use super::display::{CountdownDisplay, DisplaySurface};
use super::notifier::{Notice, Notifier};
use super::scheduler::{TickHandle, TickScheduler};
use crate::models::countdown::{CountdownPhase, RemainingDuration};
use crate::models::settings::{Settings, ToastPosition};
use crate::services::clock::Clock;

pub const DEFAULT_TICK_PERIOD_MS: i64 = 1_000;

const REJECTED_TITLE: &str = "Error";
const REJECTED_MESSAGE: &str = "Illegal operation";
const FINISHED_TITLE: &str = "Timer";
const FINISHED_MESSAGE: &str = "Countdown finished!";

#[derive(Debug, Clone, PartialEq)]
pub struct CountdownConfig {
    pub tick_period: Duration,
    pub toast_position: ToastPosition,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::milliseconds(DEFAULT_TICK_PERIOD_MS),
            toast_position: ToastPosition::TopRight,
        }
    }
}

impl CountdownConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            toast_position: settings.toast_position,
            ..Self::default()
        }
    }
}

/// Result of a date selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Accepted,
    /// The instant was not in the future
    Rejected,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Rendered(RemainingDuration),
    Completed,
}

pub struct CountdownTimer<N: Notifier, D: DisplaySurface = CountdownDisplay> {
    config: CountdownConfig,
    clock: Box<dyn Clock>,
    notifier: N,
    display: D,
    scheduler: TickScheduler,
    target: Option<DateTime<Local>>,
    phase: CountdownPhase,
}

impl<N: Notifier, D: DisplaySurface> CountdownTimer<N, D> {
    pub fn new(config: CountdownConfig, clock: Box<dyn Clock>, notifier: N, mut display: D) -> Self {
        display.set_start_enabled(false);
        Self {
            config,
            clock,
            notifier,
            display,
            scheduler: TickScheduler::new(),
            target: None,
            phase: CountdownPhase::Idle,
        }
    }

    /// Handle an instant chosen in the date picker.
    ///
    /// Only strictly-future instants are accepted. A rejection leaves the
    /// current target untouched, disables the start control and raises an
    /// error notice.
    pub fn on_date_selected(&mut self, selected: DateTime<Local>) -> SelectionOutcome {
        let now = self.clock.now();
        if selected <= now {
            log::warn!("Rejected countdown target {} (now is {})", selected, now);
            self.notifier.notify(Notice::error(
                REJECTED_TITLE,
                REJECTED_MESSAGE,
                self.config.toast_position,
            ));
            self.display.set_start_enabled(false);
            return SelectionOutcome::Rejected;
        }

        self.target = Some(selected);
        self.display.set_start_enabled(true);
        if self.phase != CountdownPhase::Running {
            self.phase = CountdownPhase::Armed;
        }
        log::info!("Countdown target set to {}", selected);
        SelectionOutcome::Accepted
    }

    /// Arm the recurring tick, replacing any live registration.
    ///
    /// Does nothing without a target, or after completion until a new
    /// target has been selected.
    pub fn start(&mut self) -> Option<TickHandle> {
        let Some(target) = self.target else {
            log::debug!("Start ignored: no countdown target selected");
            return None;
        };
        if self.phase == CountdownPhase::Completed {
            log::debug!("Start ignored: countdown already finished");
            return None;
        }

        let handle = self.scheduler.arm(self.clock.now(), self.config.tick_period);
        self.phase = CountdownPhase::Running;
        log::info!("Countdown started towards {} ({:?})", target, handle);
        Some(handle)
    }

    /// Run the tick action if a tick is due.
    pub fn poll(&mut self) -> Option<TickOutcome> {
        let now = self.clock.now();
        self.scheduler.poll(now)?;
        self.run_tick(now)
    }

    /// Time until the next tick, or `None` when not running.
    pub fn next_tick_in(&self) -> Option<StdDuration> {
        self.scheduler.next_due_in(self.clock.now())
    }

    fn run_tick(&mut self, now: DateTime<Local>) -> Option<TickOutcome> {
        let Some(target) = self.target else {
            self.scheduler.cancel();
            return None;
        };

        let diff = target - now;
        if diff <= Duration::zero() {
            self.finish();
            return Some(TickOutcome::Completed);
        }

        let remaining = RemainingDuration::from_chrono(diff);
        self.display.render(&remaining);
        Some(TickOutcome::Rendered(remaining))
    }

    fn finish(&mut self) {
        if let Some(handle) = self.scheduler.cancel() {
            log::debug!("Cancelled tick registration {:?}", handle);
        }
        self.display.render(&RemainingDuration::ZERO);
        self.display.set_start_enabled(false);
        self.phase = CountdownPhase::Completed;
        log::info!("Countdown finished");
        self.notifier.notify(Notice::success(
            FINISHED_TITLE,
            FINISHED_MESSAGE,
            self.config.toast_position,
        ));
    }

    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    pub fn target(&self) -> Option<DateTime<Local>> {
        self.target
    }

    pub fn active_tick(&self) -> Option<TickHandle> {
        self.scheduler.active_handle()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }
}
