use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Local};

/// Identifies one recurring-tick registration. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickHandle(pub u64);

#[derive(Debug, Clone)]
struct Registration {
    handle: TickHandle,
    period: Duration,
    next_due_at: DateTime<Local>,
}

/// Cancellable recurring tick driven by the host event loop.
///
/// Holds at most one live registration: arming always replaces whatever
/// was registered before.
#[derive(Debug, Default)]
pub struct TickScheduler {
    active: Option<Registration>,
    last_handle: u64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any live registration and register a new one whose first
    /// tick is due one `period` after `now`.
    pub fn arm(&mut self, now: DateTime<Local>, period: Duration) -> TickHandle {
        if let Some(previous) = self.active.take() {
            log::debug!("Replacing tick registration {:?}", previous.handle);
        }

        let period = period.max(Duration::milliseconds(1));
        self.last_handle += 1;
        let handle = TickHandle(self.last_handle);
        self.active = Some(Registration {
            handle,
            period,
            next_due_at: now + period,
        });
        handle
    }

    /// Drop the live registration. Returns the cancelled handle, if any.
    pub fn cancel(&mut self) -> Option<TickHandle> {
        self.active.take().map(|registration| registration.handle)
    }

    pub fn active_handle(&self) -> Option<TickHandle> {
        self.active.as_ref().map(|registration| registration.handle)
    }

    /// Fire the live registration if it is due at `now`.
    ///
    /// At most one tick fires per call. Periods missed while the host was
    /// busy are skipped; the next tick lands on the first period boundary
    /// after `now`.
    pub fn poll(&mut self, now: DateTime<Local>) -> Option<TickHandle> {
        let registration = self.active.as_mut()?;
        if now < registration.next_due_at {
            return None;
        }

        let period_ms = registration.period.num_milliseconds();
        let overdue_ms = (now - registration.next_due_at).num_milliseconds();
        let periods = overdue_ms / period_ms + 1;
        registration.next_due_at += Duration::milliseconds(period_ms * periods);

        Some(registration.handle)
    }

    /// Wait until the next tick, or `None` when nothing is registered.
    pub fn next_due_in(&self, now: DateTime<Local>) -> Option<StdDuration> {
        self.active.as_ref().map(|registration| {
            let delta = registration.next_due_at - now;
            if delta <= Duration::zero() {
                StdDuration::from_secs(0)
            } else {
                delta.to_std().unwrap_or_else(|_| StdDuration::from_secs(0))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 2, 27, 10, 0, 0).unwrap()
    }

    #[test]
    fn fires_once_per_period() {
        let mut scheduler = TickScheduler::new();
        let now = start();
        let handle = scheduler.arm(now, Duration::seconds(1));

        assert_eq!(scheduler.poll(now + Duration::milliseconds(999)), None);
        assert_eq!(scheduler.poll(now + Duration::seconds(1)), Some(handle));
        assert_eq!(scheduler.poll(now + Duration::milliseconds(1500)), None);
        assert_eq!(scheduler.poll(now + Duration::seconds(2)), Some(handle));
    }

    #[test]
    fn rearming_replaces_previous_registration() {
        let mut scheduler = TickScheduler::new();
        let now = start();
        let first = scheduler.arm(now, Duration::seconds(1));
        let second = scheduler.arm(now + Duration::milliseconds(400), Duration::seconds(1));

        assert_ne!(first, second);
        assert_eq!(scheduler.active_handle(), Some(second));
        // The first registration would have been due here; the second is not yet.
        assert_eq!(scheduler.poll(now + Duration::seconds(1)), None);
        assert_eq!(
            scheduler.poll(now + Duration::milliseconds(1400)),
            Some(second)
        );
    }

    #[test]
    fn missed_periods_are_skipped_not_burst() {
        let mut scheduler = TickScheduler::new();
        let now = start();
        let handle = scheduler.arm(now, Duration::seconds(1));

        let late = now + Duration::milliseconds(3500);
        assert_eq!(scheduler.poll(late), Some(handle));
        assert_eq!(scheduler.poll(late), None);
        assert_eq!(
            scheduler.next_due_in(late),
            Some(StdDuration::from_millis(500))
        );
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut scheduler = TickScheduler::new();
        assert_eq!(scheduler.cancel(), None);

        let handle = scheduler.arm(start(), Duration::seconds(1));
        assert_eq!(scheduler.cancel(), Some(handle));
        assert_eq!(scheduler.cancel(), None);
        assert_eq!(scheduler.active_handle(), None);
        assert_eq!(scheduler.poll(start() + Duration::seconds(5)), None);
        assert_eq!(scheduler.next_due_in(start()), None);
    }
}
