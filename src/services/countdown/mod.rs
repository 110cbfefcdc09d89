mod display;
mod notifier;
mod scheduler;
mod timer;

pub use display::{CountdownDisplay, DisplaySurface};
pub use notifier::{Notice, NoticeKind, Notifier, NullNotifier};
pub use scheduler::{TickHandle, TickScheduler};
pub use timer::{
    CountdownConfig, CountdownTimer, SelectionOutcome, TickOutcome, DEFAULT_TICK_PERIOD_MS,
};
