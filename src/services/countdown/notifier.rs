use crate::models::settings::ToastPosition;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub position: ToastPosition,
}

impl Notice {
    pub fn error(
        title: impl Into<String>,
        message: impl Into<String>,
        position: ToastPosition,
    ) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
            position,
        }
    }

    pub fn success(
        title: impl Into<String>,
        message: impl Into<String>,
        position: ToastPosition,
    ) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            message: message.into(),
            position,
        }
    }
}

/// Receives notices from the countdown. Fire-and-forget: implementations
/// must not fail back into the caller.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Discards every notice. Useful for headless hosts.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, notice: Notice) {
        log::debug!("Dropping notice: {} - {}", notice.title, notice.message);
    }
}
