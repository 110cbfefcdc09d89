use std::time::Duration;

use super::toast::ToastManager;
use crate::models::settings::Settings;
use crate::services::countdown::{Notice, NoticeKind, Notifier};
use crate::services::notification::NotificationService;

/// Routes countdown notices to in-window toasts, and completion notices
/// to the desktop as well when enabled.
pub(super) struct AppNotifier {
    toasts: ToastManager,
    system: NotificationService,
}

impl AppNotifier {
    pub(super) fn from_settings(settings: &Settings) -> Self {
        Self {
            toasts: ToastManager::new(Duration::from_secs(settings.toast_duration_secs.max(1))),
            system: NotificationService::new(settings.use_system_notifications),
        }
    }

    pub(super) fn toasts_mut(&mut self) -> &mut ToastManager {
        &mut self.toasts
    }
}

impl Notifier for AppNotifier {
    fn notify(&mut self, notice: Notice) {
        if notice.kind == NoticeKind::Success && self.system.is_enabled() {
            if let Err(e) = self.system.show(&notice) {
                log::warn!("Failed to show system notification: {}", e);
            } else {
                log::info!("Showed system notification: {}", notice.message);
            }
        }

        self.toasts.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::ToastPosition;

    fn quiet_notifier() -> AppNotifier {
        AppNotifier::from_settings(&Settings {
            use_system_notifications: false,
            ..Settings::default()
        })
    }

    #[test]
    fn every_notice_becomes_a_toast() {
        let mut notifier = quiet_notifier();

        notifier.notify(Notice::error("Error", "Illegal operation", ToastPosition::TopRight));
        notifier.notify(Notice::success("Timer", "Countdown finished!", ToastPosition::TopRight));

        assert_eq!(
            notifier.toasts_mut().kinds(),
            vec![NoticeKind::Error, NoticeKind::Success]
        );
    }

    #[test]
    fn desktop_notifications_follow_settings() {
        assert!(!quiet_notifier().system.is_enabled());
        assert!(AppNotifier::from_settings(&Settings::default()).system.is_enabled());
    }
}
