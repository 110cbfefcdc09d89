use anyhow::Result;
use notify_rust::{Notification, Timeout};

use crate::services::countdown::Notice;

/// Service for displaying desktop notifications
pub struct NotificationService {
    enabled: bool,
}

impl NotificationService {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if notifications are enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Show a desktop notification for a countdown notice
    pub fn show(&self, notice: &Notice) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        Notification::new()
            .summary(&notice.title)
            .body(&notice.message)
            .timeout(Timeout::Milliseconds(5000))
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}
