use async_trait::async_trait;
use mr_core::notification::{Notification, NotificationLevel};
use mr_core::ports::NotificationPort;
use tracing::{info, warn};

/// Headless notifier: toasts are written to the log instead of a screen.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationPort for TracingNotifier {
    async fn notify(&self, notification: Notification) -> anyhow::Result<()> {
        match notification.level {
            NotificationLevel::Success => {
                info!(target: "toast", text = %notification.message, "success")
            }
            NotificationLevel::Error => {
                warn!(target: "toast", text = %notification.message, "error")
            }
        }
        Ok(())
    }
}
