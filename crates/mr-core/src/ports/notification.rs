use async_trait::async_trait;

use crate::notification::Notification;

/// Displays transient, dismissible notifications to the resident.
#[async_trait]
pub trait NotificationPort: Send + Sync {
    async fn notify(&self, notification: Notification) -> anyhow::Result<()>;
}
