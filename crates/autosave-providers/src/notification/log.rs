//! Tracing-backed notification provider
//!
//! Renders notifications as structured log events. This is the default sink
//! for headless use (the CLI, services without a UI).

use async_trait::async_trait;
use autosave_domain::error::Result;
use autosave_domain::ports::NotificationProvider;
use autosave_domain::value_objects::Notification;
use tracing::info;

/// Notification provider that logs every notification at `info`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotificationProvider;

impl LogNotificationProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationProvider for LogNotificationProvider {
    async fn notify(&self, notification: Notification) -> Result<()> {
        info!(
            title = %notification.title,
            key = notification.key.as_deref().unwrap_or("-"),
            "{}",
            notification.description
        );
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "log"
    }
}
