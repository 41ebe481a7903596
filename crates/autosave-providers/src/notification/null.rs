//! Null notification provider

use async_trait::async_trait;
use autosave_domain::error::Result;
use autosave_domain::ports::NotificationProvider;
use autosave_domain::value_objects::Notification;

/// Notification provider that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotificationProvider;

impl NullNotificationProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationProvider for NullNotificationProvider {
    async fn notify(&self, _notification: Notification) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
