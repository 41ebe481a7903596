//! Notification configuration types

use crate::constants::DEFAULT_NOTIFICATION_CAPACITY;
use serde::{Deserialize, Serialize};

/// Notification providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationProviderKind {
    /// Structured log event per notification
    Log,
    /// In-process broadcast channel
    Broadcast,
    /// Notifications are dropped
    Null,
}

/// Notification configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationConfig {
    /// Notification provider
    pub provider: NotificationProviderKind,

    /// Channel capacity (broadcast provider)
    pub capacity: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            provider: NotificationProviderKind::Log,
            capacity: DEFAULT_NOTIFICATION_CAPACITY,
        }
    }
}
