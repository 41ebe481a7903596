//! Auto-save configuration types

use autosave_domain::constants::{
    AUTOSAVE_DEFAULT_ENABLED, AUTOSAVE_DEFAULT_INTERVAL_MS, AUTOSAVE_KEY_PREFIX,
    RECOVERY_NOTIFICATION_DESCRIPTION, RECOVERY_NOTIFICATION_TITLE,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Auto-save manager configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoSaveConfig {
    /// Default for attaches that don't set `enabled`
    pub enabled: bool,

    /// Default quiet period before a changed payload is persisted
    pub interval_ms: u64,

    /// Prefix namespacing draft keys in the storage medium
    pub key_prefix: String,

    /// Title of the recovery notification
    pub recovery_title: String,

    /// Description of the recovery notification
    pub recovery_description: String,
}

impl AutoSaveConfig {
    /// Default debounce interval as a `Duration`
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for AutoSaveConfig {
    fn default() -> Self {
        Self {
            enabled: AUTOSAVE_DEFAULT_ENABLED,
            interval_ms: AUTOSAVE_DEFAULT_INTERVAL_MS,
            key_prefix: AUTOSAVE_KEY_PREFIX.to_string(),
            recovery_title: RECOVERY_NOTIFICATION_TITLE.to_string(),
            recovery_description: RECOVERY_NOTIFICATION_DESCRIPTION.to_string(),
        }
    }
}
