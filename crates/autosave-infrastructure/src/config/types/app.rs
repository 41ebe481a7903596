//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::autosave::AutoSaveConfig;
pub use super::logging::LoggingConfig;
pub use super::notifications::{NotificationConfig, NotificationProviderKind};
pub use super::storage::{StorageConfig, StorageProvider};

/// Root configuration
///
/// Unknown top-level sections are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Auto-save manager defaults
    #[serde(default)]
    pub autosave: AutoSaveConfig,

    /// State store selection
    #[serde(default)]
    pub storage: StorageConfig,

    /// Notification sink selection
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}
