//! Configuration
//!
//! Typed configuration sections and the figment-based loader.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, AutoSaveConfig, LoggingConfig, NotificationConfig, NotificationProviderKind,
    StorageConfig, StorageProvider,
};
