//! Provider Factory
//!
//! Creates state store and notification providers from configuration and
//! wires them into a [`DraftAutoSaveManager`].
//!
//! All provider implementations come from `autosave-providers`; this module
//! only handles selection and wiring.

use std::sync::Arc;

use autosave_domain::ports::{NotificationProvider, StateStoreProvider};
use autosave_providers::notification::{
    LogNotificationProvider, NullNotificationProvider, TokioNotificationProvider,
};
use autosave_providers::state_store::{
    FileSystemStateStoreProvider, InMemoryStateStoreProvider, NullStateStoreProvider,
};
use tracing::debug;

use crate::autosave::DraftAutoSaveManager;
use crate::config::{
    AppConfig, NotificationConfig, NotificationProviderKind, StorageConfig, StorageProvider,
};

/// Factory for creating state store providers
pub struct StateStoreProviderFactory;

impl StateStoreProviderFactory {
    /// Create a state store provider based on configuration
    pub fn create(config: &StorageConfig) -> Arc<dyn StateStoreProvider> {
        match config.provider {
            StorageProvider::Null => Arc::new(NullStateStoreProvider::new()),
            StorageProvider::Memory => Arc::new(match config.max_value_bytes {
                Some(max) => InMemoryStateStoreProvider::with_max_value_bytes(max),
                None => InMemoryStateStoreProvider::new(),
            }),
            StorageProvider::Filesystem => {
                let path = config.resolved_path();
                debug!("Filesystem draft store at {}", path.display());
                let store = FileSystemStateStoreProvider::new(path);
                Arc::new(match config.max_value_bytes {
                    Some(max) => store.with_max_value_bytes(max),
                    None => store,
                })
            }
        }
    }
}

/// Notification sink plus, for the broadcast provider, a handle to subscribe with
#[derive(Clone)]
pub struct NotificationHandles {
    /// Sink handed to the manager
    pub provider: Arc<dyn NotificationProvider>,
    /// Set when the broadcast provider is selected
    pub broadcast: Option<TokioNotificationProvider>,
}

/// Factory for creating notification providers
pub struct NotificationProviderFactory;

impl NotificationProviderFactory {
    /// Create a notification provider based on configuration
    pub fn create(config: &NotificationConfig) -> NotificationHandles {
        match config.provider {
            NotificationProviderKind::Null => NotificationHandles {
                provider: Arc::new(NullNotificationProvider::new()),
                broadcast: None,
            },
            NotificationProviderKind::Log => NotificationHandles {
                provider: Arc::new(LogNotificationProvider::new()),
                broadcast: None,
            },
            NotificationProviderKind::Broadcast => {
                let broadcast = TokioNotificationProvider::with_capacity(config.capacity);
                NotificationHandles {
                    provider: Arc::new(broadcast.clone()),
                    broadcast: Some(broadcast),
                }
            }
        }
    }
}

/// Manager wired from configuration, with its notification handles
pub struct AutoSaveComponents {
    pub manager: DraftAutoSaveManager,
    pub notifications: NotificationHandles,
}

/// Build a manager from the full application configuration
pub fn build_manager(config: &AppConfig) -> AutoSaveComponents {
    let store = StateStoreProviderFactory::create(&config.storage);
    let notifications = NotificationProviderFactory::create(&config.notifications);
    let manager = DraftAutoSaveManager::new(
        store,
        Arc::clone(&notifications.provider),
        config.autosave.clone(),
    );
    AutoSaveComponents {
        manager,
        notifications,
    }
}
