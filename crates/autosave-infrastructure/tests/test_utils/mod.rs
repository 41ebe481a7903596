//! Shared test doubles for the auto-save manager

use async_trait::async_trait;
use autosave_domain::error::{Error, Result};
use autosave_domain::ports::StateStoreProvider;
use autosave_infrastructure::DraftAutoSaveManager;
use autosave_infrastructure::config::AutoSaveConfig;
use autosave_providers::notification::TokioNotificationProvider;
use autosave_providers::state_store::InMemoryStateStoreProvider;
use std::sync::{Arc, Mutex};

/// In-memory store that records every successful write in order
#[derive(Clone, Default)]
pub struct RecordingStateStore {
    inner: InMemoryStateStoreProvider,
    writes: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(storage key, value)` written so far
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().expect("writes lock").clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().expect("writes lock").len()
    }

    /// Current stored value as a string
    pub fn stored(&self, storage_key: &str) -> Option<String> {
        self.inner.get_string(storage_key)
    }
}

#[async_trait]
impl StateStoreProvider for RecordingStateStore {
    async fn save(&self, key: &str, data: &[u8]) -> Result<()> {
        self.inner.save(key, data).await?;
        self.writes.lock().expect("writes lock").push((
            key.to_string(),
            String::from_utf8_lossy(data).into_owned(),
        ));
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.inner.load(key).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.inner.delete(key).await
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        self.inner.list_keys(prefix).await
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}

/// Store whose medium is gone: every operation fails
#[derive(Clone, Copy, Default)]
pub struct UnavailableStateStore;

#[async_trait]
impl StateStoreProvider for UnavailableStateStore {
    async fn save(&self, _key: &str, _data: &[u8]) -> Result<()> {
        Err(Error::storage("quota exceeded"))
    }

    async fn load(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Err(Error::storage("storage disabled"))
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Err(Error::storage("storage disabled"))
    }

    async fn list_keys(&self, _prefix: &str) -> Result<Vec<String>> {
        Err(Error::storage("storage disabled"))
    }

    fn provider_name(&self) -> &str {
        "unavailable"
    }
}

/// Manager over a recording store and a broadcast sink
pub fn recording_manager() -> (DraftAutoSaveManager, RecordingStateStore, TokioNotificationProvider) {
    let store = RecordingStateStore::new();
    let notifications = TokioNotificationProvider::new();
    let manager = DraftAutoSaveManager::new(
        Arc::new(store.clone()),
        Arc::new(notifications.clone()),
        AutoSaveConfig::default(),
    );
    (manager, store, notifications)
}
