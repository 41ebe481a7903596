//! In-memory state store provider
//!
//! Concurrent key-value store backed by `DashMap`. Nothing survives a
//! process restart, which makes it the store of choice for tests and for
//! single-session use.
//!
//! ## Example
//!
//! ```ignore
//! use autosave_providers::state_store::InMemoryStateStoreProvider;
//!
//! let store = InMemoryStateStoreProvider::with_max_value_bytes(5 * 1024 * 1024);
//! ```

use async_trait::async_trait;
use autosave_domain::error::{Error, Result};
use autosave_domain::ports::StateStoreProvider;
use dashmap::DashMap;
use std::sync::Arc;

/// DashMap-based in-memory state store
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct InMemoryStateStoreProvider {
    entries: Arc<DashMap<String, Vec<u8>>>,
    max_value_bytes: Option<usize>,
}

impl InMemoryStateStoreProvider {
    /// Create an unbounded in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects values larger than `max_value_bytes`
    pub fn with_max_value_bytes(max_value_bytes: usize) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            max_value_bytes: Some(max_value_bytes),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read a stored value as UTF-8 without going through the port
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.entries
            .get(key)
            .and_then(|value| String::from_utf8(value.clone()).ok())
    }
}

#[async_trait]
impl StateStoreProvider for InMemoryStateStoreProvider {
    async fn save(&self, key: &str, data: &[u8]) -> Result<()> {
        if let Some(max) = self.max_value_bytes {
            if data.len() > max {
                return Err(Error::storage(format!(
                    "Quota exceeded: value size {} exceeds maximum size {}",
                    data.len(),
                    max
                )));
            }
        }

        self.entries.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).map(|value| value.clone()))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect();
        keys.sort();
        Ok(keys)
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

impl std::fmt::Debug for InMemoryStateStoreProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStateStoreProvider")
            .field("entries", &self.entries.len())
            .field("max_value_bytes", &self.max_value_bytes)
            .finish()
    }
}
