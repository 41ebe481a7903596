//! Null state store provider
//!
//! A state store that doesn't persist anything. Used when draft
//! persistence is switched off in configuration.

use async_trait::async_trait;
use autosave_domain::error::Result;
use autosave_domain::ports::StateStoreProvider;

/// Null state store provider that doesn't store anything
///
/// Every save succeeds and every load misses.
#[derive(Debug, Clone, Copy)]
pub struct NullStateStoreProvider;

impl NullStateStoreProvider {
    /// Create a new null state store provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullStateStoreProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateStoreProvider for NullStateStoreProvider {
    async fn save(&self, _key: &str, _data: &[u8]) -> Result<()> {
        Ok(())
    }

    async fn load(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Ok(())
    }

    async fn list_keys(&self, _prefix: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
