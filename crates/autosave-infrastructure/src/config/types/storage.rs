//! Storage configuration types

use crate::constants::{DEFAULT_CONFIG_DIR, DEFAULT_STORAGE_DIR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// State store providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    /// In-process map, lost on restart
    Memory,
    /// One file per draft, survives restarts
    Filesystem,
    /// Persistence disabled
    Null,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// State store provider
    pub provider: StorageProvider,

    /// Directory for the filesystem provider
    pub path: Option<PathBuf>,

    /// Reject draft values larger than this many bytes
    pub max_value_bytes: Option<usize>,
}

impl StorageConfig {
    /// Directory the filesystem provider writes to
    ///
    /// Falls back to `<data_dir>/autosave/drafts`, or `./.autosave/drafts`
    /// when the platform has no data directory.
    pub fn resolved_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }
        dirs::data_dir().map_or_else(
            || {
                PathBuf::from(format!(".{DEFAULT_CONFIG_DIR}")).join(DEFAULT_STORAGE_DIR)
            },
            |dir| dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_STORAGE_DIR),
        )
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: StorageProvider::Filesystem,
            path: None,
            max_value_bytes: None,
        }
    }
}
