//! Filesystem state store provider
//!
//! Durable key-value store keeping one file per key inside a base
//! directory. File names are the hex encoding of the key, so any key is a
//! valid file name and the key can be recovered when listing.
//!
//! A key whose hex name would not fit in a file name is stored under the
//! SHA-256 digest of the key instead. Those files start with the hex key
//! on its own line, followed by the value.
//!
//! Writes land in a temporary file first and are renamed into place, which
//! keeps every single-key update atomic on POSIX filesystems.

use crate::constants::{
    FILESYSTEM_MAX_FILE_NAME_BYTES, FILESYSTEM_STORE_EXTENSION, FILESYSTEM_STORE_HASHED_EXTENSION,
    FILESYSTEM_STORE_TMP_EXTENSION,
};
use async_trait::async_trait;
use autosave_domain::error::{Error, Result};
use autosave_domain::ports::StateStoreProvider;
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const KEY_HEADER_END: u8 = b'\n';

/// Where a key lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
struct EntryLocation {
    path: PathBuf,
    tmp: PathBuf,
    /// File is named by digest and carries its key inline
    hashed: bool,
}

/// Filesystem-backed state store
#[derive(Debug, Clone)]
pub struct FileSystemStateStoreProvider {
    base_path: PathBuf,
    max_value_bytes: Option<usize>,
}

impl FileSystemStateStoreProvider {
    /// Create a store rooted at `base_path`
    ///
    /// The directory is created lazily on the first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            max_value_bytes: None,
        }
    }

    /// Reject values larger than `max_value_bytes`
    pub fn with_max_value_bytes(mut self, max_value_bytes: usize) -> Self {
        self.max_value_bytes = Some(max_value_bytes);
        self
    }

    /// Directory holding the stored files
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn locate(&self, key: &str) -> EntryLocation {
        let encoded = hex::encode(key);
        if encoded.len() + FILESYSTEM_STORE_EXTENSION.len() < FILESYSTEM_MAX_FILE_NAME_BYTES {
            return EntryLocation {
                path: self
                    .base_path
                    .join(format!("{encoded}.{FILESYSTEM_STORE_EXTENSION}")),
                tmp: self
                    .base_path
                    .join(format!("{encoded}.{FILESYSTEM_STORE_TMP_EXTENSION}")),
                hashed: false,
            };
        }

        let digest = hex::encode(Sha256::digest(key.as_bytes()));
        EntryLocation {
            path: self
                .base_path
                .join(format!("{digest}.{FILESYSTEM_STORE_HASHED_EXTENSION}")),
            tmp: self.base_path.join(format!(
                "{digest}.{FILESYSTEM_STORE_HASHED_EXTENSION}.{FILESYSTEM_STORE_TMP_EXTENSION}"
            )),
            hashed: true,
        }
    }

    fn key_from_path(path: &Path) -> Option<String> {
        if path.extension()? != FILESYSTEM_STORE_EXTENSION {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        let bytes = hex::decode(stem).ok()?;
        String::from_utf8(bytes).ok()
    }

    /// Split a digest-named file into its key and value
    fn split_hashed(mut contents: Vec<u8>) -> Option<(String, Vec<u8>)> {
        let header_end = contents.iter().position(|b| *b == KEY_HEADER_END)?;
        let key = String::from_utf8(hex::decode(&contents[..header_end]).ok()?).ok()?;
        let value = contents.split_off(header_end + 1);
        Some((key, value))
    }

    async fn read_file(path: &Path, key: &str) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::storage_with_source(
                format!("Failed to read key {key}"),
                e,
            )),
        }
    }
}

#[async_trait]
impl StateStoreProvider for FileSystemStateStoreProvider {
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

        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| {
                Error::storage_with_source(
                    format!("Failed to create store directory {}", self.base_path.display()),
                    e,
                )
            })?;

        let location = self.locate(key);
        let write_result = if location.hashed {
            let header = hex::encode(key);
            let mut contents = Vec::with_capacity(header.len() + 1 + data.len());
            contents.extend_from_slice(header.as_bytes());
            contents.push(KEY_HEADER_END);
            contents.extend_from_slice(data);
            tokio::fs::write(&location.tmp, contents).await
        } else {
            tokio::fs::write(&location.tmp, data).await
        };
        write_result
            .map_err(|e| Error::storage_with_source(format!("Failed to write key {key}"), e))?;
        tokio::fs::rename(&location.tmp, &location.path)
            .await
            .map_err(|e| Error::storage_with_source(format!("Failed to commit key {key}"), e))?;

        debug!(
            key = key,
            bytes = data.len(),
            hashed = location.hashed,
            "Stored value on disk"
        );
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let location = self.locate(key);
        let Some(contents) = Self::read_file(&location.path, key).await? else {
            return Ok(None);
        };
        if !location.hashed {
            return Ok(Some(contents));
        }

        match Self::split_hashed(contents) {
            Some((stored_key, value)) if stored_key == key => Ok(Some(value)),
            Some(_) => {
                debug!(key = key, "Digest file belongs to another key");
                Ok(None)
            }
            None => Err(Error::storage(format!(
                "Stored file for key {key} has no key header"
            ))),
        }
    }

    async fn delete(&self, key: &str) -> Result<()> {
        match tokio::fs::remove_file(self.locate(key).path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::storage_with_source(
                format!("Failed to delete key {key}"),
                e,
            )),
        }
    }

    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let mut entries = match tokio::fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::storage_with_source(
                    format!("Failed to list {}", self.base_path.display()),
                    e,
                ));
            }
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::storage_with_source("Failed to read store directory", e))?
        {
            let path = entry.path();
            let key = match path.extension().and_then(|ext| ext.to_str()) {
                Some(FILESYSTEM_STORE_EXTENSION) => Self::key_from_path(&path),
                Some(FILESYSTEM_STORE_HASHED_EXTENSION) => {
                    let name = path.display().to_string();
                    Self::read_file(&path, &name)
                        .await?
                        .and_then(Self::split_hashed)
                        .map(|(key, _)| key)
                }
                _ => None,
            };
            if let Some(key) = key.filter(|key| key.starts_with(prefix)) {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}
