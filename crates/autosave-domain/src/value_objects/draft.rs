//! Draft value objects
//!
//! A draft is identified by a caller-supplied [`DraftKey`]. The key is
//! namespaced into a [`StorageKey`] before it reaches the storage medium, and
//! the payload is encoded into a [`SerializedPayload`] that doubles as the
//! change-detection token.

use crate::error::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// Logical draft identifier (e.g. a form name or entity id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DraftKey(String);

impl DraftKey {
    /// Create a draft key, rejecting empty identifiers
    pub fn new<S: Into<String>>(key: S) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::invalid_argument("Draft key cannot be empty"));
        }
        Ok(Self(key))
    }

    /// The raw key as supplied by the caller
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the namespaced key used by the storage medium
    pub fn storage_key(&self, prefix: &str) -> StorageKey {
        StorageKey(format!("{prefix}{}", self.0))
    }
}

impl fmt::Display for DraftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for DraftKey {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

/// Key under which a draft is physically stored (`prefix + draft key`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recover the draft key from a storage key carrying `prefix`
    pub fn strip_prefix(storage_key: &str, prefix: &str) -> Option<DraftKey> {
        storage_key
            .strip_prefix(prefix)
            .and_then(|key| DraftKey::new(key).ok())
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical JSON encoding of a draft payload
///
/// Encoding goes through [`serde_json::Value`], whose object map is ordered,
/// so two payloads with the same content always produce the same string
/// regardless of the field or insertion order of the source type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerializedPayload(String);

impl SerializedPayload {
    /// Encode a payload canonically
    pub fn encode<T: Serialize + ?Sized>(payload: &T) -> Result<Self> {
        let value = serde_json::to_value(payload)
            .map_err(|e| Error::serialization(format!("Failed to encode draft payload: {e}")))?;
        let encoded = serde_json::to_string(&value)
            .map_err(|e| Error::serialization(format!("Failed to encode draft payload: {e}")))?;
        Ok(Self(encoded))
    }

    /// Wrap bytes read back from storage
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        String::from_utf8(bytes)
            .map(Self)
            .map_err(|e| Error::deserialization(format!("Stored draft is not UTF-8: {e}")))
    }

    /// Decode into a typed payload
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.0)
            .map_err(|e| Error::deserialization(format!("Stored draft is malformed: {e}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SerializedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
