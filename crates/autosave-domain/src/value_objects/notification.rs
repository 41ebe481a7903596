//! User-facing notification value object

use serde::{Deserialize, Serialize};

/// A fire-and-forget message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Short headline
    pub title: String,
    /// Longer explanation
    pub description: String,
    /// Draft the notification refers to, if any
    pub key: Option<String>,
}

impl Notification {
    pub fn new<T: Into<String>, D: Into<String>>(title: T, description: D) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            key: None,
        }
    }

    /// Attach the draft key this notification is about
    pub fn for_key<K: Into<String>>(mut self, key: K) -> Self {
        self.key = Some(key.into());
        self
    }
}
