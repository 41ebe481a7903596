//! Per-attach options and outcomes

use std::time::Duration;

/// What the caller hands to [`attach`](super::DraftAutoSaveManager::attach)
/// on every change of its state
///
/// Unset fields fall back to the manager's [`AutoSaveConfig`](crate::config::AutoSaveConfig).
#[derive(Debug, Clone, Copy)]
pub struct AutoSaveOptions<'a, T: ?Sized> {
    /// Logical draft identifier
    pub key: &'a str,
    /// Current in-progress data
    pub payload: &'a T,
    /// Quiet period before the payload is persisted
    pub interval: Option<Duration>,
    /// When false, nothing is scheduled or written
    pub enabled: Option<bool>,
}

impl<'a, T: ?Sized> AutoSaveOptions<'a, T> {
    pub fn new(key: &'a str, payload: &'a T) -> Self {
        Self {
            key,
            payload,
            interval: None,
            enabled: None,
        }
    }

    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    #[must_use]
    pub fn interval_ms(self, interval_ms: u64) -> Self {
        self.interval(Duration::from_millis(interval_ms))
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

/// Result of a single attach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    /// A write was (re)armed and fires after a quiet interval
    Scheduled,
    /// The same payload already has a write pending; its timer keeps running
    Pending,
    /// Payload matches the last persisted value; nothing to do
    Unchanged,
    /// Auto-save is disabled for this attach
    Disabled,
    /// The payload could not be serialized
    SerializationFailed,
    /// The draft key was rejected
    InvalidKey,
    /// The manager has been shut down
    Closed,
}

impl AttachOutcome {
    /// Whether a write is armed for the payload after this attach
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Scheduled | Self::Pending)
    }
}
