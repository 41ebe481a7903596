//! Debounced draft auto-save manager
//!
//! Persists a caller's in-progress data to a [`StateStoreProvider`] once the
//! data has stopped changing for a configured interval, and offers recovery
//! of the last persisted value.
//!
//! ## Lifecycle of a key
//!
//! ```text
//! idle --attach(changed)--> pending --interval elapses--> idle (persisted)
//!                              |
//!                              +--attach(changed) / detach / shutdown--> cancelled
//! ```
//!
//! Every key owns one slot behind an async mutex. Arming a write bumps the
//! slot's generation and replaces its cancellation token under that lock;
//! the timer task re-checks both under the same lock before it writes. A
//! superseded timer therefore never writes, and two writes for one key are
//! never in flight at once.
//!
//! `clear_saved` drops an idle slot from the map, so a long-lived manager
//! only tracks keys that have a pending write or a remembered last save.
//!
//! Storage and serialization failures are logged and swallowed. The caller
//! keeps working in memory no matter what the storage medium does.

use super::options::{AttachOutcome, AutoSaveOptions};
use crate::config::AutoSaveConfig;
use autosave_domain::ports::{NotificationProvider, StateStoreProvider};
use autosave_domain::value_objects::{DraftKey, Notification, SerializedPayload, StorageKey};
use dashmap::DashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info, warn};

/// Write armed for a key, waiting for its quiet period
struct PendingWrite {
    token: CancellationToken,
    payload: SerializedPayload,
}

/// Per-key state owned by the manager
#[derive(Default)]
struct DraftSlot {
    /// Serialization of the last value this manager wrote; never persisted itself
    last_saved: Option<SerializedPayload>,
    /// Incremented whenever the pending write is replaced or cancelled
    generation: u64,
    pending: Option<PendingWrite>,
    /// Set once the slot is removed from the map; attach must fetch a fresh one
    retired: bool,
}

impl DraftSlot {
    /// Cancel the pending write, if any. Returns whether one was cancelled.
    fn cancel_pending(&mut self) -> bool {
        self.generation = self.generation.wrapping_add(1);
        match self.pending.take() {
            Some(pending) => {
                pending.token.cancel();
                true
            }
            None => false,
        }
    }
}

/// Draft auto-save manager
///
/// Share it behind an `Arc`. Dropping the last handle cancels every pending
/// write; use [`shutdown`](Self::shutdown) to also wait for an in-flight
/// write to finish.
///
/// # Example
///
/// ```ignore
/// let manager = DraftAutoSaveManager::new(store, notifier, AutoSaveConfig::default());
///
/// // On mount
/// let restored: Option<ListingForm> = manager.restore_saved("listing-new").await;
///
/// // On every edit
/// manager.attach(AutoSaveOptions::new("listing-new", &form)).await;
///
/// // After a successful submit
/// manager.clear_saved("listing-new").await;
/// ```
pub struct DraftAutoSaveManager {
    store: Arc<dyn StateStoreProvider>,
    notifier: Arc<dyn NotificationProvider>,
    config: AutoSaveConfig,
    slots: DashMap<DraftKey, Arc<Mutex<DraftSlot>>>,
    shutdown_token: CancellationToken,
    tasks: TaskTracker,
}

impl DraftAutoSaveManager {
    /// Create a manager over the given store and notification sink
    pub fn new(
        store: Arc<dyn StateStoreProvider>,
        notifier: Arc<dyn NotificationProvider>,
        config: AutoSaveConfig,
    ) -> Self {
        Self {
            store,
            notifier,
            config,
            slots: DashMap::new(),
            shutdown_token: CancellationToken::new(),
            tasks: TaskTracker::new(),
        }
    }

    /// Manager defaults
    pub fn config(&self) -> &AutoSaveConfig {
        &self.config
    }

    /// Name of the underlying state store
    pub fn store_name(&self) -> &str {
        self.store.provider_name()
    }

    /// Whether [`shutdown`](Self::shutdown) has been initiated
    pub fn is_closed(&self) -> bool {
        self.shutdown_token.is_cancelled()
    }

    /// Storage key a draft key is persisted under
    pub fn storage_key(&self, key: &DraftKey) -> StorageKey {
        key.storage_key(&self.config.key_prefix)
    }

    /// Observe the caller's current payload and (re)arm the debounced write
    ///
    /// Called on every change of the caller's state. A payload equal to the
    /// last persisted one cancels any pending write and schedules nothing.
    /// A payload equal to the one already pending leaves its timer running.
    /// Any other payload cancels the pending write and arms a new one that
    /// fires once `interval` elapses without another change.
    pub async fn attach<T>(&self, options: AutoSaveOptions<'_, T>) -> AttachOutcome
    where
        T: Serialize + ?Sized,
    {
        if self.is_closed() {
            debug!(key = options.key, "Attach after shutdown ignored");
            return AttachOutcome::Closed;
        }

        let key = match DraftKey::new(options.key) {
            Ok(key) => key,
            Err(e) => {
                warn!(error = %e, "Rejected draft key");
                return AttachOutcome::InvalidKey;
            }
        };

        if !options.enabled.unwrap_or(self.config.enabled) {
            // Turning auto-save off also drops a write armed while it was on
            if let Some(slot) = self.existing_slot(&key) {
                if slot.lock().await.cancel_pending() {
                    debug!(key = %key, "Auto-save disabled, pending write cancelled");
                }
            }
            return AttachOutcome::Disabled;
        }

        let serialized = match SerializedPayload::encode(options.payload) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!(key = %key, error = %e, "Draft payload could not be serialized");
                return AttachOutcome::SerializationFailed;
            }
        };

        let interval = options.interval.unwrap_or_else(|| self.config.interval());
        let (slot, mut state) = self.lock_live_slot(&key).await;

        if state.last_saved.as_ref() == Some(&serialized) {
            if state.cancel_pending() {
                debug!(key = %key, "Payload reverted to saved draft, pending write cancelled");
            }
            return AttachOutcome::Unchanged;
        }

        if state
            .pending
            .as_ref()
            .is_some_and(|pending| pending.payload == serialized)
        {
            return AttachOutcome::Pending;
        }

        state.cancel_pending();
        let generation = state.generation;
        let token = self.shutdown_token.child_token();
        state.pending = Some(PendingWrite {
            token: token.clone(),
            payload: serialized.clone(),
        });
        drop(state);

        let write = PendingWriteTask {
            store: Arc::clone(&self.store),
            slot,
            storage_key: self.storage_key(&key),
            key: key.clone(),
            payload: serialized,
            generation,
            token,
            interval,
        };
        tokio::spawn(self.tasks.track_future(write.run()));

        debug!(key = %key, interval_ms = interval.as_millis(), "Draft write scheduled");
        AttachOutcome::Scheduled
    }

    /// Cancel the pending write for `key` without performing it
    ///
    /// Returns whether a write was pending.
    pub async fn detach(&self, key: &str) -> bool {
        let Some(slot) = DraftKey::new(key).ok().and_then(|key| self.existing_slot(&key)) else {
            return false;
        };
        let cancelled = slot.lock().await.cancel_pending();
        if cancelled {
            debug!(key = key, "Pending draft write cancelled on detach");
        }
        cancelled
    }

    /// Read and decode the stored draft for `key`
    ///
    /// Absence, malformed data and storage failures all yield `None`.
    pub async fn load_saved<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let serialized = self.load_serialized(key).await?;
        match serialized.decode::<T>() {
            Ok(payload) => Some(payload),
            Err(e) => {
                warn!(key = key, error = %e, "Stored draft is malformed, treating as absent");
                None
            }
        }
    }

    /// Untyped form of [`load_saved`](Self::load_saved)
    pub async fn load_saved_value(&self, key: &str) -> Option<serde_json::Value> {
        self.load_saved(key).await
    }

    /// Delete the stored draft for `key` and forget the last saved payload
    ///
    /// Safe to call when nothing is stored. A write already pending for the
    /// key is left armed and stores its payload once its interval elapses.
    /// An idle key stops being tracked.
    pub async fn clear_saved(&self, key: &str) {
        let draft_key = match DraftKey::new(key) {
            Ok(draft_key) => draft_key,
            Err(e) => {
                warn!(error = %e, "Rejected draft key");
                return;
            }
        };

        let storage_key = self.storage_key(&draft_key);
        match self.store.delete(storage_key.as_str()).await {
            Ok(()) => debug!(key = key, "Stored draft cleared"),
            Err(e) => warn!(key = key, error = %e, "Failed to clear stored draft"),
        }

        let released = self
            .slots
            .remove_if(&draft_key, |_, slot| match slot.try_lock() {
                Ok(mut state) if state.pending.is_none() => {
                    state.retired = true;
                    true
                }
                _ => false,
            })
            .is_some();

        if !released {
            if let Some(slot) = self.existing_slot(&draft_key) {
                slot.lock().await.last_saved = None;
            }
        }
    }

    /// Whether a draft is stored for `key`, without decoding it
    pub async fn has_saved_data(&self, key: &str) -> bool {
        let Ok(draft_key) = DraftKey::new(key) else {
            return false;
        };
        match self.store.load(self.storage_key(&draft_key).as_str()).await {
            Ok(data) => data.is_some(),
            Err(e) => {
                warn!(key = key, error = %e, "Failed to check for stored draft");
                false
            }
        }
    }

    /// Load the stored draft and tell the user it was recovered
    ///
    /// Nothing is emitted when there is nothing to restore.
    pub async fn restore_saved<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let payload = self.load_saved::<T>(key).await?;

        let notification = Notification::new(
            self.config.recovery_title.clone(),
            self.config.recovery_description.clone(),
        )
        .for_key(key);
        if let Err(e) = self.notifier.notify(notification).await {
            warn!(key = key, error = %e, "Failed to deliver recovery notification");
        }

        info!(key = key, "Draft recovered");
        Some(payload)
    }

    /// Draft keys currently stored under this manager's prefix
    pub async fn saved_keys(&self) -> Vec<String> {
        match self.store.list_keys(&self.config.key_prefix).await {
            Ok(keys) => keys
                .iter()
                .filter_map(|k| StorageKey::strip_prefix(k, &self.config.key_prefix))
                .map(|k| k.as_str().to_string())
                .collect(),
            Err(e) => {
                warn!(error = %e, "Failed to list stored drafts");
                Vec::new()
            }
        }
    }

    /// Serialization this manager last persisted for `key`
    pub async fn last_saved_serialization(&self, key: &str) -> Option<String> {
        let slot = DraftKey::new(key)
            .ok()
            .and_then(|key| self.existing_slot(&key))?;
        let state = slot.lock().await;
        state.last_saved.as_ref().map(|s| s.as_str().to_string())
    }

    /// Number of keys the manager currently holds state for
    pub fn tracked_keys(&self) -> usize {
        self.slots.len()
    }

    /// Number of keys with a write waiting for its quiet period
    pub async fn pending_writes(&self) -> usize {
        let slots: Vec<_> = self
            .slots
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();

        let mut pending = 0;
        for slot in slots {
            if slot.lock().await.pending.is_some() {
                pending += 1;
            }
        }
        pending
    }

    /// Cancel every pending write and stop accepting attaches
    ///
    /// Waits up to `timeout` for a write that is already talking to the store.
    /// Returns `true` if all tasks finished in time.
    pub async fn shutdown(&self, timeout: Duration) -> bool {
        info!(
            "Shutting down draft auto-save with {} tracked tasks",
            self.tasks.len()
        );

        self.shutdown_token.cancel();
        self.tasks.close();

        tokio::select! {
            () = self.tasks.wait() => {
                debug!("All draft write tasks finished");
                true
            }
            () = tokio::time::sleep(timeout) => {
                warn!(
                    "Draft auto-save shutdown timed out with {} tasks remaining",
                    self.tasks.len()
                );
                false
            }
        }
    }

    fn slot(&self, key: &DraftKey) -> Arc<Mutex<DraftSlot>> {
        Arc::clone(self.slots.entry(key.clone()).or_default().value())
    }

    /// Lock the live slot for `key`, skipping one retired by a concurrent clear
    async fn lock_live_slot(
        &self,
        key: &DraftKey,
    ) -> (Arc<Mutex<DraftSlot>>, OwnedMutexGuard<DraftSlot>) {
        loop {
            let slot = self.slot(key);
            let state = Arc::clone(&slot).lock_owned().await;
            if !state.retired {
                return (slot, state);
            }
        }
    }

    fn existing_slot(&self, key: &DraftKey) -> Option<Arc<Mutex<DraftSlot>>> {
        self.slots.get(key).map(|slot| Arc::clone(slot.value()))
    }

    async fn load_serialized(&self, key: &str) -> Option<SerializedPayload> {
        let draft_key = match DraftKey::new(key) {
            Ok(draft_key) => draft_key,
            Err(e) => {
                warn!(error = %e, "Rejected draft key");
                return None;
            }
        };

        let bytes = match self.store.load(self.storage_key(&draft_key).as_str()).await {
            Ok(bytes) => bytes?,
            Err(e) => {
                warn!(key = key, error = %e, "Failed to read stored draft");
                return None;
            }
        };

        match SerializedPayload::from_bytes(bytes) {
            Ok(serialized) => Some(serialized),
            Err(e) => {
                warn!(key = key, error = %e, "Stored draft is malformed, treating as absent");
                None
            }
        }
    }
}

impl Drop for DraftAutoSaveManager {
    fn drop(&mut self) {
        self.shutdown_token.cancel();
    }
}

impl std::fmt::Debug for DraftAutoSaveManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftAutoSaveManager")
            .field("store", &self.store.provider_name())
            .field("notifier", &self.notifier.provider_name())
            .field("key_prefix", &self.config.key_prefix)
            .field("slots", &self.slots.len())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Timer and write for one armed payload
struct PendingWriteTask {
    store: Arc<dyn StateStoreProvider>,
    slot: Arc<Mutex<DraftSlot>>,
    storage_key: StorageKey,
    key: DraftKey,
    payload: SerializedPayload,
    generation: u64,
    token: CancellationToken,
    interval: Duration,
}

impl PendingWriteTask {
    async fn run(self) {
        tokio::select! {
            biased;
            () = self.token.cancelled() => {
                debug!(key = %self.key, "Pending draft write cancelled");
                return;
            }
            () = tokio::time::sleep(self.interval) => {}
        }

        let mut state = self.slot.lock().await;
        // Superseded between the timer firing and acquiring the slot
        if self.token.is_cancelled() || state.generation != self.generation {
            return;
        }
        state.pending = None;

        match self
            .store
            .save(self.storage_key.as_str(), self.payload.as_bytes())
            .await
        {
            Ok(()) => {
                info!(key = %self.key, bytes = self.payload.len(), "Draft persisted");
                state.last_saved = Some(self.payload);
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to persist draft");
            }
        }
    }
}
