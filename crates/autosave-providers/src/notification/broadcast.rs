//! Tokio Broadcast Notification Provider
//!
//! Delivers notifications to any number of in-process subscribers using a
//! tokio broadcast channel. A UI layer subscribes once and renders each
//! notification as a toast.
//!
//! ## Example
//!
//! ```ignore
//! use autosave_providers::notification::TokioNotificationProvider;
//!
//! let sink = TokioNotificationProvider::new();
//! let mut stream = sink.subscribe();
//!
//! sink.notify(Notification::new("Draft recovered", "...")).await?;
//! let toast = stream.next().await;
//! ```

use crate::constants::NOTIFICATION_DEFAULT_CAPACITY;
use async_trait::async_trait;
use autosave_domain::error::Result;
use autosave_domain::ports::{NotificationProvider, NotificationStream};
use autosave_domain::value_objects::Notification;
use futures::stream;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Notification provider using tokio broadcast channels
///
/// When the channel is full, the oldest notifications are dropped for
/// subscribers that fall behind.
#[derive(Clone)]
pub struct TokioNotificationProvider {
    sender: Arc<broadcast::Sender<Notification>>,
    capacity: usize,
}

impl TokioNotificationProvider {
    /// Create a provider with the default capacity (1024)
    pub fn new() -> Self {
        Self::with_capacity(NOTIFICATION_DEFAULT_CAPACITY)
    }

    /// Create with custom capacity
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of notifications buffered per subscriber
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Subscribe to every notification delivered from now on
    pub fn subscribe(&self) -> NotificationStream {
        let receiver = self.sender.subscribe();

        // Lagged receivers skip ahead instead of ending the stream
        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(notification) => return Some((notification, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Notification stream lagged by {} notifications", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        });

        Box::pin(stream)
    }

    /// Get the current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for TokioNotificationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokioNotificationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioNotificationProvider")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

#[async_trait]
impl NotificationProvider for TokioNotificationProvider {
    async fn notify(&self, notification: Notification) -> Result<()> {
        match self.sender.send(notification) {
            Ok(count) => debug!("Delivered notification to {} subscribers", count),
            Err(_) => debug!("Delivered notification but no subscribers"),
        }
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "broadcast"
    }
}
