//! Notification Port
//!
//! Defines the contract for delivering user-visible notifications.

use crate::error::Result;
use crate::value_objects::Notification;
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

/// Stream of notifications delivered to a subscriber
pub type NotificationStream = Pin<Box<dyn Stream<Item = Notification> + Send>>;

/// Notification sink interface
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Deliver a notification
    ///
    /// Delivery is fire-and-forget: having nobody listening is not an error.
    async fn notify(&self, notification: Notification) -> Result<()>;

    /// Name of the provider implementation
    fn provider_name(&self) -> &str;
}
