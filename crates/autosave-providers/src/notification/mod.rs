//! Notification Provider Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`NullNotificationProvider`] | Discards notifications |
//! | [`LogNotificationProvider`] | Emits a tracing event per notification |
//! | [`TokioNotificationProvider`] | In-process broadcast to subscribers |

#[cfg(feature = "notify-broadcast")]
pub mod broadcast;
pub mod log;
pub mod null;

#[cfg(feature = "notify-broadcast")]
pub use broadcast::TokioNotificationProvider;
pub use log::LogNotificationProvider;
pub use null::NullNotificationProvider;
