//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the auto-save manager and the
//! outside world. Ports are implemented in `autosave-providers`.
//!
//! - **state_store** - durable key-value medium drafts are written to
//! - **notification** - user-facing notification sink used on recovery

/// Key-value persistence port
pub mod state_store;
/// User notification port
pub mod notification;

pub use notification::{NotificationProvider, NotificationStream};
pub use state_store::StateStoreProvider;
