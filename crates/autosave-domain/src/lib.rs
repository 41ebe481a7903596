//! # Draft Auto-Save - Domain Layer
//!
//! Core types shared by every layer of the draft auto-save workspace:
//!
//! - [`error`] - the domain [`Error`] type and [`Result`] alias
//! - [`constants`] - draft semantics (key prefix, default interval)
//! - [`value_objects`] - draft keys, canonical payload encoding, notifications
//! - [`ports`] - storage and notification traits implemented by providers

/// Domain constants
pub mod constants;
/// Error types
pub mod error;
/// Port traits
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{NotificationProvider, NotificationStream, StateStoreProvider};
pub use value_objects::{DraftKey, Notification, SerializedPayload, StorageKey};
