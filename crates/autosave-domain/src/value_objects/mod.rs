//! Value objects
//!
//! Immutable types describing drafts and the notifications emitted about them.

pub mod draft;
pub mod notification;

pub use draft::{DraftKey, SerializedPayload, StorageKey};
pub use notification::Notification;
