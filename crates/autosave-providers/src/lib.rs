//! # Draft Auto-Save - Provider Implementations
//!
//! Adapters for the ports defined in `autosave-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | State Store | `StateStoreProvider` | InMemory, FileSystem, Null |
//! | Notification | `NotificationProvider` | Broadcast, Log, Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! autosave-providers = { version = "0.1", default-features = false, features = ["store-memory"] }
//! ```

pub use autosave_domain::error::{Error, Result};
pub use autosave_domain::ports::{NotificationProvider, StateStoreProvider};

/// Provider-specific constants
pub mod constants;

/// State store provider implementations
pub mod state_store;

/// Notification provider implementations
pub mod notification;
