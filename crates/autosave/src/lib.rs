//! # Draft Auto-Save
//!
//! Debounced persistence of in-progress drafts and recovery of the last
//! saved draft after a restart or crash.
//!
//! This crate is the public facade of the workspace. It re-exports the
//! domain types, the provider implementations and the infrastructure
//! services, and hosts the `autosave` operator CLI.
//!
//! ## Example
//!
//! ```ignore
//! use autosave::{AppConfig, AutoSaveOptions, build_manager};
//!
//! let components = build_manager(&AppConfig::default());
//! let manager = components.manager;
//!
//! // On start: recover a draft left by a previous session
//! let draft: Option<serde_json::Value> = manager.restore_saved("contact-form").await;
//!
//! // On every change of the form state
//! let state = serde_json::json!({ "name": "Ada", "message": "Hello" });
//! manager.attach(AutoSaveOptions::new("contact-form", &state)).await;
//!
//! // After a successful submission
//! manager.clear_saved("contact-form").await;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Draft keys, payload encoding, errors and port traits
//! - `providers` - State stores and notification sinks
//! - `infrastructure` - Auto-save manager, configuration, logging and wiring

pub mod cli;

/// Domain layer - draft types and port traits
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use autosave_domain::*;
}

/// Provider layer - state stores and notification sinks
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use autosave_providers::*;
}

/// Infrastructure layer - manager, config, logging and factories
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use autosave_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the manager surface at the crate root
pub use infrastructure::{
    AppConfig, AttachOutcome, AutoSaveComponents, AutoSaveOptions, ConfigLoader,
    DraftAutoSaveManager, build_manager,
};
