//! # Draft Auto-Save - Infrastructure Layer
//!
//! - [`autosave`] - the debounced [`DraftAutoSaveManager`]
//! - [`config`] - typed configuration and the figment loader
//! - [`factory`] - provider selection and manager wiring
//! - [`logging`] - tracing subscriber setup
//! - [`error_ext`] - context helpers mapping foreign errors to the domain error

pub mod autosave;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod factory;
pub mod logging;

pub use autosave::{AttachOutcome, AutoSaveOptions, DraftAutoSaveManager};
pub use config::{AppConfig, ConfigLoader};
pub use factory::{AutoSaveComponents, build_manager};
