//! Configuration types module

pub mod app;
pub mod autosave;
pub mod logging;
pub mod notifications;
pub mod storage;

// Re-export main types
pub use app::*;
