//! Draft auto-save
//!
//! [`DraftAutoSaveManager`] owns debounced persistence of in-progress data
//! and exposes recovery and clearing of the stored draft.

pub mod manager;
pub mod options;

pub use manager::DraftAutoSaveManager;
pub use options::{AttachOutcome, AutoSaveOptions};
