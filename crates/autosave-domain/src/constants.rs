//! Domain layer constants
//!
//! Contains constants that define draft semantics. Infrastructure-specific
//! constants (config file names, log defaults) live in
//! `autosave_infrastructure::constants`.

// ============================================================================
// AUTO-SAVE DOMAIN CONSTANTS
// ============================================================================

/// Prefix prepended to every draft key before it reaches the storage medium
pub const AUTOSAVE_KEY_PREFIX: &str = "autosave_";

/// Default quiet period before a changed payload is persisted (30 seconds)
pub const AUTOSAVE_DEFAULT_INTERVAL_MS: u64 = 30_000;

/// Auto-save is enabled unless the caller opts out
pub const AUTOSAVE_DEFAULT_ENABLED: bool = true;

// ============================================================================
// RECOVERY NOTIFICATION CONSTANTS
// ============================================================================

/// Title of the notification emitted when a draft is recovered
pub const RECOVERY_NOTIFICATION_TITLE: &str = "Draft recovered";

/// Description of the notification emitted when a draft is recovered
pub const RECOVERY_NOTIFICATION_DESCRIPTION: &str =
    "Your unsaved changes from a previous session have been restored.";
