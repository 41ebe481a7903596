//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Draft semantics are defined in `autosave_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "autosave.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "autosave";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "AUTOSAVE";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// STORAGE CONSTANTS
// ============================================================================

/// Directory (under the data dir) holding filesystem drafts
pub const DEFAULT_STORAGE_DIR: &str = "drafts";

// ============================================================================
// NOTIFICATION CONSTANTS
// ============================================================================

/// Default capacity of the broadcast notification channel
pub const DEFAULT_NOTIFICATION_CAPACITY: usize = 1024;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_FILTER: &str = "AUTOSAVE_LOG";

/// Keys under the config env prefix that are not configuration
///
/// `AUTOSAVE_LOG` shares the prefix but belongs to the log filter.
pub const CONFIG_ENV_IGNORED_KEYS: &[&str] = &["log"];

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;

// ============================================================================
// LIFECYCLE CONSTANTS
// ============================================================================

/// Default time to wait for in-flight draft writes on shutdown (seconds)
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 5;
