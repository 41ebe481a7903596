//! Provider-specific constants

// ============================================================================
// FILESYSTEM STATE STORE CONSTANTS
// ============================================================================

/// Extension of files holding a stored draft
pub const FILESYSTEM_STORE_EXTENSION: &str = "draft";

/// Extension of the temporary file a draft is written to before rename
pub const FILESYSTEM_STORE_TMP_EXTENSION: &str = "tmp";

/// Extension of files named by key digest, which carry their key inline
pub const FILESYSTEM_STORE_HASHED_EXTENSION: &str = "hdraft";

/// Longest file name most filesystems accept (bytes)
pub const FILESYSTEM_MAX_FILE_NAME_BYTES: usize = 255;

// ============================================================================
// NOTIFICATION CONSTANTS
// ============================================================================

/// Default broadcast channel capacity for notifications
pub const NOTIFICATION_DEFAULT_CAPACITY: usize = 1024;
