// SentryView - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SentryView";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "SentryView";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Log table
// =============================================================================

/// Number of log entries shown per page in the detailed logs table.
pub const PAGE_SIZE: usize = 10;

/// Number of numbered page buttons shown either side of the current page
/// in the pagination control. Pages outside this window (other than the
/// first and last) collapse into an ellipsis.
pub const PAGE_NAV_NEIGHBOURS: usize = 1;

// =============================================================================
// Ingestion limits
// =============================================================================

/// Maximum size in bytes of an uploaded log file. Uploads are read whole
/// into memory, so this bounds peak allocation for a single ingestion.
pub const MAX_UPLOAD_BYTES: u64 = 32 * 1024 * 1024; // 32 MB

/// File extension accepted by the ingestion gate (compared
/// case-insensitively against the selected file's extension).
pub const CSV_EXTENSION: &str = "csv";

/// Declared media type accepted by the ingestion gate.
pub const CSV_MIME: &str = "text/csv";

// =============================================================================
// UI defaults
// =============================================================================

/// How long a toast notification stays on screen, in seconds.
pub const TOAST_DURATION_SECS: f64 = 4.0;

/// Maximum number of toasts held in the queue at once. The oldest toast
/// is dropped when the queue is full.
pub const MAX_TOASTS: usize = 6;

/// Initial window size.
pub const WINDOW_WIDTH: f32 = 1200.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

/// Minimum window size.
pub const MIN_WINDOW_WIDTH: f32 = 800.0;
pub const MIN_WINDOW_HEIGHT: f32 = 500.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Preferences file name (stored in the platform data directory).
pub const PREFS_FILE_NAME: &str = "prefs.json";
