// Timetable Tool - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Timetable Tool";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "TimetableTool";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Catalog
// =============================================================================

/// Minimum number of columns a catalog row must carry: code, name, time.
pub const MIN_COURSE_COLUMNS: usize = 3;

/// Department filter value that matches every course regardless of its code.
pub const WILDCARD_DEPARTMENT: &str = "UNI";

/// Year choices offered by the filter panel. Free text is also accepted.
pub const YEAR_CHOICES: &[&str] = &["1", "2", "3", "4"];

/// Department choices offered by the filter panel. Free text is also accepted.
pub const DEPARTMENT_CHOICES: &[&str] = &["CS", "EE", WILDCARD_DEPARTMENT];

/// File extensions offered by the open/save dialogs.
pub const CSV_EXTENSIONS: &[&str] = &["csv"];

// =============================================================================
// Timetable
// =============================================================================

/// Hard ceiling on the number of courses in a timetable (a typical per-term
/// load). Not configurable.
pub const MAX_TIMETABLE_COURSES: usize = 6;

/// Suggested file name in the save dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "timetable.csv";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
