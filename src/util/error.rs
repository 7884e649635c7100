// Timetable Tool - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every error is caught at the session boundary and turned into an advisory
// message; none is fatal to the process.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Timetable Tool operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum TimetableToolError {
    /// Required user input is missing.
    Validation(ValidationError),

    /// The course catalog could not be read.
    Catalog(CatalogError),

    /// The catalog (or a display label) is malformed.
    Format(FormatError),

    /// A batch of courses could not be added to the timetable.
    Selection(SelectionError),

    /// The timetable could not be written.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for TimetableToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{e}"),
            Self::Catalog(e) => write!(f, "Error reading CSV file: {e}"),
            Self::Format(e) => write!(f, "Malformed CSV: {e}"),
            Self::Selection(e) => write!(f, "{e}"),
            Self::Export(e) => write!(f, "Could not save timetable: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for TimetableToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Catalog(e) => Some(e),
            Self::Format(e) => Some(e),
            Self::Selection(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Missing or insufficient user input. Checked before any I/O or mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No catalog file has been chosen.
    NoSourceFile,

    /// Neither a year nor a department filter was supplied.
    NoCriteria,

    /// "Add" was requested with no displayed rows selected.
    NoSelection,

    /// "Save" was requested while the timetable is empty.
    NothingToSave,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSourceFile => write!(f, "Please choose a file."),
            Self::NoCriteria => write!(f, "Please select a year, code, or both."),
            Self::NoSelection => write!(f, "Please select a course."),
            Self::NothingToSave => {
                write!(f, "Please add courses to the timetable before saving.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for TimetableToolError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

// ---------------------------------------------------------------------------
// Catalog errors
// ---------------------------------------------------------------------------

/// Errors opening or reading the catalog file.
#[derive(Debug)]
pub enum CatalogError {
    /// File not found, unreadable, or a read failed midway.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "'{}': {source}", path.display()),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<CatalogError> for TimetableToolError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

// ---------------------------------------------------------------------------
// Format errors
// ---------------------------------------------------------------------------

/// Malformed catalog rows or display labels.
#[derive(Debug)]
pub enum FormatError {
    /// A row has fewer than the required code, name, and time columns.
    ShortRow {
        path: PathBuf,
        line: u64,
        columns: usize,
    },

    /// The CSV reader rejected the input (e.g. invalid UTF-8).
    Csv { path: PathBuf, source: csv::Error },

    /// A display label is not of the form "CODE: Name (time)".
    DisplayLabel { label: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortRow {
                path,
                line,
                columns,
            } => write!(
                f,
                "'{}' line {line}: expected at least {} columns (code, name, time), found {columns}",
                path.display(),
                crate::util::constants::MIN_COURSE_COLUMNS,
            ),
            Self::Csv { path, source } => write!(f, "'{}': {source}", path.display()),
            Self::DisplayLabel { label } => {
                write!(f, "'{label}' is not of the form \"CODE: Name (time)\"")
            }
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<FormatError> for TimetableToolError {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

// ---------------------------------------------------------------------------
// Selection errors
// ---------------------------------------------------------------------------

/// Reasons a batch add to the timetable is rejected. A rejected batch never
/// partially applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A candidate is already in the timetable, or appears twice in the batch.
    Duplicate { code: String },

    /// The batch would push the timetable past its ceiling.
    Capacity {
        current: usize,
        requested: usize,
        max: usize,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { code } => {
                write!(f, "Course {code} is already added to the timetable.")
            }
            Self::Capacity {
                current,
                requested,
                max,
            } => write!(
                f,
                "You can select at most {max} courses \
                 ({current} in the timetable, {requested} selected)."
            ),
        }
    }
}

impl std::error::Error for SelectionError {}

impl From<SelectionError> for TimetableToolError {
    fn from(e: SelectionError) -> Self {
        Self::Selection(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to writing the timetable.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error creating or finalising the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "'{}': {source}", path.display()),
            Self::Csv { path, source } => {
                write!(f, "CSV write error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for TimetableToolError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is outside the accepted set or range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for TimetableToolError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for Timetable Tool results.
pub type Result<T> = std::result::Result<T, TimetableToolError>;
