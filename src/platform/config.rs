// Timetable Tool - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Timetable Tool configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/timetabletool/ or %APPDATA%\TimetableTool\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so a newer config file still works with
/// an older binary.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[catalog]` section.
    pub catalog: CatalogSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[catalog]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// "per_query" (re-read the file on every display) or "cached".
    pub reload: Option<String>,
    /// "abort" (fail the load on a short row) or "skip".
    pub malformed_rows: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- Catalog --
    /// Keep the parsed catalog between displays instead of re-reading the file.
    pub cache_catalog: bool,
    /// Skip short rows instead of failing the load.
    pub skip_malformed_rows: bool,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache_catalog: false,
            skip_malformed_rows: false,
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
        }
    }
}

/// Read and parse config.toml. `Ok(None)` means the file does not exist.
pub fn read_raw_config(path: &Path) -> Result<Option<RawConfig>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    toml::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::TomlParse {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings (first run). An unreadable
/// or unparseable file yields defaults plus a warning; the application still
/// starts. See config.example.toml for the expected format.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    let raw = match read_raw_config(&config_path) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
            return (AppConfig::default(), warnings);
        }
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let config = validate(&raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Check each field against its accepted values, accumulating all problems.
fn validate(raw: &RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();
    let mut reject = |field: &str, value: String, expected: String| {
        warnings.push(format!(
            "{}. Using default.",
            ConfigError::ValueOutOfRange {
                field: field.to_string(),
                value,
                expected,
            }
        ));
    };

    // -- Catalog: reload --
    if let Some(ref reload) = raw.catalog.reload {
        match reload.to_lowercase().as_str() {
            "per_query" => config.cache_catalog = false,
            "cached" => config.cache_catalog = true,
            _ => reject(
                "catalog.reload",
                reload.clone(),
                "\"per_query\" or \"cached\"".to_string(),
            ),
        }
    }

    // -- Catalog: malformed_rows --
    if let Some(ref policy) = raw.catalog.malformed_rows {
        match policy.to_lowercase().as_str() {
            "abort" => config.skip_malformed_rows = false,
            "skip" => config.skip_malformed_rows = true,
            _ => reject(
                "catalog.malformed_rows",
                policy.clone(),
                "\"abort\" or \"skip\"".to_string(),
            ),
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            _ => reject(
                "ui.theme",
                theme.clone(),
                "\"dark\" or \"light\"".to_string(),
            ),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            reject(
                "ui.font_size",
                size.to_string(),
                format!("{}-{}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
            );
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            reject(
                "logging.level",
                level.clone(),
                constants::VALID_LOG_LEVELS.join(", "),
            );
        }
    }

    config
}
