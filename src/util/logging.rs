// Timetable Tool - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr. Course names and times are never logged, only codes.

use tracing_subscriber::EnvFilter;

/// Resolve the filter directive string.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
/// Returns `None` when RUST_LOG should be used as-is.
fn resolve_level(env_set: bool, debug_flag: bool, config_level: Option<&str>) -> Option<String> {
    if env_set {
        None
    } else if debug_flag {
        Some("debug".to_string())
    } else {
        Some(
            config_level
                .unwrap_or(super::constants::DEFAULT_LOG_LEVEL)
                .to_lowercase(),
        )
    }
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the validated level from config.toml (if present).
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let env_set = std::env::var("RUST_LOG").is_ok();
    let filter = match resolve_level(env_set, debug_flag, config_level) {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::from_default_env(),
    };

    // try_init: a second call (e.g. from tests) must not panic.
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init()
        .is_ok();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        installed,
        "Logging initialised"
    );
}
