// Timetable Tool - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use timetable_tool::app;
pub use timetable_tool::core;
pub use timetable_tool::platform;
pub use timetable_tool::ui;
pub use timetable_tool::util;

use clap::Parser;
use std::path::PathBuf;

/// Timetable Tool - build a course timetable from a CSV catalog.
///
/// Load a CSV of course offerings (code, name, time), filter by year and
/// department, pick up to six courses, and save them back to CSV.
#[derive(Parser, Debug)]
#[command(name = "Timetable Tool", version, about)]
struct Cli {
    /// Course catalog CSV to open (choose one in the window if omitted).
    path: Option<PathBuf>,

    /// Initial year filter (e.g. 1, 2, 3, 4).
    #[arg(short = 'y', long = "year")]
    year: Option<String>,

    /// Initial department filter (e.g. CS, EE, or UNI for all).
    #[arg(short = 'D', long = "department")]
    department: Option<String>,

    /// Directory containing config.toml (overrides the platform default).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging starts so [logging] level can apply;
    // its warnings are logged once the subscriber is up.
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_dir);
    let (config, config_warnings) = platform::config::load_config(&config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %config_dir.display(),
        "Timetable Tool starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Build the session from config and CLI.
    let source = app::source::CatalogSource::from_config(&config);
    let mut state = app::state::AppState::new(source);
    state.dark_mode = config.dark_mode;
    state.year_input = cli.year.unwrap_or_default();
    state.department_input = cli.department.unwrap_or_default();

    if let Some(first) = config_warnings.first() {
        state.status = Some(app::state::StatusMessage::warning(first.clone()));
    }

    if let Some(path) = cli.path {
        state.set_source_path(path);
        if !state.criteria().is_empty() {
            state.display_courses();
        }
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1000.0, 640.0])
            .with_min_inner_size([720.0, 420.0]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::TimetableApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Timetable Tool GUI: {e}");
        std::process::exit(1);
    }
}
