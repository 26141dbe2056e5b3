// SentryView - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Config and preference loading
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use sentryview::app;
pub use sentryview::core;
pub use sentryview::platform;
pub use sentryview::ui;
pub use sentryview::util;

use clap::Parser;
use std::path::PathBuf;

/// SentryView - desktop security-event dashboard.
///
/// Browse, search, and page through security event logs, upload CSV
/// exports, and review sample incident reports.
#[derive(Parser, Debug)]
#[command(name = "SentryView", version, about)]
struct Cli {
    /// CSV log file to load into the detailed logs table at startup.
    csv: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and read config.toml before logging init so
    // the configured level can apply.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "SentryView starting"
    );

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    // Theme priority: saved preference > config default > system.
    let prefs_path = platform::prefs::prefs_path(&platform_paths.data_dir);
    let theme = platform::prefs::load(&prefs_path)
        .map(|p| p.theme)
        .or(config.theme)
        .unwrap_or_default();

    let mut state = app::state::AppState::new(theme, prefs_path);

    // A CSV path on the CLI goes through the same gate as an upload.
    if let Some(ref path) = cli.csv {
        state.ingest_from(path);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([
                util::constants::WINDOW_WIDTH,
                util::constants::WINDOW_HEIGHT,
            ])
            .with_min_inner_size([
                util::constants::MIN_WINDOW_WIDTH,
                util::constants::MIN_WINDOW_HEIGHT,
            ]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::SentryViewApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch {}: {e}", util::constants::APP_NAME);
        std::process::exit(1);
    }
}
