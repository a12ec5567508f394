mod common;
mod config;
mod constants;
mod drag;
mod drawing;
mod editor;
mod filter;
mod geometry;
mod map;
mod paths;
mod store;
mod ui;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

const LOG_FILE: &str = "mapscribe.log";
const DEFAULT_LOG_FILTER: &str = "info,mapscribe=debug";

/// Mark where this run starts, since the log file is appended to across runs.
#[cfg(debug_assertions)]
fn write_run_header(log_file: &std::path::Path) {
    use std::io::Write;

    let Ok(mut file) = std::fs::OpenOptions::new().append(true).open(log_file) else {
        return;
    };
    let rule = "=".repeat(80);
    let started = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let _ = writeln!(file, "\n\n{rule}\n=== mapscribe started {started} ===\n{rule}\n");
}

/// Debug builds log to stdout and `logs/mapscribe.log`. `RUST_LOG` overrides
/// the default filter.
#[cfg(debug_assertions)]
fn setup_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let logs_dir = paths::logs_dir();
    if let Err(e) = std::fs::create_dir_all(&logs_dir) {
        eprintln!("Failed to create {}: {}", logs_dir.display(), e);
        return None;
    }
    write_run_header(&logs_dir.join(LOG_FILE));

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&logs_dir, LOG_FILE));
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();

    Some(guard)
}

/// Release builds leave logging to bevy's `LogPlugin`.
#[cfg(not(debug_assertions))]
fn setup_logging() -> Option<()> {
    None
}

fn main() {
    // Dropping the guard stops the file writer
    let _log_guard = setup_logging();
    if let Err(e) = paths::ensure_directories() {
        eprintln!("Failed to create application directories: {}", e);
    }
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Mapscribe".into(),
                        resolution: (DEFAULT_WINDOW_WIDTH as u32, DEFAULT_WINDOW_HEIGHT as u32)
                            .into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .add_plugins(config::ConfigPlugin)
        .add_plugins(store::StorePlugin)
        .add_plugins(filter::FilterPlugin)
        .add_plugins(map::MapPlugin)
        .add_plugins(editor::EditorPlugin)
        .add_plugins(ui::UiPlugin)
        .run();
}
