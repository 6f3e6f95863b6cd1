//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Directory for log files while the terminal UI owns the screen.
const LOG_DIR_ENV: &str = "ARCANA_LOG_DIR";

/// Install the global subscriber.
///
/// Line-oriented commands log to stderr. The terminal UI only logs when
/// `ARCANA_LOG_DIR` is set, to a per-process file in that directory.
pub fn setup_tracing(verbose: bool, interactive: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("arcana=debug,arcana_core=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    if interactive {
        let Some(log_dir) = std::env::var(LOG_DIR_ENV).ok().map(PathBuf::from) else {
            return;
        };
        if std::fs::create_dir_all(&log_dir).is_err() {
            return;
        }
        let log_path = log_dir.join(format!("arcana.{}.log", std::process::id()));
        let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
            return;
        };
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true),
            )
            .init();
        tracing::info!(path = %log_path.display(), "tui tracing initialized");
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
