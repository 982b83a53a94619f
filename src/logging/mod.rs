//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so tracing output goes to
//! `<log_dir>/everysecond.log` (default `~/.local/share/everysecond/logs/`).
//! `RUST_LOG` overrides the configured level.

use crate::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE: &str = "everysecond.log";

/// Install the global subscriber. Returns the log file path when one was
/// opened. Failing to open the file leaves logging off rather than writing
/// over the TUI.
pub fn init(config: &LoggingConfig) -> Option<PathBuf> {
    if !config.enabled {
        return None;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let path = expand_home(&config.log_dir).join(LOG_FILE);
    let file = path
        .parent()
        .map(fs::create_dir_all)
        .transpose()
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path))
        .ok()?;

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .try_init()
        .is_ok();
    if !installed {
        return None;
    }

    tracing::info!(path = %path.display(), "logging initialized");
    Some(path)
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches(['/', '\\']));
        }
    }
    Path::new(dir).to_path_buf()
}
