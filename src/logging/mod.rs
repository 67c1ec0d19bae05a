//! Diagnostic logging to disk.
//!
//! The TUI owns stdout, so when enabled, `tracing` events are written to a
//! plain-text file instead (default: `~/.local/share/fauxterm/fauxterm.log`).
//! Nothing typed into the shell is persisted beyond what the log level lets
//! through.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing::Level;

/// Install the global subscriber. No-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = parse_level(&config.level)?;
    let path = expand_home(&config.file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {}", e))?;

    tracing::info!(path = %path.display(), %level, "logging started");
    Ok(())
}

fn parse_level(level: &str) -> Result<Level> {
    level
        .parse::<Level>()
        .with_context(|| format!("Invalid log level `{}`", level))
}
