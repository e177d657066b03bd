// File logging via tracing
//
// The TUI owns stdout, so log output always goes to a file.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;

use crate::config::LoggingConfig;

/// Level to log at, or `None` when logging is off
pub fn effective_level(config: &LoggingConfig) -> Option<Level> {
    if cfg!(feature = "dev-logging") {
        return Some(Level::DEBUG);
    }
    if !config.enabled {
        return None;
    }
    Some(Level::from_str(config.level.trim()).unwrap_or(Level::INFO))
}

/// Install the global subscriber. Returns false when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let Some(level) = effective_level(config) else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .with_context(|| format!("Failed to open log file: {}", config.file.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), %level, "logging started");
    Ok(true)
}
