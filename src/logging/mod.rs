//! Debug logging to disk.
//!
//! The terminal is owned by the UI, so tracing output never goes to stdout.
//! When enabled, events are appended to a daily log file named
//! `feedview_<date>.log` in the configured log directory (default:
//! `~/.local/share/feedview/logs/`).

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;

/// Install the global tracing subscriber. No-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d");
    let path = log_dir.join(format!("feedview_{}.log", date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let level = LevelFilter::from_str(&config.level).unwrap_or(LevelFilter::INFO);
    tracing_subscriber::fmt()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();

    Ok(())
}

fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(dir)
}
