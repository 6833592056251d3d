//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the
//! box with no config file at all.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tab selected at startup. An unknown key falls back to Home.
    #[serde(default = "default_start_tab")]
    pub start_tab: String,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_tab: default_start_tab(),
            tick_rate_ms: default_tick_rate(),
            show_key_hints: true,
        }
    }
}

/// Debug logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_start_tab() -> String {
    "Home".to_string()
}
fn default_tick_rate() -> u64 {
    250
}
fn default_true() -> bool {
    true
}
fn default_log_dir() -> String {
    "~/.local/share/feedview/logs".to_string()
}
fn default_log_level() -> String {
    "debug".to_string()
}
