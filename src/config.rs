// Global configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timers: TimerConfig,

    #[serde(default)]
    pub house: HouseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Simulated delay before an invite code is checked
    #[serde(default = "default_join_validation_ms")]
    pub join_validation_ms: u64,

    /// How long the expanded "New Chore" button stays open
    #[serde(default = "default_action_button_collapse_ms")]
    pub action_button_collapse_ms: u64,

    /// How long "Copied!" stays on the invite popup
    #[serde(default = "default_copied_feedback_ms")]
    pub copied_feedback_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseConfig {
    /// Member count preselected on the create form (clamped to 2-8)
    #[serde(default = "default_member_count")]
    pub default_member_count: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write a log file (the terminal belongs to the UI)
    #[serde(default)]
    pub enabled: bool,

    /// One of: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path, relative paths resolve against the working directory
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

fn default_join_validation_ms() -> u64 {
    1500
}

fn default_action_button_collapse_ms() -> u64 {
    3000
}

fn default_copied_feedback_ms() -> u64 {
    1500
}

fn default_member_count() -> u8 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("houseflow.log")
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            join_validation_ms: default_join_validation_ms(),
            action_button_collapse_ms: default_action_button_collapse_ms(),
            copied_feedback_ms: default_copied_feedback_ms(),
        }
    }
}

impl TimerConfig {
    pub fn join_validation(&self) -> Duration {
        Duration::from_millis(self.join_validation_ms)
    }

    pub fn action_button_collapse(&self) -> Duration {
        Duration::from_millis(self.action_button_collapse_ms)
    }

    pub fn copied_feedback(&self) -> Duration {
        Duration::from_millis(self.copied_feedback_ms)
    }
}

impl Default for HouseConfig {
    fn default() -> Self {
        Self {
            default_member_count: default_member_count(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("houseflow")
        } else {
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("houseflow")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();

            // Built-in defaults still work when the directory isn't writable
            if let Err(e) = config.save() {
                eprintln!("Warning: Could not create default config file: {:#}", e);
                eprintln!(
                    "Using built-in defaults. Run 'houseflow init-config' to create a config file."
                );
            }

            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Check if config file exists
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }
}
