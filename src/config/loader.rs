use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::garage::MAX_CAPACITY;
use crate::hanoi::{MAX_DISKS, MIN_DISKS};
use crate::sorting::{MAX_DELAY_MS, MAX_LENGTH, MIN_DELAY_MS, MIN_LENGTH};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/dsa-arcade/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("dsa-arcade").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Every numeric setting must lie in the range its page control allows.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: String| Err(ConfigError::ValidationError { message });

        if !(1..=1000).contains(&self.ui.tick_rate_ms) {
            return invalid(format!(
                "ui.tick_rate_ms must be between 1 and 1000, got {}",
                self.ui.tick_rate_ms
            ));
        }
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.sorting.array_length) {
            return invalid(format!(
                "sorting.array_length must be between {} and {}, got {}",
                MIN_LENGTH, MAX_LENGTH, self.sorting.array_length
            ));
        }
        if !(MIN_DELAY_MS..=MAX_DELAY_MS).contains(&self.sorting.delay_ms) {
            return invalid(format!(
                "sorting.delay_ms must be between {} and {}, got {}",
                MIN_DELAY_MS, MAX_DELAY_MS, self.sorting.delay_ms
            ));
        }
        if !(1..=MAX_CAPACITY).contains(&self.garage.capacity) {
            return invalid(format!(
                "garage.capacity must be between 1 and {}, got {}",
                MAX_CAPACITY, self.garage.capacity
            ));
        }
        if !(MIN_DISKS..=MAX_DISKS).contains(&self.hanoi.disks) {
            return invalid(format!(
                "hanoi.disks must be between {} and {}, got {}",
                MIN_DISKS, MAX_DISKS, self.hanoi.disks
            ));
        }
        if self.messages.error_ms == 0 || self.messages.notice_ms == 0 {
            return invalid("message durations must be greater than zero".to_string());
        }

        Ok(())
    }
}
