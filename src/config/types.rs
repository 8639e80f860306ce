use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::garage::DEFAULT_CAPACITY;
use crate::hanoi::DEFAULT_DISKS;
use crate::sorting::{DEFAULT_DELAY_MS, DEFAULT_LENGTH};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub sorting: SortingConfig,
    #[serde(default)]
    pub garage: GarageConfig,
    #[serde(default)]
    pub hanoi: HanoiConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub sound: SoundConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between UI ticks in milliseconds (default: 25).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortingConfig {
    /// Number of bars generated when the page opens (default: 8).
    #[serde(default = "default_array_length")]
    pub array_length: usize,
    /// Pause between animation frames in milliseconds (default: 300).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarageConfig {
    /// Parking slots (default: 10).
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HanoiConfig {
    /// Disks on the first peg when the page opens (default: 3).
    #[serde(default = "default_disks")]
    pub disks: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// How long validation errors stay on screen (default: 3000).
    #[serde(default = "default_error_ms")]
    pub error_ms: u64,
    /// How long arrival/departure notices stay on screen (default: 5000).
    #[serde(default = "default_notice_ms")]
    pub notice_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundConfig {
    /// Ring the terminal bell on moves and errors (default: true).
    #[serde(default = "default_sound_enabled")]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the terminal UI. Defaults to the user cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    25
}

fn default_array_length() -> usize {
    DEFAULT_LENGTH
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_disks() -> u8 {
    DEFAULT_DISKS
}

fn default_error_ms() -> u64 {
    3000
}

fn default_notice_ms() -> u64 {
    5000
}

fn default_sound_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            array_length: default_array_length(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl Default for GarageConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl Default for HanoiConfig {
    fn default() -> Self {
        Self {
            disks: default_disks(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            error_ms: default_error_ms(),
            notice_ms: default_notice_ms(),
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: default_sound_enabled(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Settings taken from the command line; they win over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub mute: bool,
    pub delay_ms: Option<u64>,
    pub array_length: Option<usize>,
    pub disks: Option<u8>,
    pub log_file: Option<PathBuf>,
}

impl Overrides {
    pub fn apply(&self, config: &mut Config) {
        if self.mute {
            config.sound.enabled = false;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.sorting.delay_ms = delay_ms;
        }
        if let Some(array_length) = self.array_length {
            config.sorting.array_length = array_length;
        }
        if let Some(disks) = self.disks {
            config.hanoi.disks = disks;
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}
