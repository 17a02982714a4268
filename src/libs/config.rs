//! Configuration management for the walt application.
//!
//! Settings live in a JSON file under the platform data directory and cover
//! the activity monitor, the storage location, and the title ignore patterns.
//! A missing file is not an error; defaults apply. The interactive `init`
//! wizard fills the same structures.
//!
//! Changing a value in the file does not reach a running watch process by
//! itself; the coordinating layer forwards new values through
//! [`crate::libs::tracker::Tracker::on_config_change`].

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Activity monitor configuration settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonitorConfig {
    /// Poll interval in seconds between foreground window samples.
    ///
    /// Values below one second are clamped by the monitor. Lower values
    /// catch shorter activity at the cost of more sampling work.
    pub poll_interval: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig { poll_interval: 30 }
    }
}

/// Storage location settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct StorageConfig {
    /// Explicit database file path. `None` means the platform default
    /// location under the application data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

/// Main configuration container for the entire application.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Activity monitoring configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorConfig>,

    /// Storage location configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    /// Regex patterns for window titles that must not be logged.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_patterns: Vec<String>,
}

impl Config {
    /// Reads configuration from the filesystem, falling back to defaults
    /// when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the effective database path: the configured one, or
    /// `walt.db` under the platform data directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Some(storage) = &self.storage {
            if let Some(path) = &storage.database_path {
                return Ok(path.clone());
            }
        }
        DataStorage::new().get_path(DB_FILE_NAME)
    }

    /// Effective polling interval in seconds.
    pub fn poll_interval(&self) -> u64 {
        self.monitor.clone().unwrap_or_default().poll_interval
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Existing values are offered as defaults so re-running the wizard
    /// only changes what the user edits.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let monitor_default = config.monitor.clone().unwrap_or_default();

        config.monitor = Some(MonitorConfig {
            poll_interval: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPollInterval.to_string())
                .default(monitor_default.poll_interval)
                .interact_text()?,
        });

        let path_default = config
            .storage
            .as_ref()
            .and_then(|s| s.database_path.as_ref())
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .allow_empty(true)
            .default(path_default)
            .interact_text()?;
        config.storage = Some(StorageConfig {
            database_path: if path.trim().is_empty() { None } else { Some(PathBuf::from(path.trim())) },
        });

        let patterns_default = config.ignore_patterns.join(", ");
        let patterns: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptIgnorePatterns.to_string())
            .allow_empty(true)
            .default(patterns_default)
            .interact_text()?;
        config.ignore_patterns = patterns
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        Ok(config)
    }
}
