//! Configuration module for the sensor logger
//!
//! Logger settings live in a small TOML file:
//!
//! ```toml
//! file_path = "drone_sensors.csv"
//! notifications = "stdout"   # stdout | tracing | silent
//! ```
//!
//! Every key is optional; missing keys take the defaults below.
//!
//! # Example
//!
//! ```ignore
//! use sensor_logger::{config::LoggerConfig, DataLogger};
//!
//! let config = LoggerConfig::load("logger.toml")?;
//! let mut logger = DataLogger::from_config(&config);
//! ```

use crate::error::{LoggerError, Result, ResultExt};
use crate::logger::DEFAULT_LOG_PATH;
use crate::sink::NotificationMode;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings for constructing a [`DataLogger`](crate::DataLogger)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggerConfig {
    /// Target file for flushed readings
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,

    /// Where status notifications go
    #[serde(default)]
    pub notifications: NotificationMode,
}

fn default_file_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file_path: default_file_path(),
            notifications: NotificationMode::default(),
        }
    }
}

impl LoggerConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| LoggerError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from a TOML file
    ///
    /// Errors are wrapped with the path that was being loaded.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| LoggerError::Config(format!("Failed to read config: {}", e)))
            .with_context(|| format!("Loading {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Loading {}", path.display()))
    }

    /// Load configuration, returning defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load logger config, using defaults: {}", e);
            Self::default()
        })
    }
}
