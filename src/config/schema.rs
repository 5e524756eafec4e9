//! Configuration schema types
//!
//! This module defines the root configuration structure that maps to the
//! TOML file embedding applications hand to Veil.

use crate::anonymization::config::KAnonymityConfig;
use crate::domain::result::Result;
use serde::{Deserialize, Serialize};

/// Root Veil configuration
///
/// Maps 1:1 to the TOML file layout:
///
/// ```toml
/// [anonymization]
/// k = 3
/// categorical_method = "generalization"
/// numerical_method = "binning"
/// bin_count = 5
///
/// [logging]
/// level = "info"
/// local_enabled = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VeilConfig {
    /// Anonymization engine settings
    #[serde(default)]
    pub anonymization: KAnonymityConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for VeilConfig {
    fn default() -> Self {
        Self {
            anonymization: KAnonymityConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl VeilConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<()> {
        self.anonymization.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Loads configuration from a TOML file
    ///
    /// Convenience wrapper around [`loader::load_config`](crate::config::loader::load_config).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        crate::config::loader::load_config(path)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log file rotation (daily or hourly)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<()> {
        use crate::domain::errors::ConfigurationError;

        match self.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigurationError::Parse(format!(
                    "Invalid log level: {other}. Must be one of: trace, debug, info, warn, error"
                ))
                .into())
            }
        }

        match self.local_rotation.as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(ConfigurationError::Parse(format!(
                "Invalid log rotation: {other}. Must be daily or hourly"
            ))
            .into()),
        }
    }
}
