//! Configuration management for coin selection.
//!
//! This module handles settings stored in TOML format. It provides a
//! strongly-typed configuration structure with validation and reasonable
//! defaults. Every section is optional; a missing file section falls back to
//! its defaults.
//!
//! ```toml
//! [selection]
//! strategy = "largest_first"
//! max_inputs = 0            # 0 = unlimited
//!
//! [logging]
//! level = "info"
//! json_format = false
//! ```

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::logging::LogConfig;
use crate::utxo_selection::types::{SelectionStrategy, UNLIMITED_INPUTS};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub logging: LogConfig,
}

/// Selection-specific configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SelectionConfig {
    /// Ordering used by the selector
    #[serde(default)]
    pub strategy: SelectionStrategy,

    /// Input cap applied when the caller does not pass one (0 = unlimited)
    #[serde(default)]
    pub max_inputs: usize,
}

impl SelectionConfig {
    /// Input cap to apply, mapping the `0 = unlimited` convention
    pub fn effective_max_inputs(&self) -> usize {
        if self.max_inputs == 0 {
            UNLIMITED_INPUTS
        } else {
            self.max_inputs
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| anyhow!("Failed to parse config file: {}", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        log::debug!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(log_file) = &self.logging.log_file {
            if log_file.trim().is_empty() {
                anyhow::bail!("Invalid log file: path must not be empty");
            }
        }

        if self.logging.json_format && !self.logging.console_logging && self.logging.log_file.is_none() {
            anyhow::bail!("Invalid logging setup: json_format set but no log destination enabled");
        }

        Ok(())
    }
}

/// Ensure a configuration file exists at the specified path
/// If it doesn't exist, create it with default values
pub fn ensure_config_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| anyhow!("Failed to create config directory: {}", e))?;
            }
        }

        Config::default().save(path)?;
    }

    Ok(())
}
