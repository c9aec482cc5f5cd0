use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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
    /// Uses `~/.config/ppvcalc/config.toml` on Unix/macOS, or equivalent on
    /// other platforms via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("ppvcalc").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`; an existing file is
    /// parsed as TOML and validated.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path.
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
    /// The file supplies startup defaults, so unlike the live controls it
    /// is held to the displayable ranges: percentages in [0, 100] and a
    /// positive population.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pcts = [
            ("sensitivity_pct", self.defaults.sensitivity_pct),
            ("specificity_pct", self.defaults.specificity_pct),
            ("prevalence_pct", self.defaults.prevalence_pct),
        ];
        for (name, value) in pcts {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be between 0 and 100, got {}", name, value),
                });
            }
        }

        if self.defaults.population < 1 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "population must be at least 1, got {}",
                    self.defaults.population
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}
