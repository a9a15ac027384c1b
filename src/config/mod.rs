//! Configuration system for navquill.
//!
//! This module provides the configuration structure for navquill with sensible defaults
//! and support for serialization/deserialization via serde. Configuration is loaded
//! from a TOML file and can be overridden from the command line.
//!
//! # Example
//!
//! ```
//! use navquill::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.history_limit, 15);
//! assert_eq!(config.jump_line_threshold, 11);
//!
//! // Create custom configuration
//! let custom = Config {
//!     jump_line_threshold: 20,
//!     ..Config::default()
//! };
//! ```

use crate::indicator::IndicatorStyle;
use crate::navigation::history::{DEFAULT_HISTORY_LIMIT, DEFAULT_JUMP_LINE_THRESHOLD};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for navquill.
///
/// All fields have sensible defaults via `Config::default()`.
///
/// # Fields
///
/// * `history_limit` - Combined back/forward size that triggers eviction (default: 15)
/// * `jump_line_threshold` - Minimum line distance recorded as a jump (default: 11)
/// * `log_filter` - `tracing` filter used when `RUST_LOG` is unset (default: "warn")
/// * `indicators` - Indicator channels registered on every view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Combined back/forward size that triggers eviction
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Minimum line distance for a same-document move to be recorded
    #[serde(default = "default_jump_line_threshold")]
    pub jump_line_threshold: usize,

    /// Log filter directive, e.g. "navquill=debug"
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Indicator channels registered on every view
    #[serde(default = "default_indicators")]
    pub indicators: Vec<IndicatorConfig>,
}

/// One indicator channel in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub name: String,
    pub style: IndicatorStyle,
}

/// Returns the default history limit.
fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// Returns the default jump threshold.
fn default_jump_line_threshold() -> usize {
    DEFAULT_JUMP_LINE_THRESHOLD
}

/// Returns the default log filter.
fn default_log_filter() -> String {
    "warn".to_string()
}

/// Returns the default indicator channels.
fn default_indicators() -> Vec<IndicatorConfig> {
    vec![
        IndicatorConfig {
            name: "error".to_string(),
            style: IndicatorStyle::Squiggle,
        },
        IndicatorConfig {
            name: "warning".to_string(),
            style: IndicatorStyle::Squiggle,
        },
        IndicatorConfig {
            name: "word-highlight".to_string(),
            style: IndicatorStyle::RoundBox,
        },
    ]
}

impl Default for Config {
    /// Creates a new configuration with default values.
    ///
    /// # Default Values
    ///
    /// * `history_limit`: 15
    /// * `jump_line_threshold`: 11
    /// * `log_filter`: "warn"
    /// * `indicators`: `error` and `warning` (squiggle), `word-highlight` (round box)
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            jump_line_threshold: default_jump_line_threshold(),
            log_filter: default_log_filter(),
            indicators: default_indicators(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/navquill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("navquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        Self::load_from(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring config {}: {:#}", config_path.display(), e);
            Self::default()
        })
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or sets
    /// a zero `history_limit`.
    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents).context("Failed to parse config")?;

        if config.history_limit == 0 {
            anyhow::bail!("history_limit must be at least 1");
        }
        Ok(config)
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to an explicit path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("jump_line_threshold = 4").unwrap();
        assert_eq!(config.jump_line_threshold, 4);
        assert_eq!(config.history_limit, 15);
        assert_eq!(config.indicators.len(), 3);
    }

    #[test]
    fn test_indicator_styles_parse() {
        let config: Config = toml::from_str(
            r#"
            [[indicators]]
            name = "search"
            style = "straight-box"
            "#,
        )
        .unwrap();
        assert_eq!(config.indicators.len(), 1);
        assert_eq!(config.indicators[0].style, IndicatorStyle::StraightBox);
    }
}
