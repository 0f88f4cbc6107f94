//! Application configuration management
//!
//! Configuration is read from environment variables (and an optional `.env`
//! file) once at startup and passed explicitly to whatever needs it.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_DATA_PATH, DEFAULT_HEATMAP_BUCKETS, DEFAULT_PAGE_SIZE, DEFAULT_RUST_LOG,
    MAX_PAGE_SIZE,
};

/// Main application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data: DataConfig,
    pub logging: LoggingConfig,
    pub board: BoardConfig,
}

/// Where contest exports live
#[derive(Debug, Clone, PartialEq)]
pub struct DataConfig {
    pub path: PathBuf,
}

/// Tracing setup
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub rust_log: String,
    pub format: LogFormat,
}

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Board computation defaults
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Heatmap buckets for statistics, 0 for exact timestamps
    pub heatmap_buckets: usize,
    pub default_page_size: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            data: DataConfig::from_vars(&var),
            logging: LoggingConfig::from_vars(&var)?,
            board: BoardConfig::from_vars(&var)?,
        })
    }
}

impl DataConfig {
    fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            path: PathBuf::from(
                var("SCOREBOARD_DATA_PATH").unwrap_or_else(|| DEFAULT_DATA_PATH.to_string()),
            ),
        }
    }
}

impl LoggingConfig {
    fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            rust_log: var("RUST_LOG").unwrap_or_else(|| DEFAULT_RUST_LOG.to_string()),
            format: match var("LOG_FORMAT") {
                Some(format) => format
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("LOG_FORMAT".to_string()))?,
                None => LogFormat::default(),
            },
        })
    }
}

impl BoardConfig {
    fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default_page_size: usize = var("DEFAULT_PAGE_SIZE")
            .unwrap_or_else(|| DEFAULT_PAGE_SIZE.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("DEFAULT_PAGE_SIZE".to_string()))?;
        if default_page_size == 0 || default_page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidValue("DEFAULT_PAGE_SIZE".to_string()));
        }

        Ok(Self {
            heatmap_buckets: var("HEATMAP_BUCKETS")
                .unwrap_or_else(|| DEFAULT_HEATMAP_BUCKETS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HEATMAP_BUCKETS".to_string()))?,
            default_page_size,
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = load(&[]).unwrap();
        assert_eq!(config.data.path, PathBuf::from("data"));
        assert_eq!(config.logging.rust_log, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert_eq!(config.board.heatmap_buckets, 0);
        assert_eq!(config.board.default_page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SCOREBOARD_DATA_PATH", "/srv/boards"),
            ("RUST_LOG", "scoreboard=debug"),
            ("LOG_FORMAT", "JSON"),
            ("HEATMAP_BUCKETS", "30"),
            ("DEFAULT_PAGE_SIZE", "50"),
        ])
        .unwrap();
        assert_eq!(config.data.path, PathBuf::from("/srv/boards"));
        assert_eq!(config.logging.rust_log, "scoreboard=debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.board.heatmap_buckets, 30);
        assert_eq!(config.board.default_page_size, 50);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("LOG_FORMAT", "xml")]),
            Err(ConfigError::InvalidValue(name)) if name == "LOG_FORMAT"
        ));
        assert!(matches!(
            load(&[("HEATMAP_BUCKETS", "-1")]),
            Err(ConfigError::InvalidValue(name)) if name == "HEATMAP_BUCKETS"
        ));
        assert!(matches!(
            load(&[("DEFAULT_PAGE_SIZE", "0")]),
            Err(ConfigError::InvalidValue(name)) if name == "DEFAULT_PAGE_SIZE"
        ));
    }
}
