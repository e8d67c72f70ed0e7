//! Configuration management for the address book binary.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the address book binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,

    /// Directory created at startup (default: "Personal")
    pub default_directory: String,

    /// Whether to run the demo walkthrough on startup (default: true)
    pub seed_demo: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `ADDRESS_BOOK_DEFAULT_DIRECTORY`: Name of the startup directory (default: "Personal")
    /// - `ADDRESS_BOOK_SEED_DEMO`: Run the demo walkthrough (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let default_directory =
            env::var("ADDRESS_BOOK_DEFAULT_DIRECTORY").unwrap_or(defaults.default_directory);
        if default_directory.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_DEFAULT_DIRECTORY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let seed_demo = Self::parse_env_bool("ADDRESS_BOOK_SEED_DEMO", defaults.seed_demo)?;

        Ok(Config {
            log_level,
            default_directory,
            seed_demo,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            default_directory: "Personal".to_string(),
            seed_demo: true,
        }
    }
}
