// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Values are layered: built-in defaults, then the TOML config file, then
//! `TYPECODE_REGISTRY_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Backend used when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "TYPECODE_REGISTRY";

/// Keys accepted by `config <key> [value]`
pub const KEYS: [&str; 4] = ["backend_url", "request_timeout_secs", "log_level", "legacy_item_details"];

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Layering or deserializing failed
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    /// Config file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File path
        path: PathBuf,
        /// Cause
        source: std::io::Error,
    },
    /// Config file is not valid TOML
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// File path
        path: PathBuf,
        /// Cause
        source: toml::de::Error,
    },
    /// Config file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File path
        path: PathBuf,
        /// Cause
        source: std::io::Error,
    },
    /// Table could not be rendered back to TOML
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Key is not one of [`KEYS`]
    #[error("Unknown configuration key: {0}. Valid: backend_url, request_timeout_secs, log_level, legacy_item_details")]
    UnknownKey(String),
    /// Value does not fit the key
    #[error("Invalid value for {key}: {value} (expected {expected})")]
    InvalidValue {
        /// Key being set
        key: String,
        /// Rejected value
        value: String,
        /// What the key accepts
        expected: &'static str,
    },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the registry backend
    pub backend_url: String,
    /// Per-request timeout
    pub request_timeout_secs: u64,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// List items through the older `/items/details` endpoint
    pub legacy_item_details: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: 30,
            log_level: "info".to_string(),
            legacy_item_details: false,
        }
    }
}

impl Config {
    /// Load defaults, the config file at `path` (default location when `None`) and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map_or_else(default_path, Path::to_path_buf);
        let defaults = Self::default();

        let layers = config::Config::builder()
            .set_default("backend_url", defaults.backend_url)?
            .set_default("request_timeout_secs", 30_i64)?
            .set_default("log_level", defaults.log_level)?
            .set_default("legacy_item_details", defaults.legacy_item_details)?
            .add_source(config::File::from(path.as_path()).format(config::FileFormat::Toml).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: Self = layers.try_deserialize()?;
        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Value of a key as text
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "backend_url" => Ok(self.backend_url.clone()),
            "request_timeout_secs" => Ok(self.request_timeout_secs.to_string()),
            "log_level" => Ok(self.log_level.clone()),
            "legacy_item_details" => Ok(self.legacy_item_details.to_string()),
            other => Err(ConfigError::UnknownKey(other.to_string())),
        }
    }
}

/// Default config file location
#[must_use]
pub fn default_path() -> PathBuf {
    directories::ProjectDirs::from("com", "hyperpolymath", "typecode-registry")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".typecode-registry")
                .join("config.toml")
        })
}

/// Write one key into the config file, keeping the others
pub fn set_value(path: &Path, key: &str, value: &str) -> Result<(), ConfigError> {
    let parsed = parse_value(key, value)?;

    let mut table = if path.exists() {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse::<toml::Table>().map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        toml::Table::new()
    };
    table.insert(key.to_string(), parsed);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let rendered = toml::to_string_pretty(&table)?;
    std::fs::write(path, rendered).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Set {} = {} in {}", key, value, path.display());
    Ok(())
}

fn parse_value(key: &str, value: &str) -> Result<toml::Value, ConfigError> {
    let invalid = |expected| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    };

    match key {
        "backend_url" => {
            if value.starts_with("http://") || value.starts_with("https://") {
                Ok(toml::Value::String(value.trim_end_matches('/').to_string()))
            } else {
                Err(invalid("an http:// or https:// URL"))
            }
        }
        "request_timeout_secs" => value
            .parse::<u32>()
            .map(|secs| toml::Value::Integer(i64::from(secs)))
            .map_err(|_| invalid("a number of seconds")),
        "log_level" => {
            let level = value.to_ascii_lowercase();
            if LOG_LEVELS.contains(&level.as_str()) {
                Ok(toml::Value::String(level))
            } else {
                Err(invalid("one of trace, debug, info, warn, error"))
            }
        }
        "legacy_item_details" => value
            .parse::<bool>()
            .map(toml::Value::Boolean)
            .map_err(|_| invalid("true or false")),
        other => Err(ConfigError::UnknownKey(other.to_string())),
    }
}
