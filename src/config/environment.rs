// ABOUTME: Environment configuration for the storage backend, history polling and defaults
// ABOUTME: Parses environment variables into strongly typed settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use bmi_core::constants::storage::{DATA_DIR_NAME, DEFAULT_HISTORY_POLL_INTERVAL_SECS};
use bmi_core::errors::{AppError, AppResult};
use bmi_core::models::{HeightUnit, WeightUnit};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Environment variable names
pub mod env_config {
    /// `file` or `memory`
    pub const STORAGE_BACKEND: &str = "BMI_STORAGE_BACKEND";
    /// Data directory for the file backend
    pub const DATA_DIR: &str = "BMI_DATA_DIR";
    /// History refresh interval in seconds
    pub const HISTORY_POLL_SECS: &str = "BMI_HISTORY_POLL_SECS";
    /// Initial height unit on the form
    pub const DEFAULT_HEIGHT_UNIT: &str = "BMI_DEFAULT_HEIGHT_UNIT";
    /// Initial weight unit on the form
    pub const DEFAULT_WEIGHT_UNIT: &str = "BMI_DEFAULT_WEIGHT_UNIT";
    /// Initial theme flag
    pub const DARK_THEME: &str = "BMI_DARK_THEME";
}

/// Storage backend type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local, lost on exit
    Memory,
    /// Files under the data directory
    #[default]
    File,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            other => Err(AppError::config(format!(
                "Unknown storage backend: '{other}'. Valid options: file, memory"
            ))),
        }
    }
}

/// Where the history log is kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Backend type
    pub backend: StorageBackend,
    /// Directory used by the file backend
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Storage backend settings
    pub storage: StorageConfig,
    /// How often the history view re-reads the log
    pub history_poll_interval: Duration,
    /// Height unit preselected on a fresh form
    pub default_height_unit: HeightUnit,
    /// Weight unit preselected on a fresh form
    pub default_weight_unit: WeightUnit,
    /// Initial theme flag
    pub dark_theme: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            history_poll_interval: Duration::from_secs(DEFAULT_HISTORY_POLL_INTERVAL_SECS),
            default_height_unit: HeightUnit::Centimeters,
            default_weight_unit: WeightUnit::Pounds,
            dark_theme: false,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any variable holds an invalid value
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any variable holds an invalid value
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let backend = lookup(env_config::STORAGE_BACKEND)
            .map_or(Ok(defaults.storage.backend), |v| v.parse())?;

        let data_dir = lookup(env_config::DATA_DIR)
            .filter(|v| !v.trim().is_empty())
            .map_or(defaults.storage.data_dir, PathBuf::from);

        let history_poll_interval = lookup(env_config::HISTORY_POLL_SECS).map_or(
            Ok(defaults.history_poll_interval),
            |v| parse_poll_interval(&v),
        )?;

        let default_height_unit = lookup(env_config::DEFAULT_HEIGHT_UNIT)
            .map_or(Ok(defaults.default_height_unit), |v| {
                v.parse().map_err(|e: AppError| {
                    AppError::config(format!("{}: {}", env_config::DEFAULT_HEIGHT_UNIT, e.message))
                })
            })?;

        let default_weight_unit = lookup(env_config::DEFAULT_WEIGHT_UNIT)
            .map_or(Ok(defaults.default_weight_unit), |v| {
                v.parse().map_err(|e: AppError| {
                    AppError::config(format!("{}: {}", env_config::DEFAULT_WEIGHT_UNIT, e.message))
                })
            })?;

        let dark_theme = lookup(env_config::DARK_THEME)
            .map_or(Ok(defaults.dark_theme), |v| parse_bool(env_config::DARK_THEME, &v))?;

        let config = Self {
            storage: StorageConfig { backend, data_dir },
            history_poll_interval,
            default_height_unit,
            default_weight_unit,
            dark_theme,
        };
        debug!(?config, "Loaded configuration");
        Ok(config)
    }
}

/// Platform data directory for the file backend, `./data` if unknown
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || PathBuf::from("./data"),
        |dir| dir.join(DATA_DIR_NAME),
    )
}

fn parse_poll_interval(value: &str) -> AppResult<Duration> {
    let seconds: u64 = value.trim().parse().map_err(|_| {
        AppError::config(format!(
            "{}: expected a whole number of seconds, got '{value}'",
            env_config::HISTORY_POLL_SECS
        ))
    })?;
    if seconds == 0 {
        return Err(AppError::config(format!(
            "{} must be greater than zero",
            env_config::HISTORY_POLL_SECS
        )));
    }
    Ok(Duration::from_secs(seconds))
}

fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::config(format!(
            "{key}: expected true or false, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_core::errors::ErrorCode;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = TrackerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.history_poll_interval, Duration::from_secs(2));
        assert_eq!(config.default_height_unit, HeightUnit::Centimeters);
        assert_eq!(config.default_weight_unit, WeightUnit::Pounds);
    }

    #[test]
    fn test_overrides() {
        let config = TrackerConfig::from_lookup(lookup_from(&[
            (env_config::STORAGE_BACKEND, "memory"),
            (env_config::DATA_DIR, "/tmp/bmi"),
            (env_config::HISTORY_POLL_SECS, "5"),
            (env_config::DEFAULT_HEIGHT_UNIT, "ft-in"),
            (env_config::DEFAULT_WEIGHT_UNIT, "kg"),
            (env_config::DARK_THEME, "yes"),
        ]))
        .unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/bmi"));
        assert_eq!(config.history_poll_interval, Duration::from_secs(5));
        assert_eq!(config.default_height_unit, HeightUnit::FeetInches);
        assert_eq!(config.default_weight_unit, WeightUnit::Kilograms);
        assert!(config.dark_theme);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        for (key, value) in [
            (env_config::STORAGE_BACKEND, "redis"),
            (env_config::HISTORY_POLL_SECS, "0"),
            (env_config::HISTORY_POLL_SECS, "fast"),
            (env_config::DEFAULT_WEIGHT_UNIT, "stone"),
            (env_config::DARK_THEME, "maybe"),
        ] {
            let error = TrackerConfig::from_lookup(lookup_from(&[(key, value)])).unwrap_err();
            assert_eq!(error.code, ErrorCode::ConfigInvalid, "{key}={value}");
        }
    }
}
