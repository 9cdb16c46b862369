// SPDX-License-Identifier: MPL-2.0
//! This module handles the notifier's persisted settings, loading and saving
//! them to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_notifier::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Allow more toasts on screen
//! config.max_concurrent = Some(5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.max_concurrent, Some(5));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::notification::{AnimationDuration, DisplayDuration, MaxConcurrent, Spacing};
use crate::error::Result;
use crate::notifications::NotificationConfiguration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedNotifier";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub max_concurrent: Option<usize>,
    #[serde(default)]
    pub default_duration_secs: Option<f32>,
    #[serde(default)]
    pub animation_duration_secs: Option<f32>,
    #[serde(default)]
    pub spacing: Option<f32>,
    #[serde(default)]
    pub diagnostics_buffer_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent: Some(DEFAULT_MAX_CONCURRENT),
            default_duration_secs: Some(DEFAULT_DURATION_SECS),
            animation_duration_secs: Some(DEFAULT_ANIMATION_SECS),
            spacing: Some(DEFAULT_SPACING),
            diagnostics_buffer_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

impl Config {
    /// Builds the immutable engine configuration, clamping every value into
    /// its valid range and filling gaps with defaults.
    #[must_use]
    pub fn notification_configuration(&self) -> NotificationConfiguration {
        NotificationConfiguration {
            max_concurrent: self
                .max_concurrent
                .map(MaxConcurrent::new)
                .unwrap_or_default(),
            default_duration: self
                .default_duration_secs
                .map(DisplayDuration::from_secs)
                .unwrap_or_default(),
            animation_duration: self
                .animation_duration_secs
                .map(AnimationDuration::from_secs)
                .unwrap_or_default(),
            spacing: self.spacing.map(Spacing::new).unwrap_or_default(),
        }
    }

    /// Returns the diagnostics buffer capacity, clamped.
    #[must_use]
    pub fn diagnostics_capacity(&self) -> BufferCapacity {
        self.diagnostics_buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads settings from `path`. Unparseable content yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_values() {
        let config = Config {
            max_concurrent: Some(5),
            default_duration_secs: Some(4.5),
            animation_duration_secs: Some(0.2),
            spacing: Some(12.0),
            diagnostics_buffer_capacity: Some(64),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn partial_file_keeps_missing_fields_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "max_concurrent = 2\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.max_concurrent, Some(2));
        assert!(loaded.spacing.is_none());

        let engine = loaded.notification_configuration();
        assert_eq!(engine.max_concurrent.value(), 2);
        assert_eq!(engine.spacing.value(), DEFAULT_SPACING);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            max_concurrent: Some(0),
            default_duration_secs: Some(-1.0),
            ..Config::default()
        };
        let engine = config.notification_configuration();
        assert_eq!(engine.max_concurrent.value(), MIN_MAX_CONCURRENT);
        assert!(engine.default_duration.as_duration() > Duration::ZERO);
    }

    #[test]
    fn default_config_matches_engine_defaults() {
        let engine = Config::default().notification_configuration();
        assert_eq!(engine, NotificationConfiguration::default());
        assert_eq!(engine.default_duration.as_duration(), Duration::from_secs(3));
    }
}
