// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! notification defaults to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use reey_notifications::config::{self, Config};
//! use reey_notifications::registry::Registry;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.default_time_ms = Some(3000);
//!
//! // Register the component with the configured defaults
//! let registry = Registry::from_config(&config).expect("Failed to register");
//! assert!(registry.is_registered());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::notification::Level;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ReeyNotifications";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name the component registers under.
    #[serde(default)]
    pub name: Option<String>,
    /// Auto-dismiss time in milliseconds. `0` disables auto-dismiss.
    #[serde(default)]
    pub default_time_ms: Option<u64>,
    #[serde(default)]
    pub default_level: Option<Level>,
    #[serde(default)]
    pub closeable: Option<bool>,
    #[serde(default)]
    pub transition_ms: Option<u64>,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub spacing: Option<f32>,
    #[serde(default)]
    pub padding: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: Some(DEFAULT_NAME.to_string()),
            default_time_ms: Some(DEFAULT_TIME_MS),
            default_level: Some(Level::Default),
            closeable: Some(DEFAULT_CLOSEABLE),
            transition_ms: Some(TRANSITION_DURATION_MS),
            width: Some(CONTAINER_WIDTH),
            spacing: Some(ITEM_SPACING),
            padding: Some(CONTAINER_PADDING),
        }
    }
}

impl Config {
    /// Resolved auto-dismiss time, `None` meaning "never".
    #[must_use]
    pub fn default_time(&self) -> Option<Duration> {
        match self.default_time_ms.unwrap_or(DEFAULT_TIME_MS) {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid notifications config, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
