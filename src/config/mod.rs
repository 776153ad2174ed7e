// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[motion]` - Animation and notification timing preferences
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_SPARKLE_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_sparkle::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning key)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSparkle";

/// Display window for toast notifications, in seconds.
pub const DEFAULT_TOAST_DURATION_SECS: u64 = 5;
pub const MIN_TOAST_DURATION_SECS: u64 = 2;
pub const MAX_TOAST_DURATION_SECS: u64 = 30;

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Animation and notification timing preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MotionConfig {
    /// Skip entrance animations, counters, and ripples entirely.
    #[serde(default)]
    pub reduced_motion: bool,

    /// Toast display window override, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toast_duration_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub motion: MotionConfig,
}

impl Config {
    /// Effective toast display window, clamped to the supported range.
    #[must_use]
    pub fn toast_duration(&self) -> std::time::Duration {
        let secs = self
            .motion
            .toast_duration_secs
            .unwrap_or(DEFAULT_TOAST_DURATION_SECS)
            .clamp(MIN_TOAST_DURATION_SECS, MAX_TOAST_DURATION_SECS);
        std::time::Duration::from_secs(secs)
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("ICED_SPARKLE_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, degrading to defaults when the file is missing
/// or unreadable. The second tuple element is a toast message key describing
/// the problem, if any.
pub fn load() -> (Config, Option<&'static str>) {
    let Some(path) = default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (Config::default(), Some("toast-config-load-warning")),
    }
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
