// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[snackbar]` - Timeout, placement and look of the snackbar
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_SNACKBAR_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config::{self, Config};
//! use iced_snackbar::ui::snackbar::Timeout;
//!
//! let (mut config, _warning) = config::load();
//! config.snackbar.timeout = Timeout::from_millis(8000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::snackbar::{Location, Rounded, SnackbarOptions, Timeout, Variant};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Snackbar behaviour and presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnackbarConfig {
    /// Auto-dismiss delay in milliseconds, `-1` to disable.
    ///
    /// Accepts numbers or numeric strings; anything else disables auto-dismiss.
    #[serde(default)]
    pub timeout: Timeout,

    #[serde(default = "default_message")]
    pub message: String,

    #[serde(default)]
    pub location: Location,

    #[serde(default)]
    pub variant: Variant,

    #[serde(default)]
    pub rounded: Rounded,

    #[serde(default)]
    pub vertical: bool,

    #[serde(default)]
    pub multi_line: bool,
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        Self {
            timeout: Timeout::default(),
            message: default_message(),
            location: Location::default(),
            variant: Variant::default(),
            rounded: Rounded::default(),
            vertical: false,
            multi_line: false,
        }
    }
}

impl SnackbarConfig {
    /// Presentation options described by this section.
    #[must_use]
    pub fn options(&self) -> SnackbarOptions {
        SnackbarOptions::default()
            .with_location(self.location)
            .with_variant(self.variant)
            .with_rounded(self.rounded)
            .vertical(self.vertical)
            .multi_line(self.multi_line)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub snackbar: SnackbarConfig,
}

fn default_message() -> String {
    DEFAULT_SNACKBAR_MESSAGE.to_string()
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some(format!("Settings could not be read: {err}")),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
