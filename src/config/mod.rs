// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[gesture]` - Swipe threshold and opening curve
//! - `[library]` - How covers are ordered in a directory
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set `COVER_SWIPE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use cover_swipe::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Require a longer pull before skipping
//! config.gesture.threshold = 320.0;
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Swipe gesture tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Distance a release has to cover to commit to previous/next.
    #[serde(default = "default_threshold")]
    pub threshold: f32,

    /// Multiplier of the logarithmic opening curve.
    #[serde(default = "default_opening_multiplier")]
    pub opening_multiplier: f32,

    /// Offset added to the touch-down coordinate.
    #[serde(default = "default_touch_down_offset")]
    pub touch_down_offset: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SWIPE_THRESHOLD,
            opening_multiplier: DEFAULT_OPENING_MULTIPLIER,
            touch_down_offset: DEFAULT_TOUCH_DOWN_OFFSET,
        }
    }
}

impl GestureConfig {
    /// Clamps every value into its supported range so persisted configs cannot
    /// produce a gesture that never commits or never opens.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            threshold: clamp_or(
                self.threshold,
                MIN_SWIPE_THRESHOLD,
                MAX_SWIPE_THRESHOLD,
                DEFAULT_SWIPE_THRESHOLD,
            ),
            opening_multiplier: clamp_or(
                self.opening_multiplier,
                MIN_OPENING_MULTIPLIER,
                MAX_OPENING_MULTIPLIER,
                DEFAULT_OPENING_MULTIPLIER,
            ),
            touch_down_offset: clamp_or(
                self.touch_down_offset,
                -MAX_TOUCH_DOWN_OFFSET,
                MAX_TOUCH_DOWN_OFFSET,
                DEFAULT_TOUCH_DOWN_OFFSET,
            ),
        }
    }
}

fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

/// Cover library settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibraryConfig {
    /// Cover file sorting order in directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            sort_order: Some(SortOrder::default()),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub gesture: GestureConfig,

    #[serde(default)]
    pub library: LibraryConfig,
}

fn default_threshold() -> f32 {
    DEFAULT_SWIPE_THRESHOLD
}

fn default_opening_multiplier() -> f32 {
    DEFAULT_OPENING_MULTIPLIER
}

fn default_touch_down_offset() -> f32 {
    DEFAULT_TOUCH_DOWN_OFFSET
}

// =============================================================================
// Load / Save
// =============================================================================

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
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
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
