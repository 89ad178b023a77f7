// SPDX-License-Identifier: MPL-2.0
//! This module handles the alert configuration, loading and saving defaults
//! to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode of the host window
//! - `[appearance]` - Corner radius, backdrop opacity, action spacing
//! - `[behavior]` - Backdrop-tap dismissal, action axis, animations
//!
//! Values read from disk are clamped to their valid range when applied, so a
//! hand-edited file cannot produce a negative radius or an opacity above 1.
//!
//! # Examples
//!
//! ```no_run
//! use iced_alert::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.behavior.cancelable = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::alert::ActionAxis;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Serialized form of [`ActionAxis`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AxisSetting {
    #[default]
    Horizontal,
    Vertical,
}

impl From<AxisSetting> for ActionAxis {
    fn from(setting: AxisSetting) -> Self {
        match setting {
            AxisSetting::Horizontal => ActionAxis::Horizontal,
            AxisSetting::Vertical => ActionAxis::Vertical,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General settings of the host window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Visual defaults applied to every alert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    /// Corner radius of the alert surface.
    #[serde(default = "default_corner_radius", skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,

    /// Opacity of the dimming backdrop (0.0 to 1.0).
    #[serde(default = "default_backdrop_opacity", skip_serializing_if = "Option::is_none")]
    pub backdrop_opacity: Option<f32>,

    /// Spacing between actions.
    #[serde(default = "default_action_spacing", skip_serializing_if = "Option::is_none")]
    pub action_spacing: Option<f32>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            corner_radius: default_corner_radius(),
            backdrop_opacity: default_backdrop_opacity(),
            action_spacing: default_action_spacing(),
        }
    }
}

impl AppearanceConfig {
    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
            .unwrap_or(DEFAULT_CORNER_RADIUS)
            .max(0.0)
    }

    #[must_use]
    pub fn backdrop_opacity(&self) -> f32 {
        self.backdrop_opacity
            .unwrap_or(DEFAULT_BACKDROP_OPACITY)
            .clamp(MIN_BACKDROP_OPACITY, MAX_BACKDROP_OPACITY)
    }

    #[must_use]
    pub fn action_spacing(&self) -> f32 {
        self.action_spacing
            .unwrap_or(DEFAULT_ACTION_SPACING)
            .max(0.0)
    }
}

/// Interaction defaults applied to every alert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BehaviorConfig {
    /// Dismiss when the backdrop is tapped.
    #[serde(default = "default_cancelable", skip_serializing_if = "Option::is_none")]
    pub cancelable: Option<bool>,

    /// Lay actions out in a row or a column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_axis: Option<AxisSetting>,

    /// Animate entrance and exit.
    #[serde(
        default = "default_animations_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub animations_enabled: Option<bool>,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            cancelable: default_cancelable(),
            action_axis: Some(AxisSetting::default()),
            animations_enabled: default_animations_enabled(),
        }
    }
}

impl BehaviorConfig {
    #[must_use]
    pub fn cancelable(&self) -> bool {
        self.cancelable.unwrap_or(DEFAULT_CANCELABLE)
    }

    #[must_use]
    pub fn action_axis(&self) -> ActionAxis {
        self.action_axis.unwrap_or_default().into()
    }

    #[must_use]
    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled
            .unwrap_or(DEFAULT_ANIMATIONS_ENABLED)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Alert configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub appearance: AppearanceConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_corner_radius() -> Option<f32> {
    Some(DEFAULT_CORNER_RADIUS)
}

fn default_backdrop_opacity() -> Option<f32> {
    Some(DEFAULT_BACKDROP_OPACITY)
}

fn default_action_spacing() -> Option<f32> {
    Some(DEFAULT_ACTION_SPACING)
}

fn default_cancelable() -> Option<bool> {
    Some(DEFAULT_CANCELABLE)
}

fn default_animations_enabled() -> Option<bool> {
    Some(DEFAULT_ANIMATIONS_ENABLED)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

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
                    log::warn!("ignoring {}: {err}", path.display());
                    return (Config::default(), Some(err.to_string()));
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

// =============================================================================
// Save Functions
// =============================================================================

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

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            appearance: AppearanceConfig {
                corner_radius: Some(6.0),
                backdrop_opacity: Some(0.5),
                action_spacing: Some(4.0),
            },
            behavior: BehaviorConfig {
                cancelable: Some(true),
                action_axis: Some(AxisSetting::Vertical),
                animations_enabled: Some(false),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_to_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[behavior]\ncancelable = 3")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn missing_file_yields_default_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[behavior]\naction_axis = \"vertical\"\n")
            .expect("failed to write config");

        let config = load_from_path(&config_path).expect("load should succeed");

        assert_eq!(config.behavior.action_axis(), ActionAxis::Vertical);
        assert_eq!(config.behavior.cancelable(), DEFAULT_CANCELABLE);
        assert_eq!(config.appearance, AppearanceConfig::default());
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let appearance = AppearanceConfig {
            corner_radius: Some(-5.0),
            backdrop_opacity: Some(2.0),
            action_spacing: Some(-1.0),
        };

        assert_eq!(appearance.corner_radius(), 0.0);
        assert_eq!(appearance.backdrop_opacity(), MAX_BACKDROP_OPACITY);
        assert_eq!(appearance.action_spacing(), 0.0);
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");

        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }
}
