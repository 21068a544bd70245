// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Window theme
//! - `[carousel]` - Defaults shared by every carousel on the page
//! - `[[sections]]` - Page sections; their `id` is what a carousel mounts into
//! - `[[carousels]]` - Carousel instances: container, images, and optional
//!   overrides of any `[carousel]` key
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. `ICED_CAROUSEL_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_carousel::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.carousel.delay_ms = Some(5000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::carousel::{CarouselOptions, CornerRadius, Easing, LayoutDirection};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub theme: ThemeMode,
}

/// Carousel options. Every field is optional so the same shape serves as
/// page-wide defaults and as per-instance overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CarouselSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Autoplay period in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightbox: Option<bool>,

    /// CSS-like length, e.g. `"10px"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_corner: Option<String>,

    /// Space between slides in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clone_count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,

    /// Timing curve of slide moves: `"ease"`, `"linear"` or `"ease-out"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<LayoutDirection>,
}

impl CarouselSettings {
    /// Layers `overrides` on top of `self`, field by field.
    #[must_use]
    pub fn merged_with(&self, overrides: &CarouselSettings) -> CarouselSettings {
        CarouselSettings {
            autoplay: overrides.autoplay.or(self.autoplay),
            delay_ms: overrides.delay_ms.or(self.delay_ms),
            lightbox: overrides.lightbox.or(self.lightbox),
            round_corner: overrides
                .round_corner
                .clone()
                .or_else(|| self.round_corner.clone()),
            gap: overrides.gap.or(self.gap),
            clone_count: overrides.clone_count.or(self.clone_count),
            transition_ms: overrides.transition_ms.or(self.transition_ms),
            easing: overrides.easing.or(self.easing),
            direction: overrides.direction.or(self.direction),
        }
    }

    /// Turns the settings into runtime options, validating and clamping.
    ///
    /// Returns an error only for an unparsable corner radius; numeric values
    /// are clamped into their supported ranges.
    pub fn resolve(&self) -> Result<CarouselOptions> {
        let defaults = CarouselOptions::default();

        let round_corner = match &self.round_corner {
            Some(raw) => raw.parse::<CornerRadius>()?,
            None => defaults.round_corner,
        };

        let options = CarouselOptions {
            autoplay: self.autoplay.unwrap_or(defaults.autoplay),
            lightbox: self.lightbox.unwrap_or(defaults.lightbox),
            round_corner,
            gap: self.gap.map_or(defaults.gap, |gap| gap.clamp(0.0, MAX_GAP_PX)),
            clone_count: self
                .clone_count
                .map_or(defaults.clone_count, |count| count.clamp(1, MAX_CLONE_COUNT)),
            transition: self.transition_ms.map_or(defaults.transition, |ms| {
                Duration::from_millis(ms.clamp(1, MAX_TRANSITION_MS))
            }),
            easing: self.easing.unwrap_or(defaults.easing),
            direction: self.direction.unwrap_or(defaults.direction),
            ..defaults
        };

        Ok(match self.delay_ms {
            Some(ms) => options.with_delay_ms(ms),
            None => options,
        })
    }
}

/// A page section that can host a carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionConfig {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// One carousel instance on the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselEntry {
    /// Section id the carousel mounts into. A leading `#` is accepted.
    pub container: String,
    /// Image paths or http(s) URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(flatten)]
    pub overrides: CarouselSettings,
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    /// Defaults applied to every carousel.
    #[serde(default)]
    pub carousel: CarouselSettings,

    #[serde(default = "default_sections")]
    pub sections: Vec<SectionConfig>,

    #[serde(default)]
    pub carousels: Vec<CarouselEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            carousel: CarouselSettings::default(),
            sections: default_sections(),
            carousels: Vec::new(),
        }
    }
}

fn default_sections() -> Vec<SectionConfig> {
    vec![SectionConfig {
        id: "gallery".to_string(),
        title: "Gallery".to_string(),
    }]
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
                    return (
                        Config::default(),
                        Some(format!("{}: {}, using defaults", path.display(), err)),
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
