// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[kiosk]` - Kiosk notification timing
//! - `[auth]` - Login and register form validation
//!
//! Kiosk mode itself is never written here: every launch starts with it disabled.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `KIOSK_DASH_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use kiosk_dash::config;
//! use std::path::Path;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("ru".to_string());
//! config::save_to_path(&config, Path::new("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::i18n;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ru").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Kiosk mode timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KioskConfig {
    /// How long the kiosk notification stays visible (milliseconds).
    #[serde(
        default = "default_notification_hide_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub notification_hide_ms: Option<u64>,

    /// Delay between enabling kiosk mode and showing the notification (milliseconds).
    #[serde(
        default = "default_announce_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub announce_delay_ms: Option<u64>,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            notification_hide_ms: default_notification_hide_ms(),
            announce_delay_ms: default_announce_delay_ms(),
        }
    }
}

impl KioskConfig {
    /// Auto-hide delay, clamped to the supported range.
    #[must_use]
    pub fn notification_hide_delay(&self) -> Duration {
        let ms = self
            .notification_hide_ms
            .unwrap_or(DEFAULT_NOTIFICATION_HIDE_MS)
            .clamp(MIN_NOTIFICATION_HIDE_MS, MAX_NOTIFICATION_HIDE_MS);
        Duration::from_millis(ms)
    }

    /// Announce delay, clamped to the supported range.
    #[must_use]
    pub fn announce_delay(&self) -> Duration {
        let ms = self
            .announce_delay_ms
            .unwrap_or(DEFAULT_ANNOUNCE_DELAY_MS)
            .clamp(MIN_ANNOUNCE_DELAY_MS, MAX_ANNOUNCE_DELAY_MS);
        Duration::from_millis(ms)
    }
}

/// Authentication form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthConfig {
    /// Minimum number of characters accepted for passwords.
    #[serde(
        default = "default_min_password_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_password_length: Option<usize>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
        }
    }
}

impl AuthConfig {
    /// Minimum password length, clamped to the supported range.
    #[must_use]
    pub fn min_password_length(&self) -> usize {
        self.min_password_length
            .unwrap_or(DEFAULT_MIN_PASSWORD_LENGTH)
            .clamp(MIN_MIN_PASSWORD_LENGTH, MAX_MIN_PASSWORD_LENGTH)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Kiosk mode timing.
    #[serde(default)]
    pub kiosk: KioskConfig,

    /// Authentication form settings.
    #[serde(default)]
    pub auth: AuthConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_notification_hide_ms() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_HIDE_MS)
}

fn default_announce_delay_ms() -> Option<u64> {
    Some(DEFAULT_ANNOUNCE_DELAY_MS)
}

fn default_min_password_length() -> Option<usize> {
    Some(DEFAULT_MIN_PASSWORD_LENGTH)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
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
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
///
/// A missing file is created with the defaults so it can be edited by hand.
/// A file that parses but names an invalid language keeps its settings and
/// reports the locale warning.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        let config = Config::default();
        if let Err(err) = save_to_path(&config, &path) {
            tracing::warn!(path = %path.display(), error = %err, "could not write default config");
        }
        return (config, None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            let warning = config
                .general
                .language
                .as_deref()
                .and_then(|tag| i18n::fluent::parse_locale(tag).err())
                .map(|err| {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring configured language");
                    err.i18n_key().to_string()
                });
            (config, warning)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
            (Config::default(), Some(err.i18n_key().to_string()))
        }
    }
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
