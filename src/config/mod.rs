// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[alert]` - Drop alert tuning (dwell time, viewport width)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory override (`--config-dir` flag)
//! 3. Set `ICED_DROP_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory

pub mod defaults;

pub use defaults::{DEFAULT_DWELL_MS, DEFAULT_VIEWPORT_WIDTH};

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use defaults::{default_dwell_ms, default_theme_mode, default_viewport_width};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const CONFIG_DIR_ENV: &str = "ICED_DROP_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default = "default_theme_mode")]
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

/// Drop alert tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct AlertConfig {
    /// Milliseconds a drop stays visible before auto-dismissing.
    #[serde(default = "default_dwell_ms")]
    pub dwell_ms: u64,

    /// Logical viewport width; the banner caps its width at 80% of this.
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            dwell_ms: default_dwell_ms(),
            viewport_width: default_viewport_width(),
        }
    }
}

impl AlertConfig {
    /// The dwell time as a `Duration`.
    #[must_use]
    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }
}

// =============================================================================
// Root Config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub alert: AlertConfig,
}

// =============================================================================
// Persistence
// =============================================================================

/// Resolves the directory holding `settings.toml`.
///
/// Order: explicit override > `ICED_DROP_CONFIG_DIR` > platform config dir.
#[must_use]
pub fn config_dir(dir_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = dir_override {
        return Some(dir.to_path_buf());
    }
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|base| base.join("iced_drop"))
}

/// Loads the configuration, falling back to defaults on any failure.
///
/// A missing file is normal on first launch and logged at debug level;
/// an unreadable or unparsable file is logged as a warning.
#[must_use]
pub fn load(dir_override: Option<&Path>) -> Config {
    let Some(path) = config_dir(dir_override).map(|dir| dir.join(CONFIG_FILE)) else {
        log::warn!("no config directory available; using default settings");
        return Config::default();
    };

    if !path.exists() {
        log::debug!("no settings file at {}; using defaults", path.display());
        return Config::default();
    }

    match load_from_path(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("failed to load {}: {err}; using defaults", path.display());
            Config::default()
        }
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the resolved config directory.
pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    let Some(dir) = config_dir(dir_override) else {
        return Err(crate::error::Error::Io(
            "no config directory available".to_string(),
        ));
    };
    fs::create_dir_all(&dir)?;
    save_to_path(config, &dir.join(CONFIG_FILE))
}

/// Saves the configuration to an explicit path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
