//! Settings types.
//!
//! Settings are read from `settings.json` in the Toaster config directory.
//! Every field has a default, so a missing file or a partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::SettingsError;

/// Runtime settings for a toast manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastSettings {
    /// Delay between a dismiss and clearing the config, so the exit
    /// transition can finish.
    pub grace_period_ms: u64,

    /// Auto-dismiss duration used by the timed presets.
    pub preset_duration_secs: f64,

    /// Text shown by the loading preset when none is given.
    pub loading_text: String,

    /// Emit transition logs from startup.
    pub debug_log: bool,

    /// Icon names used by the status presets.
    pub icons: IconSettings,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            grace_period_ms: 300,
            preset_duration_secs: 2.0,
            loading_text: "Loading...".to_string(),
            debug_log: false,
            icons: IconSettings::default(),
        }
    }
}

impl ToastSettings {
    /// Grace period as a duration.
    pub fn grace_period(&self) -> Duration {
        Duration::from_millis(self.grace_period_ms)
    }

    /// Preset duration, clamped to zero when invalid.
    pub fn preset_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.preset_duration_secs).unwrap_or(Duration::ZERO)
    }

    /// Parse settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load settings from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load_default() -> Result<Self, SettingsError> {
        let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }
}

/// Icon names for the status presets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSettings {
    pub success: String,
    pub error: String,
    pub warning: String,
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            success: "checkmark.circle.fill".to_string(),
            error: "xmark.circle.fill".to_string(),
            warning: "exclamationmark.triangle.fill".to_string(),
        }
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("toaster"))
}

/// Get the path to settings.json.
pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("settings.json"))
}

/// Ensure the config directory exists.
pub fn ensure_config_dir() -> std::io::Result<()> {
    if let Some(dir) = config_dir() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
