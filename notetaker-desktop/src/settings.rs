//! Application settings persistence for Notetaker.
//!
//! Stores user preferences (currently the location of the notes store) in a
//! JSON file at an OS-appropriate location.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured store path.
pub const STORE_ENV_VAR: &str = "NOTETAKER_STORE";

/// Persisted application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// SQLite file holding the `notes` and `sortOrder` slots.
    pub store_path: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            store_path: default_store_path().to_string_lossy().to_string(),
        }
    }
}

impl AppSettings {
    /// The store path to open, honouring [`STORE_ENV_VAR`] when it is set
    /// and non-empty.
    pub fn resolved_store_path(&self) -> PathBuf {
        self.store_path_with_override(std::env::var(STORE_ENV_VAR).ok())
    }

    fn store_path_with_override(&self, env_value: Option<String>) -> PathBuf {
        match env_value {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => PathBuf::from(&self.store_path),
        }
    }
}

/// Returns the path to the settings JSON file.
///
/// - macOS / Linux: `~/.config/notetaker/settings.json`
/// - Windows: `%APPDATA%/Notetaker/settings.json`
pub fn settings_file_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("Notetaker").join("settings.json")
    }
    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("notetaker").join("settings.json")
    }
}

/// Returns the default store location: `<data dir>/notetaker/notes.sqlite`.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".local")
                .join("share")
        })
        .join("notetaker")
        .join("notes.sqlite")
}

/// Loads settings from disk; returns defaults if the file is missing or corrupt.
pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_file_path())
}

pub fn load_settings_from(path: &Path) -> AppSettings {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("settings file {} is corrupt, using defaults: {e}", path.display());
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

/// Saves settings to disk, creating parent directories as needed.
pub fn save_settings(settings: &AppSettings) -> Result<(), String> {
    save_settings_to(&settings_file_path(), settings)
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create settings directory: {e}"))?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write settings: {e}"))?;
    Ok(())
}
