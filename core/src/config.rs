//! Configuration management (config.toml)
//!
//! Handles loading, saving, and providing defaults for inspector settings.
//! Settings are stored in TOML format in the platform-specific config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::inspect::LayoutMetrics;

/// Inspector configuration.
///
/// Contains all user-configurable settings organized into sections.
/// Serialized to/from TOML format for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Layout measurements
    #[serde(default)]
    pub layout: LayoutMetrics,
    /// Inspector panel behavior
    #[serde(default)]
    pub inspector: InspectorConfig,
}

/// Inspector panel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectorConfig {
    /// Toggle inspector panel (default: F3)
    #[serde(default = "default_panel_toggle")]
    pub panel_toggle: String,
    /// Draw every field before the action buttons (default: true)
    #[serde(default = "default_true")]
    pub draw_all_fields: bool,
    /// Include fields declared by base types (default: true)
    #[serde(default = "default_true")]
    pub include_base_fields: bool,
    /// Save foldout expansion states between sessions (default: true)
    #[serde(default = "default_true")]
    pub persist_expansion: bool,
}

fn default_panel_toggle() -> String {
    "F3".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            panel_toggle: default_panel_toggle(),
            draw_all_fields: default_true(),
            include_base_fields: default_true(),
            persist_expansion: default_true(),
        }
    }
}

/// Errors saving the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\InspectorKit\config`
/// On macOS: `~/Library/Application Support/io.inspector-kit.InspectorKit`
/// On Linux: `~/.config/InspectorKit`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.inspector-kit", "", "InspectorKit")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default location of the persisted foldout expansion states
pub fn expansion_state_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("expansion.toml"))
}

/// Loads the configuration from the platform config directory.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> Config {
    config_dir()
        .map(|dir| load_from(&dir.join("config.toml")))
        .unwrap_or_default()
}

/// Loads the configuration from a specific file.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load_from(path: &Path) -> Config {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Config::default();
    };
    toml::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!("Ignoring malformed config {}: {}", path.display(), e);
        Config::default()
    })
}

/// Saves the configuration to the platform config directory.
///
/// Creates the directory if it doesn't exist.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    if let Some(dir) = config_dir() {
        save_to(config, &dir.join("config.toml"))?;
    }
    Ok(())
}

/// Saves the configuration to a specific file.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Parse a key string to an egui key.
///
/// Returns None if not recognized. Currently supports F1-F12 keys.
pub fn parse_key(key: &str) -> Option<egui::Key> {
    use egui::Key;

    match key.trim().to_uppercase().as_str() {
        "F1" => Some(Key::F1),
        "F2" => Some(Key::F2),
        "F3" => Some(Key::F3),
        "F4" => Some(Key::F4),
        "F5" => Some(Key::F5),
        "F6" => Some(Key::F6),
        "F7" => Some(Key::F7),
        "F8" => Some(Key::F8),
        "F9" => Some(Key::F9),
        "F10" => Some(Key::F10),
        "F11" => Some(Key::F11),
        "F12" => Some(Key::F12),
        _ => None,
    }
}
