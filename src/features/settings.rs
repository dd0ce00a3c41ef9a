//! Application settings persistence
//!
//! Handles saving and loading viewer preferences (theme, effects, volume).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Theme selection: explicit light/dark or follow the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Resolve from the desktop environment at startup
    #[default]
    System,
}

impl ThemeMode {
    /// All selectable modes, in menu order
    pub fn all() -> &'static [ThemeMode] {
        &[ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Ambient effect settings
    #[serde(default)]
    pub effects: EffectSettings,
    /// Preview playback settings
    #[serde(default)]
    pub playback: PlaybackSettings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Theme mode (light, dark, or follow system)
    pub theme: ThemeMode,
    /// Interface language code ("pt" or "en")
    pub language: String,
}

/// Ambient ember effect settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectSettings {
    /// Whether the drifting ember layer is enabled
    pub embers_enabled: bool,
    /// Accessibility preference: suppress non-essential animation
    #[serde(default)]
    pub reduce_motion: bool,
    /// Constrained-resources preference: skip decorative work
    #[serde(default)]
    pub data_saver: bool,
    /// Global opacity multiplier for the ember layer (0.0 to 1.0)
    #[serde(default = "default_ember_opacity")]
    pub opacity: f32,
}

fn default_ember_opacity() -> f32 {
    1.0
}

/// Preview playback settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackSettings {
    /// Track preview volume (0.0 to 1.0)
    pub preview_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplaySettings::default(),
            effects: EffectSettings::default(),
            playback: PlaybackSettings::default(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            language: "pt".to_string(),
        }
    }
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            embers_enabled: true,
            reduce_motion: false,
            data_saver: false,
            opacity: 1.0,
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            preview_volume: 0.5,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "wrapped", "Wrapped")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_favor_the_gift_experience() {
        let settings = Settings::default();
        assert_eq!(settings.display.theme, ThemeMode::System);
        assert_eq!(settings.display.language, "pt");
        assert!(settings.effects.embers_enabled);
        assert!(!settings.effects.reduce_motion);
        assert_eq!(settings.playback.preview_volume, 0.5);
    }

    #[test]
    fn settings_round_trip_through_disk() {
        let path = std::env::temp_dir().join("wrapped-settings-test.json");

        let mut settings = Settings::default();
        settings.display.theme = ThemeMode::Dark;
        settings.effects.embers_enabled = false;
        settings.playback.preview_volume = 0.8;

        settings.save_to_file(&path).expect("save settings");
        let loaded = Settings::load_from_file(&path).expect("load settings");

        assert_eq!(loaded.display.theme, ThemeMode::Dark);
        assert!(!loaded.effects.embers_enabled);
        assert_eq!(loaded.playback.preview_volume, 0.8);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn older_settings_files_fill_in_missing_sections() {
        // A file written before the effects/playback sections existed
        let json = r#"{ "display": { "theme": "light", "language": "en" } }"#;
        let settings: Settings = serde_json::from_str(json).expect("parse old settings");
        assert_eq!(settings.display.theme, ThemeMode::Light);
        assert!(settings.effects.embers_enabled);
        assert_eq!(settings.effects.opacity, 1.0);
    }

    #[test]
    fn theme_mode_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ThemeMode::System).expect("serialize"),
            "\"system\""
        );
    }
}
