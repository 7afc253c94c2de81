//! Settings persistence using TOML
//!
//! Stores settings in ~/.config/tetris-stack/settings.toml (or platform
//! equivalent). Game state itself is never persisted, only preferences.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Simulator settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Visual settings
    pub visual: VisualSettings,
    /// Piece generation settings
    pub pieces: PieceSettings,
}

/// Visual settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualSettings {
    /// Show piece ids next to their symbols
    pub show_ids: bool,
    /// Cell style: "bracket", "solid"
    pub cell_style: String,
}

/// Piece generation settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PieceSettings {
    /// Fixed RNG seed; unset means a fresh random seed each run
    pub seed: Option<u64>,
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            show_ids: true,
            cell_style: "bracket".to_string(),
        }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "tetris-stack", "tetris-stack")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load settings from file, or create default
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), String> {
        let Some(dir) = Self::config_dir() else {
            return Err("Could not determine config directory".to_string());
        };

        let Some(path) = Self::settings_path() else {
            return Err("Could not determine settings path".to_string());
        };

        fs::create_dir_all(&dir).map_err(|e| format!("Failed to create config dir: {}", e))?;

        let contents =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize: {}", e))?;

        fs::write(&path, contents).map_err(|e| format!("Failed to write settings: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.visual.show_ids);
        assert_eq!(settings.visual.cell_style, "bracket");
        assert_eq!(settings.pieces.seed, None);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let settings: Settings = toml::from_str("[pieces]\nseed = 42\n").unwrap();
        assert_eq!(settings.pieces.seed, Some(42));
        assert!(settings.visual.show_ids);
    }

    #[test]
    fn test_roundtrip() {
        let mut settings = Settings::default();
        settings.pieces.seed = Some(7);
        settings.visual.show_ids = false;

        let text = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed.pieces.seed, Some(7));
        assert!(!parsed.visual.show_ids);
    }
}
