//! Game settings and difficulty selection
//!
//! Settings are plain JSON. Nothing is written back; the menu only needs to
//! hand a base speed to the game loop.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICK_MS;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown difficulty {0:?} (expected Easy, Medium or Hard)")]
    UnknownDifficulty(String),
    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,
}

/// Difficulty levels offered by the start menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Starting scroll speed in pixels/tick
    pub fn base_speed(&self) -> f64 {
        match self {
            Difficulty::Easy => 3.0,
            Difficulty::Medium => 5.0,
            Difficulty::Hard => 7.0,
        }
    }

    /// Menu lookup: anything unrecognized plays as Easy
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl FromStr for Difficulty {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "med" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(SettingsError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_tick_ms() -> u64 {
    TICK_MS
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Fixed RNG seed for reproducible runs; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Timer period driving the loop
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: None,
            tick_ms: default_tick_ms(),
        }
    }
}

impl Settings {
    /// Settings for a difficulty with everything else at defaults
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    pub fn base_speed(&self) -> f64 {
        self.difficulty.base_speed()
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_ms == 0 {
            return Err(SettingsError::ZeroTickInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_base_speeds() {
        assert_eq!(Difficulty::Easy.base_speed(), 3.0);
        assert_eq!(Difficulty::Medium.base_speed(), 5.0);
        assert_eq!(Difficulty::Hard.base_speed(), 7.0);
    }

    #[test]
    fn test_menu_labels_select_their_difficulty() {
        let mut last_speed = 0.0;
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_label(difficulty.as_str()), difficulty);
            assert_eq!(difficulty.to_string(), difficulty.as_str());
            assert!(difficulty.base_speed() > last_speed);
            last_speed = difficulty.base_speed();
        }
    }

    #[test]
    fn test_unrecognized_label_defaults_to_easy() {
        assert_eq!(Difficulty::from_label("Hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_label(" medium "), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("Nightmare"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("").base_speed(), 3.0);
    }

    #[test]
    fn test_strict_parse_reports_unknown() {
        let err = "Impossible".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, SettingsError::UnknownDifficulty(ref s) if s == "Impossible"));
    }

    #[test]
    fn test_settings_json_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());

        let settings = Settings::from_json(r#"{"difficulty":"Hard","seed":7}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.tick_ms, TICK_MS);
        assert_eq!(settings.base_speed(), 7.0);
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings {
            difficulty: Difficulty::Medium,
            seed: Some(99),
            tick_ms: 16,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_settings_rejects_bad_input() {
        assert!(matches!(
            Settings::from_json(r#"{"tick_ms":0}"#),
            Err(SettingsError::ZeroTickInterval)
        ));
        assert!(matches!(
            Settings::from_json(r#"{"difficulty":"Extreme"}"#),
            Err(SettingsError::Json(_))
        ));
        assert!(matches!(
            Settings::load("/definitely/not/here.json"),
            Err(SettingsError::Io { .. })
        ));
    }
}
