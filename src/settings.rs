//! Headless runner settings
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! defaults below. Gameplay constants are deliberately not exposed here.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for the session
    pub seed: u64,
    /// Simulated seconds to run before stopping
    pub duration_secs: f64,
    /// Frames per simulated second
    pub frame_rate: u32,
    /// Let the demo autopilot drive the player
    pub autopilot: bool,
    /// Print the final frame snapshot as JSON
    pub dump_snapshot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            duration_secs: 60.0,
            frame_rate: 60,
            autopilot: true,
            dump_snapshot: true,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Seconds per frame (frame rate is floored at 1)
    pub fn frame_dt(&self) -> f64 {
        1.0 / f64::from(self.frame_rate.max(1))
    }

    /// Total frames to simulate
    pub fn frame_count(&self) -> u64 {
        (self.duration_secs.max(0.0) * f64::from(self.frame_rate.max(1))).round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "autopilot": false }"#).unwrap();
        assert_eq!(settings.seed, 42);
        assert!(!settings.autopilot);
        assert_eq!(settings.frame_rate, Settings::default().frame_rate);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Settings::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/nonexistent/arena-duel.json");
        assert_eq!(settings, Settings::default());
        assert!(matches!(
            Settings::load("/nonexistent/arena-duel.json"),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_frame_math() {
        let settings = Settings {
            duration_secs: 2.0,
            frame_rate: 30,
            ..Settings::default()
        };
        assert_eq!(settings.frame_count(), 60);
        assert!((settings.frame_dt() - 1.0 / 30.0).abs() < 1e-12);

        let zero = Settings {
            frame_rate: 0,
            ..Settings::default()
        };
        assert_eq!(zero.frame_dt(), 1.0);
    }
}
