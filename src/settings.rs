use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cloud::CloudConfig;
use crate::shapes::{
    ArrowConfig, CircleConfig, CrossConfig, DotConfig, LineConfig, PolygonConfig,
    RectangleConfig, SquareConfig,
};

/// Returns the path to the settings file: `~/.config/point-sketch/settings.json`
pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("point-sketch");
    path.push("settings.json");
    path
}

/// Errors from writing the settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted default options for every shape type.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that a file naming only a few options
/// (or written before new shape types existed) still loads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeSettings {
    pub line: LineConfig,
    pub curved_line: LineConfig,
    pub arrow: ArrowConfig,
    pub partial_circle: CircleConfig,
    pub circle: CircleConfig,
    pub polygon: PolygonConfig,
    pub rectangle: RectangleConfig,
    pub square: SquareConfig,
    pub dot: DotConfig,
    pub cross: CrossConfig,
}

impl ShapeSettings {
    /// Load settings from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Save settings to the default path, logging any failure.
    pub fn save(&self) {
        let path = settings_path();
        match self.save_to(&path) {
            Ok(()) => log::info!("Saved settings to {}", path.display()),
            Err(e) => log::warn!("Failed to save settings: {}", e),
        }
    }

    /// Load settings from `path`, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Write settings to `path` as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Use one density for every shape type.
    pub fn set_epsilon(&mut self, epsilon: f32) {
        for cloud in self.clouds_mut() {
            cloud.epsilon = epsilon;
        }
    }

    fn clouds_mut(&mut self) -> [&mut CloudConfig; 10] {
        [
            &mut self.line.cloud,
            &mut self.curved_line.cloud,
            &mut self.arrow.line.cloud,
            &mut self.partial_circle.cloud,
            &mut self.circle.cloud,
            &mut self.polygon.cloud,
            &mut self.rectangle.cloud,
            &mut self.square.cloud,
            &mut self.dot.cloud,
            &mut self.cross.cloud,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_partial_settings() {
        let settings = ShapeSettings::from_json(
            r#"{
                "circle": { "radius": 2.5, "color": { "r": 0.0, "g": 0.0, "b": 1.0 } },
                "arrow": { "tip_length": 0.5, "min_density": 0.2 },
                "polygon": { "edge_colors": [{ "r": 1.0, "g": 0.0, "b": 0.0 }] }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.circle.radius, 2.5);
        assert_eq!(settings.circle.start_angle, 0.0);
        assert_eq!(settings.circle.cloud.color, Some(Color::new(0.0, 0.0, 1.0)));
        assert_eq!(settings.arrow.tip_length, 0.5);
        assert_eq!(settings.arrow.line.min_density, 0.2);
        assert_eq!(settings.polygon.edge_colors.as_ref().map(Vec::len), Some(1));
        assert_eq!(settings.dot, DotConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = ShapeSettings::default();
        settings.square.side_length = 1.5;
        let json = settings.to_json().unwrap();
        assert_eq!(ShapeSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_set_epsilon() {
        let mut settings = ShapeSettings::default();
        settings.set_epsilon(0.02);
        assert_eq!(settings.arrow.line.cloud.epsilon, 0.02);
        assert_eq!(settings.cross.cloud.epsilon, 0.02);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("point-sketch-{}", std::process::id()));
        let path = dir.join("nested").join("settings.json");

        let mut settings = ShapeSettings::default();
        settings.dot.radius = 0.2;
        settings.set_epsilon(0.01);
        settings.save_to(&path).unwrap();
        assert_eq!(ShapeSettings::load_from(&path), settings);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("point-sketch-missing/settings.json");
        assert_eq!(ShapeSettings::load_from(&path), ShapeSettings::default());
    }

    #[test]
    fn test_load_corrupt_file() {
        let path = std::env::temp_dir()
            .join(format!("point-sketch-corrupt-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(ShapeSettings::load_from(&path), ShapeSettings::default());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_json() {
        assert!(ShapeSettings::from_json("{ not json").is_err());
    }
}
