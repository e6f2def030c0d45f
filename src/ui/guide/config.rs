use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::DriveGuideError;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WindowPosition {
    pub x: f32,
    pub y: f32,
}

impl Default for WindowPosition {
    fn default() -> Self {
        Self { x: 0., y: 0. }
    }
}

impl From<WindowPosition> for Pos2 {
    fn from(value: WindowPosition) -> Self {
        Pos2::new(value.x, value.y)
    }
}

impl From<Pos2> for WindowPosition {
    fn from(value: Pos2) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

/// Window placement remembered between launches. Quiz answers are
/// deliberately not stored here; every session starts with an empty quiz.
#[derive(Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct AppConfig {
    pub window_position: Option<WindowPosition>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_position: None,
            window_width: 1100.,
            window_height: 760.,
        }
    }
}

impl AppConfig {
    pub fn from_local_file() -> Option<Self> {
        let config_path = Self::local_file_path()?;
        if !config_path.exists() {
            return None;
        }

        match Self::load(&config_path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Ignoring unreadable config file: {}", e);
                None
            }
        }
    }

    pub fn save(&self) -> Result<(), DriveGuideError> {
        let config_path = Self::local_file_path().ok_or(DriveGuideError::NoConfigDir)?;

        if !config_path.exists() {
            std::fs::create_dir_all(config_path.parent().unwrap())
                .map_err(|e| DriveGuideError::ConfigIOError { source: e })?;
        }

        self.store(&config_path)
    }

    pub fn window_size(&self) -> Vec2 {
        Vec2::new(self.window_width, self.window_height)
    }

    fn local_file_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("driveguide").join(CONFIG_FILE_NAME))
    }

    fn load(path: &Path) -> Result<Self, DriveGuideError> {
        let file = std::fs::File::open(path)
            .map_err(|e| DriveGuideError::ConfigReadError { source: e })?;
        serde_json::from_reader(file).map_err(|e| DriveGuideError::ConfigParseError { source: e })
    }

    fn store(&self, path: &Path) -> Result<(), DriveGuideError> {
        let file = std::fs::File::create(path)
            .map_err(|e| DriveGuideError::ConfigIOError { source: e })?;
        serde_json::to_writer(file, self).map_err(|e| DriveGuideError::ConfigSerializeError {
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let config = AppConfig {
            window_position: Some(WindowPosition { x: 120., y: 80. }),
            window_width: 900.,
            window_height: 640.,
        };
        config.store(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.window_width, 900.);
        assert_eq!(loaded.window_height, 640.);
        let position = loaded.window_position.unwrap();
        assert_eq!(position.x, 120.);
        assert_eq!(position.y, 80.);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"window_width": 800.0}"#).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.window_width, 800.);
        assert_eq!(loaded.window_height, AppConfig::default().window_height);
        assert!(loaded.window_position.is_none());
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(DriveGuideError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_window_position_pos2_round_trip() {
        let position = WindowPosition { x: 33., y: 44. };
        let pos2: Pos2 = position.into();
        let back: WindowPosition = pos2.into();
        assert_eq!(back.x, 33.);
        assert_eq!(back.y, 44.);
    }
}
