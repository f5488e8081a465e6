use menukit_widgets::ConfigError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::asset;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fullscreen: false,
            fps: 60,
        }
    }
}

impl WindowConfig {
    pub const FILENAME: &'static str = "window.yaml";

    pub fn create_default_config_if_missing() -> asset::Result<()> {
        let path = asset::get_path("config", Self::FILENAME);
        if path.exists() {
            return Ok(());
        }
        log::info!("Creating default file {}", path.display());
        asset::save_yaml_file("config", Self::FILENAME, &WindowConfig::default())
    }
    pub fn load_config() -> asset::Result<Self> {
        asset::load_yaml_file("config", Self::FILENAME)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    pub min: i32,
    pub max: i32,
    pub initial: i32,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            initial: 50,
        }
    }
}

#[derive(Debug, Error)]
pub enum MenuConfigError {
    #[error("invalid volume slider in {file}: {source}")]
    Volume {
        file: &'static str,
        source: ConfigError,
    },
}

/// Contents of `config/menu.yaml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub title: String,
    /// TrueType file under `fonts/`. None is bundled, so it has to be
    /// supplied before the first run.
    pub font: String,
    pub music: bool,
    pub volume: VolumeConfig,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: "Game Menu".to_owned(),
            font: "OpenSans-Regular.ttf".to_owned(),
            music: true,
            volume: VolumeConfig::default(),
        }
    }
}

impl MenuConfig {
    pub const FILENAME: &'static str = "menu.yaml";

    pub fn load_config() -> asset::Result<Self> {
        asset::load_yaml_file_or_default("config", Self::FILENAME)
    }

    /// Rejects an empty volume range and pulls the initial volume into range.
    pub fn validate(mut self) -> Result<Self, MenuConfigError> {
        let volume = &mut self.volume;
        if volume.min >= volume.max {
            return Err(MenuConfigError::Volume {
                file: Self::FILENAME,
                source: ConfigError::EmptyRange {
                    min: volume.min,
                    max: volume.max,
                },
            });
        }
        if !(volume.min..=volume.max).contains(&volume.initial) {
            log::warn!(
                "initial volume {} outside {}..={}, clamping",
                volume.initial,
                volume.min,
                volume.max
            );
            volume.initial = volume.initial.clamp(volume.min, volume.max);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_menu_file_uses_defaults() {
        let config: MenuConfig = serde_yml::from_str("title: Options\nvolume:\n  max: 10\n").unwrap();
        assert_eq!(config.title, "Options");
        assert_eq!(config.font, MenuConfig::default().font);
        assert_eq!(config.volume.min, 0);
        assert_eq!(config.volume.max, 10);
    }

    #[test]
    fn validate_rejects_empty_range() {
        let mut config = MenuConfig::default();
        config.volume.min = 10;
        config.volume.max = 10;
        let error = config.validate().unwrap_err();
        assert!(matches!(
            error,
            MenuConfigError::Volume {
                source: ConfigError::EmptyRange { min: 10, max: 10 },
                ..
            }
        ));
    }

    #[test]
    fn validate_clamps_initial_volume() {
        let mut config = MenuConfig::default();
        config.volume.initial = 250;
        assert_eq!(config.validate().unwrap().volume.initial, 100);
    }

    #[test]
    fn window_config_round_trips_defaults() {
        let text = serde_yml::to_string(&WindowConfig::default()).unwrap();
        let parsed: WindowConfig = serde_yml::from_str(&text).unwrap();
        assert_eq!(parsed, WindowConfig::default());
    }
}
