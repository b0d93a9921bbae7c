//! Game configuration resource.
//!
//! Settings load from an INI file with safe defaults when the file or a key
//! is absent.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1024
//! height = 768
//! target_fps = 120
//!
//! [game]
//! scroll_speed = 3.0
//! music_volume = 0.8
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 1024;
const DEFAULT_WINDOW_HEIGHT: u32 = 768;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_SCROLL_SPEED: f32 = 3.0;
const DEFAULT_MUSIC_VOLUME: f32 = 0.8;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    /// Foreground scroll step in pixels per frame; farther layers divide it.
    pub scroll_speed: f32,
    pub music_volume: f32,
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            music_volume: DEFAULT_MUSIC_VOLUME,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load values from the INI file at `config_path`, keeping the current
    /// value for any missing key.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)?;

        if let Some(width) = ini.getuint("window", "width")? {
            self.window_width = width as u32;
        }
        if let Some(height) = ini.getuint("window", "height")? {
            self.window_height = height as u32;
        }
        if let Some(fps) = ini.getuint("window", "target_fps")? {
            self.target_fps = fps as u32;
        }
        if let Some(speed) = ini.getfloat("game", "scroll_speed")? {
            self.scroll_speed = speed as f32;
        }
        if let Some(volume) = ini.getfloat("game", "music_volume")? {
            self.music_volume = (volume as f32).clamp(0.0, 1.0);
        }

        info!("config loaded from {}", self.config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_playfield() {
        let config = GameConfig::new();
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 768);
        assert_eq!(config.scroll_speed, 3.0);
    }

    #[test]
    fn missing_file_is_an_error_but_leaves_defaults() {
        let mut config = GameConfig::with_path("./does_not_exist.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_width, 1024);
    }
}
