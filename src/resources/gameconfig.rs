//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [viewport]
//! width = 800
//! height = 480
//!
//! [game]
//! target_fps = 60
//! move_speed = 8.0
//! spawn_interval = 1.0
//! enemy_drift_speed = 360.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_VIEWPORT_WIDTH: u32 = 800;
const DEFAULT_VIEWPORT_HEIGHT: u32 = 480;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_MOVE_SPEED: f32 = 8.0;
const DEFAULT_SPAWN_INTERVAL: f32 = 1.0;
const DEFAULT_ENEMY_DRIFT_SPEED: f32 = 360.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores the viewport size, simulation rates and movement parameters.
/// Missing keys in the file retain their default values.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Viewport width in pixels.
    pub viewport_width: u32,
    /// Viewport height in pixels.
    pub viewport_height: u32,
    /// Target simulation rate in ticks per second.
    pub target_fps: u32,
    /// Player step per tick, in pixels, per active direction.
    pub move_speed: f32,
    /// Minimum simulated time between enemy spawns, in seconds.
    pub spawn_interval: f32,
    /// Leftward enemy drift speed in pixels per second.
    pub enemy_drift_speed: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            move_speed: DEFAULT_MOVE_SPEED,
            spawn_interval: DEFAULT_SPAWN_INTERVAL,
            enemy_drift_speed: DEFAULT_ENEMY_DRIFT_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [viewport] section
        if let Some(width) = config.getuint("viewport", "width").ok().flatten() {
            self.viewport_width = width as u32;
        }
        if let Some(height) = config.getuint("viewport", "height").ok().flatten() {
            self.viewport_height = height as u32;
        }

        // [game] section
        if let Some(fps) = config.getuint("game", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(speed) = config.getfloat("game", "move_speed").ok().flatten() {
            self.move_speed = speed as f32;
        }
        if let Some(interval) = config.getfloat("game", "spawn_interval").ok().flatten() {
            self.spawn_interval = interval as f32;
        }
        if let Some(drift) = config.getfloat("game", "enemy_drift_speed").ok().flatten() {
            self.enemy_drift_speed = drift as f32;
        }

        info!(
            "Loaded config: {}x{} viewport, fps={}, move_speed={}, spawn_interval={}, enemy_drift_speed={}",
            self.viewport_width,
            self.viewport_height,
            self.target_fps,
            self.move_speed,
            self.spawn_interval,
            self.enemy_drift_speed
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [viewport] section
        config.set("viewport", "width", Some(self.viewport_width.to_string()));
        config.set("viewport", "height", Some(self.viewport_height.to_string()));

        // [game] section
        config.set("game", "target_fps", Some(self.target_fps.to_string()));
        config.set("game", "move_speed", Some(self.move_speed.to_string()));
        config.set(
            "game",
            "spawn_interval",
            Some(self.spawn_interval.to_string()),
        );
        config.set(
            "game",
            "enemy_drift_speed",
            Some(self.enemy_drift_speed.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the viewport size.
    pub fn viewport_size(&self) -> (u32, u32) {
        (self.viewport_width, self.viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.viewport_size(), (800, 480));
        assert_eq!(config.target_fps, 60);
        assert!((config.move_speed - 8.0).abs() < 1e-6);
        assert!((config.spawn_interval - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_load_missing_file_is_err() {
        let mut config = GameConfig::with_path("./definitely-not-here.ini");
        assert!(config.load_from_file().is_err());
        // Defaults survive a failed load.
        assert_eq!(config.viewport_size(), (800, 480));
    }
}
