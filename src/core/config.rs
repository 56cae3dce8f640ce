//! Scene configuration loaded from an external RON file.
//!
//! Every gameplay constant lives here so it can be tweaked without
//! recompilation. Coordinates are world units with y pointing up and the
//! origin at the bottom-left corner of the viewport.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;

/// Path of the scene file, relative to the working directory.
pub const SCENE_CONFIG_PATH: &str = "assets/data/scene.ron";

/// Gameplay numbers for movement, AI and combat.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player run speed in units per second
    pub player_speed: f32,
    /// Touches closer than this to the player do not steer
    pub touch_dead_zone: f32,
    /// Enemy walk speed in units per second
    pub enemy_speed: f32,
    /// Enemies stop chasing inside this distance
    pub melee_range: f32,
    /// Per-frame velocity multiplier while an enemy hovers
    pub hover_damping: f32,
    /// Enemies strictly closer than this are hit by a finished attack
    pub attack_radius: f32,
    /// Knockback for variant 1; divided by variant squared
    pub knockback_power: f32,
    /// Shake intensity for variant 1; divided by variant
    pub shake_intensity: f32,
    /// Shake length in seconds
    pub shake_duration: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 160.0,
            touch_dead_zone: 40.0,
            enemy_speed: 80.0,
            melee_range: 100.0,
            hover_damping: 0.9,
            attack_radius: 100.0,
            knockback_power: 60.0,
            shake_intensity: 0.001,
            shake_duration: 0.5,
        }
    }
}

/// Where and as what an actor is spawned.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpawnConfig {
    /// Character definition name (file stem under `assets/data/characters`)
    pub character: String,
    pub position: (f32, f32),
}

impl SpawnConfig {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.position.0, self.position.1)
    }
}

/// A static wall with a collider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WallConfig {
    pub image: String,
    pub position: (f32, f32),
    pub size: (f32, f32),
}

impl WallConfig {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.position.0, self.position.1)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.size.0, self.size.1)
    }
}

/// Scene configuration loaded from assets/data/scene.ron.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub tuning: Tuning,
    /// Visible area in world units; the camera looks at its center
    pub viewport: (f32, f32),
    pub backdrop: String,
    pub hint: String,
    pub player: SpawnConfig,
    pub enemies: Vec<SpawnConfig>,
    pub walls: Vec<WallConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let wall = |image: &str, position, size| WallConfig {
            image: image.to_string(),
            position,
            size,
        };
        let fighter = |position| SpawnConfig {
            character: "fighter".to_string(),
            position,
        };

        Self {
            tuning: Tuning::default(),
            viewport: (800.0, 600.0),
            backdrop: "sky.png".to_string(),
            hint: "Use arrow keys to move, A/S/D to attack".to_string(),
            player: SpawnConfig {
                character: "samurai".to_string(),
                position: (100.0, 150.0),
            },
            enemies: vec![fighter((700.0, 150.0)), fighter((400.0, 350.0))],
            walls: vec![
                wall("wall-v.png", (32.0, 300.0), (64.0, 600.0)),
                wall("wall-v.png", (768.0, 300.0), (64.0, 600.0)),
                wall("wall-h.png", (400.0, 568.0), (800.0, 64.0)),
                wall("wall-h.png", (400.0, 32.0), (800.0, 64.0)),
            ],
        }
    }
}

impl SceneConfig {
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport.0, self.viewport.1)
    }

    /// World position the camera is anchored on.
    pub fn center(&self) -> Vec2 {
        self.viewport() / 2.0
    }

    /// Parse a scene from RON text. `origin` is only used in error messages.
    pub fn from_ron(contents: &str, origin: &str) -> Result<Self, DataLoadError> {
        ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: origin.to_string(),
            details: e.to_string(),
        })
    }

    /// Read and parse a scene file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if !path.exists() {
            return Err(DataLoadError::FileNotFound(display));
        }
        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: display.clone(),
            details: e.to_string(),
        })?;
        Self::from_ron(&contents, &display)
    }

    /// Load the scene config, falling back to defaults when the file is unusable.
    pub fn load() -> Self {
        match Self::from_file(SCENE_CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded scene config from {}", SCENE_CONFIG_PATH);
                config
            }
            Err(e @ DataLoadError::ParseError { .. }) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }
}

/// System to load the scene config when loading starts.
pub fn load_scene_config(mut commands: Commands) {
    commands.insert_resource(SceneConfig::load());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_scene_constants() {
        let tuning = Tuning::default();
        assert_eq!(tuning.player_speed, 160.0);
        assert_eq!(tuning.touch_dead_zone, 40.0);
        assert_eq!(tuning.enemy_speed, 80.0);
        assert_eq!(tuning.melee_range, 100.0);
        assert_eq!(tuning.hover_damping, 0.9);
        assert_eq!(tuning.attack_radius, 100.0);
        assert_eq!(tuning.knockback_power, 60.0);
        assert_eq!(tuning.shake_intensity, 0.001);
        assert_eq!(tuning.shake_duration, 0.5);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = SceneConfig::from_ron("(tuning: (enemy_speed: 120.0))", "inline").unwrap();
        assert_eq!(config.tuning.enemy_speed, 120.0);
        assert_eq!(config.tuning.player_speed, 160.0);
        assert_eq!(config.enemies.len(), 2);
        assert_eq!(config.walls.len(), 4);
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = SceneConfig::from_ron("(tuning: oops", "scene.ron").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { ref path, .. } if path == "scene.ron"));
    }

    #[test]
    fn test_missing_file() {
        let err = SceneConfig::from_file("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound(_)));
    }

    #[test]
    fn test_camera_centered_on_viewport() {
        let config = SceneConfig::default();
        assert_eq!(config.center(), Vec2::new(400.0, 300.0));
    }
}
