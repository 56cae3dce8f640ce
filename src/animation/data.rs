//! Character sheet definitions loaded from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::components::{ClipKind, ClipTiming};
use crate::core::DataLoadError;

/// Directory holding one RON file per character.
pub const CHARACTERS_DIR: &str = "assets/data/characters";

/// One sprite sheet clip: a single row of equally sized frames.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ClipDef {
    /// Image path relative to the assets folder
    pub sheet: String,
    pub frames: usize,
    pub fps: f32,
    pub looping: bool,
}

impl ClipDef {
    pub fn timing(&self) -> ClipTiming {
        ClipTiming::new(self.frames, self.fps, self.looping)
    }
}

/// Character definition loaded from RON file.
#[derive(Deserialize, Clone, Debug)]
pub struct CharacterDefinition {
    pub name: String,
    /// Size of one sheet frame in pixels
    pub frame_size: (u32, u32),
    /// Physics hitbox size, centered on the sprite
    pub body_size: (f32, f32),
    pub clips: HashMap<ClipKind, ClipDef>,
}

impl CharacterDefinition {
    pub fn frame_size(&self) -> Vec2 {
        Vec2::new(self.frame_size.0 as f32, self.frame_size.1 as f32)
    }

    pub fn body_size(&self) -> Vec2 {
        Vec2::new(self.body_size.0, self.body_size.1)
    }

    pub fn clip(&self, kind: ClipKind) -> Option<&ClipDef> {
        self.clips.get(&kind)
    }

    /// Reject clips the animation player cannot step and check that every
    /// clip the scene plays is present.
    pub fn validate(&self) -> Result<(), DataLoadError> {
        for kind in ClipKind::ALL {
            let Some(clip) = self.clips.get(&kind) else {
                return Err(DataLoadError::MissingClip {
                    character: self.name.clone(),
                    clip: kind.to_string(),
                });
            };

            let reason = if clip.frames == 0 {
                Some("clip has no frames")
            } else if !(clip.fps > 0.0) {
                Some("fps must be positive")
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(DataLoadError::InvalidClip {
                    character: self.name.clone(),
                    clip: kind.to_string(),
                    reason: reason.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a definition from RON text.
    pub fn from_ron(contents: &str, origin: &str) -> Result<Self, DataLoadError> {
        let definition: Self = ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: origin.to_string(),
            details: e.to_string(),
        })?;
        definition.validate()?;
        Ok(definition)
    }
}

/// Resource holding all loaded character definitions.
#[derive(Resource, Default)]
pub struct CharacterRegistry {
    pub definitions: HashMap<String, CharacterDefinition>,
}

impl CharacterRegistry {
    /// Get a character definition by file stem.
    pub fn get(&self, character: &str) -> Option<&CharacterDefinition> {
        self.definitions.get(character)
    }
}

/// Read one definition file.
fn read_definition(path: &Path) -> Result<CharacterDefinition, DataLoadError> {
    let display = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;
    CharacterDefinition::from_ron(&contents, &display)
}

/// Load all character definitions from the assets/data/characters/ directory.
pub fn load_character_definitions(mut registry: ResMut<CharacterRegistry>) {
    let characters_dir = Path::new(CHARACTERS_DIR);

    if !characters_dir.exists() {
        warn!("Character definitions directory not found: {:?}", characters_dir);
        return;
    }

    let Ok(entries) = fs::read_dir(characters_dir) else {
        warn!("Failed to read character definitions directory");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if path.extension().is_some_and(|ext| ext == "ron") {
            let character = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string();

            match read_definition(&path) {
                Ok(definition) => {
                    info!("Loaded character definition: {} ({})", definition.name, character);
                    registry.definitions.insert(character, definition);
                }
                Err(e) => {
                    error!("Skipping character definition {:?}: {}", path, e);
                }
            }
        }
    }

    info!("Loaded {} character definitions", registry.definitions.len());
}
