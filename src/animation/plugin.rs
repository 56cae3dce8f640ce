//! Animation plugin - character data loading and sprite sheet playback.

use bevy::prelude::*;

use super::data::{load_character_definitions, CharacterRegistry};
use super::library::{advance_animations, build_animation_library, AnimationLibrary};
use crate::core::{FrameSet, GameState};

/// Animation plugin - loads character sheets and steps sprite animations.
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<CharacterRegistry>()
            .init_resource::<AnimationLibrary>()
            // Definitions must be read before their sheets are registered
            .add_systems(
                OnEnter(GameState::Loading),
                (load_character_definitions, build_animation_library).chain(),
            )
            .add_systems(Update, advance_animations.in_set(FrameSet::Animate));
    }
}
