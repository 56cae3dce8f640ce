//! Core plugin that sets up game states, events, and frame ordering.

use bevy::prelude::*;

use super::config::load_scene_config;
use super::events::*;
use super::states::*;

/// Per-frame ordering of gameplay work.
///
/// Animations advance first so that completion observers (attack finished,
/// hurt finished) have run before anyone reads the attack or enemy state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Step sprite animations and deliver completion triggers
    Animate,
    /// Turn keyboard and touch state into player intent
    Input,
    /// Player control and enemy AI; skipped while the player attacks
    Act,
    /// Camera shake and other presentation feedback
    Feedback,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame)
/// - The buffered CameraShake event
/// - The frame set ordering every other plugin schedules into
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // AnimationFinished is trigger-only; CameraShake is buffered
            .add_event::<CameraShake>()

            // Scene tuning is needed by both the loader and the gameplay systems
            .add_systems(OnEnter(GameState::Loading), load_scene_config)

            .configure_sets(
                Update,
                (
                    FrameSet::Animate,
                    FrameSet::Input,
                    FrameSet::Act,
                    FrameSet::Feedback,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
