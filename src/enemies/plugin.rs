//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use crate::core::FrameSet;
use crate::player::player_control;

/// Enemy plugin - handles enemy AI and hurt reactions.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            // Hurt reactions end when the clip does, whatever the frame is doing
            .add_observer(ai::end_hurt_reaction)
            // FrameSet::Act is skipped while the player swings, so enemies
            // keep their last velocity during an attack
            .add_systems(
                Update,
                ai::enemy_ai.in_set(FrameSet::Act).after(player_control),
            );
    }
}
