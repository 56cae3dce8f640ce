//! Player plugin - input resolution and player control.

use bevy::prelude::*;

use super::components::*;
use super::input::{gather_input, track_pointers, PointerSlots};
use super::movement::{player_control, player_ready};
use crate::core::FrameSet;

/// Player plugin - handles input, movement and attack start.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<PlayerIntent>()
            .init_resource::<PointerSlots>()
            // A running attack freezes the whole act step for the frame. Set
            // conditions are checked once, before the first system in the set,
            // so the frame that starts an attack still runs the enemies.
            .configure_sets(Update, FrameSet::Act.run_if(player_ready))
            .add_systems(
                Update,
                (track_pointers, gather_input)
                    .chain()
                    .in_set(FrameSet::Input),
            )
            .add_systems(Update, player_control.in_set(FrameSet::Act));
    }
}
