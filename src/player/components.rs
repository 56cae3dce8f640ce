//! Player-related components.

use bevy::prelude::*;

use crate::combat::AttackVariant;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// What the player asked for this frame, after input resolution.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerIntent {
    /// Zero, or a vector whose length is the player speed
    pub movement: Vec2,
    /// Requested attack, if any
    pub attack: Option<AttackVariant>,
}
