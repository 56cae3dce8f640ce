//! Enemy-related components.

use bevy::prelude::*;

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Behaviour state for enemy AI.
///
/// `Reacting` is entered only when an attack lands and left only when the
/// hurt clip finishes; the AI leaves a reacting enemy alone.
#[derive(Component, Default, PartialEq, Eq, Clone, Copy, Debug)]
pub enum EnemyState {
    /// Hovering near the player, bleeding off speed.
    #[default]
    Idle,
    /// Walking toward the player.
    Chasing,
    /// Knocked back and playing the hurt clip.
    Reacting,
}
