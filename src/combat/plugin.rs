//! Combat plugin - attack resolution and hit feedback.

use bevy::prelude::*;

use super::systems;

/// Combat plugin - handles attack completion feedback.
///
/// Attack completion itself is an observer attached per swing by the player
/// controller, so only the feedback systems are scheduled here.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        systems::setup_combat_systems(app);
    }
}
