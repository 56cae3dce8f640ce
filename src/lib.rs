//! Shinobi Dojo - a small 2D action scene in Bevy.
//!
//! A samurai runs around a walled arena and cuts down fighters that walk
//! toward it. Finished swings knock enemies back, stagger them and shake
//! the camera.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, scene config, frame ordering, global events
//! - **Animation**: Character sheets, clip playback, completion triggers
//! - **Player**: Keyboard and touch input, movement, starting attacks
//! - **Combat**: Attack completion, knockback, screen shake
//! - **Enemies**: Chase and hover AI, hurt reactions
//! - **World**: Camera, backdrop, walls and actor spawning

pub mod animation;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct DojoPlugin;

impl Plugin for DojoPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Sprite sheets and clip playback
            .add_plugins(animation::AnimationPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // World systems
            .add_plugins(world::WorldPlugin);
    }
}
