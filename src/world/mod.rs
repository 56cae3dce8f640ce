//! World module - scene construction and actor roster.

mod plugin;
mod spawning;

pub use plugin::{setup_scene, SceneRoster, WorldPlugin};
pub use spawning::{ACTOR_GROUP, WALL_GROUP};
