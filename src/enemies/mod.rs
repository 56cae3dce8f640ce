//! Enemies module - enemy components and AI.

mod ai;
mod components;
mod plugin;

pub use ai::{end_hurt_reaction, steer, Steering};
pub use components::*;
pub use plugin::EnemyPlugin;
