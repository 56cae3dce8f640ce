//! Combat module - attack variants, the attack state machine and knockback.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
pub use systems::{finish_attack, knockback};
