//! Player module - input resolution, movement and attack start.

mod components;
mod input;
mod movement;
mod plugin;

pub use components::*;
pub use input::{attack_request, move_vector, resolve_intent, InputSnapshot, PointerSlots};
pub use movement::{player_control, player_ready};
pub use plugin::PlayerPlugin;
