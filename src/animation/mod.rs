//! Animation module - character sheet data and the sprite animation player.

mod components;
pub mod data;
mod library;
mod plugin;

pub use components::*;
pub use data::{CharacterDefinition, CharacterRegistry};
pub use library::{advance_animations, AnimationLibrary, ClipHandles};
pub use plugin::AnimationPlugin;
