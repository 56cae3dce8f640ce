//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Gameplay systems
//! only run in `InGame`, after the data files have been read and the
//! animation library is built.

use bevy::prelude::*;

/// Main game states.
///
/// - Start in `Loading` to read tuning and character data
/// - Move to `InGame` once the animation library is ready; the scene is
///   spawned on entry and lives for the rest of the session
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Reading data files and registering animation sheets
    #[default]
    Loading,
    /// Active gameplay
    InGame,
}
