//! World plugin - scene setup and the roster of actors.

use bevy::prelude::*;

use super::spawning::{spawn_actor, spawn_backdrop, spawn_camera, spawn_wall};
use crate::animation::CharacterRegistry;
use crate::combat::AttackState;
use crate::core::{GameState, SceneConfig};
use crate::enemies::{Enemy, EnemyState};
use crate::player::Player;

/// Stable ids of the scene's actors.
///
/// Filled once when the scene is built. Enemies keep their index for the
/// whole session; nothing is despawned or respawned.
#[derive(Resource, Debug, Clone)]
pub struct SceneRoster {
    pub player: Entity,
    pub enemies: Vec<Entity>,
}

/// World plugin - builds the scene when gameplay starts.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InGame), setup_scene);
    }
}

/// Spawn camera, backdrop, walls, the player and the enemies.
pub fn setup_scene(
    mut commands: Commands,
    config: Res<SceneConfig>,
    registry: Res<CharacterRegistry>,
    asset_server: Res<AssetServer>,
) {
    spawn_camera(&mut commands, &config);
    spawn_backdrop(&mut commands, &config, &asset_server);

    for wall in config.walls.iter() {
        spawn_wall(&mut commands, wall, &asset_server);
    }

    let player = spawn_actor(&mut commands, &config.player, &registry);
    commands.entity(player).insert((Player, AttackState::default()));

    let enemies: Vec<Entity> = config
        .enemies
        .iter()
        .map(|spawn| {
            let enemy = spawn_actor(&mut commands, spawn, &registry);
            commands.entity(enemy).insert((Enemy, EnemyState::default()));
            enemy
        })
        .collect();

    info!(
        "Scene ready: {} at {:?}, {} enemies, {} walls",
        config.player.character,
        config.player.position,
        enemies.len(),
        config.walls.len()
    );

    commands.insert_resource(SceneRoster { player, enemies });
}
