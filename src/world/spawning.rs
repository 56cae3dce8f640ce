//! Entity spawning functions for scene construction.

use bevy::prelude::*;
use bevy::sprite::Anchor;
use bevy_rapier2d::prelude::*;

use crate::animation::{CharacterRegistry, ClipKind, SpriteAnimation};
use crate::combat::{ActorSize, SceneCamera};
use crate::core::{SceneConfig, SpawnConfig, WallConfig};

/// Collision group of players and enemies.
pub const ACTOR_GROUP: Group = Group::GROUP_1;
/// Collision group of static walls.
pub const WALL_GROUP: Group = Group::GROUP_2;

/// Used when a character definition is missing.
const FALLBACK_FRAME: Vec2 = Vec2::splat(128.0);
const FALLBACK_HITBOX: Vec2 = Vec2::new(64.0, 128.0);

/// Draw order
const BACKDROP_Z: f32 = -10.0;
const ACTOR_Z: f32 = 1.0;
const HINT_Z: f32 = 10.0;

/// Spawn the camera looking at the middle of the viewport.
pub fn spawn_camera(commands: &mut Commands, config: &SceneConfig) {
    let anchor = config.center().extend(0.0);
    commands.spawn((
        Camera2d,
        Transform::from_translation(anchor),
        SceneCamera { anchor },
    ));
}

/// Spawn the backdrop image and the control hint.
pub fn spawn_backdrop(commands: &mut Commands, config: &SceneConfig, asset_server: &AssetServer) {
    commands.spawn((
        Sprite::from_image(asset_server.load(&config.backdrop)),
        Transform::from_translation(config.center().extend(BACKDROP_Z)),
    ));

    commands.spawn((
        Text2d::new(config.hint.clone()),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::BLACK),
        Anchor::TopLeft,
        Transform::from_xyz(16.0, config.viewport().y - 16.0, HINT_Z),
    ));
}

/// Spawn a static wall with a collider that only actors bump into.
pub fn spawn_wall(commands: &mut Commands, wall: &WallConfig, asset_server: &AssetServer) {
    let size = wall.size();
    commands.spawn((
        Sprite {
            image: asset_server.load(&wall.image),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(wall.position().extend(0.0)),
        RigidBody::Fixed,
        Collider::cuboid(size.x / 2.0, size.y / 2.0),
        CollisionGroups::new(WALL_GROUP, Group::ALL),
    ));
}

/// Spawn the parts every actor shares and return the entity.
///
/// Actors collide with walls only, never with each other.
pub fn spawn_actor(
    commands: &mut Commands,
    spawn: &SpawnConfig,
    registry: &CharacterRegistry,
) -> Entity {
    let size = match registry.get(&spawn.character) {
        Some(definition) => ActorSize::new(definition.frame_size(), definition.body_size()),
        None => {
            error!(
                "No character definition for '{}'; it will not animate or attack",
                spawn.character
            );
            ActorSize::new(FALLBACK_FRAME, FALLBACK_HITBOX)
        }
    };

    commands
        .spawn((
            Sprite::default(),
            Transform::from_translation(spawn.position().extend(ACTOR_Z)),
            size,
            SpriteAnimation::new(spawn.character.clone(), ClipKind::Idle),
            RigidBody::Dynamic,
            Collider::cuboid(size.hitbox.x / 2.0, size.hitbox.y / 2.0),
            Velocity::zero(),
            GravityScale(0.0),
            LockedAxes::ROTATION_LOCKED,
            CollisionGroups::new(ACTOR_GROUP, WALL_GROUP),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::world::CommandQueue;
    use std::collections::HashMap;

    use crate::animation::CharacterDefinition;

    fn spawn_into(world: &mut World, spawn: &SpawnConfig, registry: &CharacterRegistry) -> Entity {
        let mut queue = CommandQueue::default();
        let entity = {
            let mut commands = Commands::new(&mut queue, world);
            spawn_actor(&mut commands, spawn, registry)
        };
        queue.apply(world);
        entity
    }

    fn samurai_spawn() -> SpawnConfig {
        SpawnConfig {
            character: "samurai".to_string(),
            position: (100.0, 150.0),
        }
    }

    #[test]
    fn test_actor_uses_definition_sizes() {
        let mut registry = CharacterRegistry::default();
        registry.definitions.insert(
            "samurai".to_string(),
            CharacterDefinition {
                name: "Samurai".to_string(),
                frame_size: (96, 96),
                body_size: (48.0, 90.0),
                clips: HashMap::new(),
            },
        );

        let mut world = World::new();
        let actor = spawn_into(&mut world, &samurai_spawn(), &registry);

        let size = world.get::<ActorSize>(actor).unwrap();
        assert_eq!(size.frame, Vec2::splat(96.0));
        assert_eq!(size.hitbox, Vec2::new(48.0, 90.0));
        assert_eq!(world.get::<Transform>(actor).unwrap().translation, Vec3::new(100.0, 150.0, ACTOR_Z));
        assert_eq!(world.get::<SpriteAnimation>(actor).unwrap().clip(), ClipKind::Idle);
        assert_eq!(world.get::<Velocity>(actor).unwrap().linvel, Vec2::ZERO);
    }

    #[test]
    fn test_actors_collide_with_walls_only() {
        let mut world = World::new();
        let actor = spawn_into(&mut world, &samurai_spawn(), &CharacterRegistry::default());

        let groups = world.get::<CollisionGroups>(actor).unwrap();
        assert_eq!(groups.memberships, ACTOR_GROUP);
        assert_eq!(groups.filters, WALL_GROUP);
    }

    #[test]
    fn test_unknown_character_falls_back_to_default_size() {
        let mut world = World::new();
        let actor = spawn_into(&mut world, &samurai_spawn(), &CharacterRegistry::default());

        let size = world.get::<ActorSize>(actor).unwrap();
        assert_eq!(size.frame, FALLBACK_FRAME);
        assert_eq!(size.hitbox, FALLBACK_HITBOX);
    }
}
