//! Enemy AI behavior systems.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Enemy, EnemyState};
use crate::animation::{ClipKind, SpriteAnimation};
use crate::combat::ActorSize;
use crate::core::{AnimationFinished, SceneConfig, Tuning};
use crate::player::Player;
use crate::world::SceneRoster;

/// One frame's movement decision for an enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Steering {
    /// Walk straight at the player.
    Chase { velocity: Vec2, face_left: bool },
    /// Close enough; keep drifting with damped speed.
    Hover { velocity: Vec2 },
}

/// Decide how an enemy at `enemy` moves toward a player at `player`.
pub fn steer(enemy: Vec2, player: Vec2, velocity: Vec2, tuning: &Tuning) -> Steering {
    let to_player = player - enemy;

    if to_player.length() > tuning.melee_range {
        Steering::Chase {
            velocity: to_player.normalize() * tuning.enemy_speed,
            face_left: to_player.x < 0.0,
        }
    } else {
        // No floor: speed decays geometrically toward zero
        Steering::Hover {
            velocity: velocity * tuning.hover_damping,
        }
    }
}

/// Chase the player when out of melee range, hover when in range.
pub fn enemy_ai(
    config: Res<SceneConfig>,
    roster: Res<SceneRoster>,
    players: Query<(&Transform, &ActorSize), With<Player>>,
    mut enemies: Query<
        (&Transform, &ActorSize, &mut Velocity, &mut Sprite, &mut SpriteAnimation, &mut EnemyState),
        (With<Enemy>, Without<Player>),
    >,
) {
    let Ok((player_transform, player_size)) = players.get(roster.player) else {
        return;
    };
    let player_center = player_size.body_center(player_transform);

    for &enemy in roster.enemies.iter() {
        let Ok((transform, size, mut velocity, mut sprite, mut anim, mut state)) = enemies.get_mut(enemy) else {
            continue;
        };

        if *state == EnemyState::Reacting {
            continue;
        }

        let center = size.body_center(transform);
        match steer(center, player_center, velocity.linvel, &config.tuning) {
            Steering::Chase { velocity: chase, face_left } => {
                velocity.linvel = chase;
                sprite.flip_x = face_left;
                anim.play(ClipKind::Walk, true);
                *state = EnemyState::Chasing;
            }
            Steering::Hover { velocity: damped } => {
                velocity.linvel = damped;
                anim.play(ClipKind::Idle, true);
                *state = EnemyState::Idle;
            }
        }
    }
}

/// Hand a staggered enemy back to the AI once its hurt clip has played out.
pub fn end_hurt_reaction(
    trigger: Trigger<AnimationFinished>,
    mut enemies: Query<&mut EnemyState, With<Enemy>>,
) {
    if trigger.event().clip != ClipKind::Hurt {
        return;
    }

    if let Ok(mut state) = enemies.get_mut(trigger.entity()) {
        if *state == EnemyState::Reacting {
            *state = EnemyState::Idle;
        }
    }
}
