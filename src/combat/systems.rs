//! Combat systems - attack completion, knockback and screen shake.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use crate::animation::{ClipKind, SpriteAnimation};
use crate::core::{AnimationFinished, CameraShake, FrameSet, SceneConfig, Tuning};
use crate::enemies::{Enemy, EnemyState};
use crate::player::Player;
use crate::world::SceneRoster;

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app
        .init_resource::<ScreenShake>()
        .add_systems(Update, apply_screen_shake.in_set(FrameSet::Feedback));
}

/// Knockback for a target whose center is `target`, or `None` when out of reach.
///
/// The reach check is exclusive: a target exactly `attack_radius` away is
/// not hit. A target on top of the attacker is hit with no push.
pub fn knockback(attacker: Vec2, target: Vec2, variant: AttackVariant, tuning: &Tuning) -> Option<Vec2> {
    let offset = target - attacker;
    if offset.length() >= tuning.attack_radius {
        return None;
    }
    Some(offset.normalize_or_zero() * variant.power(tuning))
}

/// One-shot observer attached to the player when an attack starts.
///
/// Completes the attack, despawns itself so a later clip can never re-fire
/// it, then pushes back and staggers every enemy in reach.
pub fn finish_attack(
    trigger: Trigger<AnimationFinished>,
    mut commands: Commands,
    config: Res<SceneConfig>,
    roster: Res<SceneRoster>,
    mut players: Query<(&Transform, &ActorSize, &mut AttackState), With<Player>>,
    mut enemies: Query<
        (&Transform, &ActorSize, &mut Velocity, &mut SpriteAnimation, &mut EnemyState),
        (With<Enemy>, Without<Player>),
    >,
    mut shakes: EventWriter<CameraShake>,
) {
    // Only the swing's own clip ends the swing
    if !trigger.event().clip.is_attack() {
        return;
    }

    let Ok((player_transform, player_size, mut attack)) = players.get_mut(trigger.entity()) else {
        return;
    };

    let Some(variant) = attack.finish() else {
        return;
    };
    commands.entity(trigger.observer()).despawn();

    let tuning = &config.tuning;
    let attack_center = player_size.visual_center(player_transform);

    debug!("Attack {} finished", variant.number());

    for &enemy in roster.enemies.iter() {
        let Ok((transform, size, mut velocity, mut anim, mut state)) = enemies.get_mut(enemy) else {
            continue;
        };

        let Some(impulse) = knockback(attack_center, size.visual_center(transform), variant, tuning) else {
            continue;
        };

        velocity.linvel += impulse;
        anim.play(ClipKind::Hurt, false);
        *state = EnemyState::Reacting;

        shakes.send(CameraShake {
            duration: tuning.shake_duration,
            intensity: variant.shake(tuning),
        });

        debug!("Enemy {:?} hit, knockback {:?}", enemy, impulse);
    }
}

/// Consume shake requests and jitter the scene camera around its anchor.
fn apply_screen_shake(
    time: Res<Time>,
    config: Res<SceneConfig>,
    mut requests: EventReader<CameraShake>,
    mut screen_shake: ResMut<ScreenShake>,
    mut cameras: Query<(&mut Transform, &SceneCamera)>,
) {
    for request in requests.read() {
        screen_shake.shake(request.intensity, request.duration);
    }

    // The expiring frame still runs and puts the camera back on its anchor
    if !screen_shake.is_active() {
        return;
    }

    let offset = screen_shake.update(time.delta_secs(), config.viewport());

    for (mut transform, camera) in cameras.iter_mut() {
        transform.translation = camera.anchor + offset;
    }
}
