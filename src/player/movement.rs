//! Player control: attack start and movement.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Player, PlayerIntent};
use crate::animation::{AnimationLibrary, ClipKind, SpriteAnimation};
use crate::combat::{finish_attack, AttackState};
use crate::world::SceneRoster;

/// Run condition: true unless the player is mid-attack.
pub fn player_ready(players: Query<&AttackState, With<Player>>) -> bool {
    players.iter().all(|attack| !attack.is_attacking())
}

/// Apply this frame's intent to the player.
///
/// An attack request wins over movement: the player stops, the attack clip
/// starts and a one-shot observer waits for it to finish. While an attack
/// runs, intent is ignored entirely.
///
/// An attack only starts when the actor's library has its clip; without it
/// the swing could never complete.
pub fn player_control(
    mut commands: Commands,
    intent: Res<PlayerIntent>,
    roster: Res<SceneRoster>,
    library: Res<AnimationLibrary>,
    mut players: Query<
        (&mut AttackState, &mut Velocity, &mut Sprite, &mut SpriteAnimation),
        With<Player>,
    >,
) {
    let player = roster.player;
    let Ok((mut attack, mut velocity, mut sprite, mut anim)) = players.get_mut(player) else {
        return;
    };

    if attack.is_attacking() {
        return;
    }

    let attack_request = intent
        .attack
        .filter(|variant| library.get(&anim.character, variant.clip()).is_some());

    if let Some(variant) = attack_request {
        attack.begin(variant);
        velocity.linvel = Vec2::ZERO;
        anim.play(variant.clip(), true);
        commands.entity(player).observe(finish_attack);
        debug!("Attack {} started", variant.number());
    } else if intent.movement != Vec2::ZERO {
        velocity.linvel = intent.movement;
        sprite.flip_x = intent.movement.x < 0.0;
        anim.play(ClipKind::Run, true);
    } else {
        velocity.linvel = Vec2::ZERO;
        anim.play(ClipKind::Idle, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::observer::Observer;
    use bevy::ecs::system::System;

    use crate::animation::{ClipHandles, ClipTiming};
    use crate::combat::{AttackPhase, AttackVariant};

    fn samurai_attacks() -> AnimationLibrary {
        let mut library = AnimationLibrary::default();
        for variant in [AttackVariant::First, AttackVariant::Second, AttackVariant::Third] {
            library.insert(
                "samurai",
                variant.clip(),
                ClipHandles {
                    image: Handle::default(),
                    layout: Handle::default(),
                    timing: ClipTiming::new(4, 15.0, false),
                },
            );
        }
        library
    }

    fn control_app() -> (App, Entity) {
        let mut app = App::new();
        app.init_resource::<PlayerIntent>()
            .insert_resource(samurai_attacks())
            .add_systems(Update, player_control);

        let world = app.world_mut();
        let player = world
            .spawn((
                Player,
                AttackState::default(),
                Velocity::zero(),
                Sprite::default(),
                SpriteAnimation::new("samurai", ClipKind::Idle),
            ))
            .id();
        world.insert_resource(SceneRoster {
            player,
            enemies: Vec::new(),
        });

        (app, player)
    }

    fn set_intent(app: &mut App, intent: PlayerIntent) {
        *app.world_mut().resource_mut::<PlayerIntent>() = intent;
    }

    fn observer_count(app: &mut App) -> usize {
        let world = app.world_mut();
        world.query::<&Observer>().iter(world).count()
    }

    #[test]
    fn test_run_and_face_left() {
        let (mut app, player) = control_app();
        set_intent(&mut app, PlayerIntent { movement: Vec2::new(-160.0, 0.0), attack: None });
        app.update();

        let world = app.world();
        assert_eq!(world.get::<Velocity>(player).unwrap().linvel, Vec2::new(-160.0, 0.0));
        assert!(world.get::<Sprite>(player).unwrap().flip_x);
        assert_eq!(world.get::<SpriteAnimation>(player).unwrap().clip(), ClipKind::Run);
    }

    #[test]
    fn test_idle_keeps_facing() {
        let (mut app, player) = control_app();
        set_intent(&mut app, PlayerIntent { movement: Vec2::new(-160.0, 0.0), attack: None });
        app.update();
        set_intent(&mut app, PlayerIntent::default());
        app.update();

        let world = app.world();
        assert_eq!(world.get::<Velocity>(player).unwrap().linvel, Vec2::ZERO);
        assert!(world.get::<Sprite>(player).unwrap().flip_x);
        assert_eq!(world.get::<SpriteAnimation>(player).unwrap().clip(), ClipKind::Idle);
    }

    #[test]
    fn test_attack_stops_player_and_subscribes_once() {
        let (mut app, player) = control_app();
        let before = observer_count(&mut app);

        set_intent(&mut app, PlayerIntent { movement: Vec2::new(160.0, 0.0), attack: None });
        app.update();
        set_intent(
            &mut app,
            PlayerIntent {
                movement: Vec2::new(160.0, 0.0),
                attack: Some(AttackVariant::Third),
            },
        );
        app.update();

        let world = app.world();
        assert_eq!(
            world.get::<AttackState>(player).unwrap().phase(),
            AttackPhase::Attacking(AttackVariant::Third)
        );
        assert_eq!(world.get::<Velocity>(player).unwrap().linvel, Vec2::ZERO);
        assert_eq!(world.get::<SpriteAnimation>(player).unwrap().clip(), ClipKind::Attack3);
        assert_eq!(observer_count(&mut app), before + 1);

        // Held input while swinging changes nothing
        set_intent(
            &mut app,
            PlayerIntent {
                movement: Vec2::new(0.0, -160.0),
                attack: Some(AttackVariant::First),
            },
        );
        for _ in 0..3 {
            app.update();
        }

        let world = app.world();
        assert_eq!(
            world.get::<AttackState>(player).unwrap().phase(),
            AttackPhase::Attacking(AttackVariant::Third)
        );
        assert_eq!(world.get::<Velocity>(player).unwrap().linvel, Vec2::ZERO);
        assert_eq!(world.get::<SpriteAnimation>(player).unwrap().clip(), ClipKind::Attack3);
        assert_eq!(observer_count(&mut app), before + 1);
    }

    #[test]
    fn test_attack_without_clip_is_not_started() {
        let (mut app, player) = control_app();
        app.insert_resource(AnimationLibrary::default());
        let before = observer_count(&mut app);

        set_intent(
            &mut app,
            PlayerIntent {
                movement: Vec2::new(160.0, 0.0),
                attack: Some(AttackVariant::First),
            },
        );
        app.update();

        // Falls through to movement instead of locking into the swing
        let world = app.world();
        assert!(!world.get::<AttackState>(player).unwrap().is_attacking());
        assert_eq!(world.get::<Velocity>(player).unwrap().linvel, Vec2::new(160.0, 0.0));
        assert_eq!(world.get::<SpriteAnimation>(player).unwrap().clip(), ClipKind::Run);
        assert_eq!(observer_count(&mut app), before);
    }

    #[test]
    fn test_player_ready_condition() {
        let (mut app, player) = control_app();
        let mut ready = IntoSystem::into_system(player_ready);
        ready.initialize(app.world_mut());
        assert!(ready.run((), app.world_mut()));

        app.world_mut()
            .get_mut::<AttackState>(player)
            .unwrap()
            .begin(AttackVariant::First);
        assert!(!ready.run((), app.world_mut()));
    }
}
