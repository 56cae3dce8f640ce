//! Keyboard and touch input resolution.
//!
//! Raw device state is reduced to an [`InputSnapshot`] once per frame, then
//! [`resolve_intent`] turns the snapshot into a [`PlayerIntent`]. The split
//! keeps the rules free of Bevy resources.

use bevy::input::touch::Touches;
use bevy::prelude::*;

use super::components::{Player, PlayerIntent};
use crate::combat::{ActorSize, AttackVariant, SceneCamera};
use crate::core::{SceneConfig, Tuning};
use crate::world::SceneRoster;

/// Device state relevant to the player for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// A key
    pub attack_1: bool,
    /// S key
    pub attack_2: bool,
    /// D key
    pub attack_3: bool,
    /// World position of the first touch pointer while it is down
    pub move_pointer: Option<Vec2>,
    /// World position of the second touch pointer while it is down
    pub attack_pointer: Option<Vec2>,
}

/// Assigns touches to two pointer slots in press order.
///
/// A lifted touch frees its slot; the next new touch takes the lowest free
/// slot, so the second finger stays the attack pointer while the first
/// finger is lifted and put down again.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct PointerSlots {
    ids: [Option<u64>; 2],
}

impl PointerSlots {
    /// Track a new touch. Returns its slot, or `None` when both are taken.
    pub fn press(&mut self, id: u64) -> Option<usize> {
        if let Some(slot) = self.ids.iter().position(|&tracked| tracked == Some(id)) {
            return Some(slot);
        }
        let slot = self.ids.iter().position(Option::is_none)?;
        self.ids[slot] = Some(id);
        Some(slot)
    }

    pub fn release(&mut self, id: u64) {
        for tracked in self.ids.iter_mut() {
            if *tracked == Some(id) {
                *tracked = None;
            }
        }
    }

    /// Touch id held by `slot` (0 = movement, 1 = attack).
    pub fn get(&self, slot: usize) -> Option<u64> {
        self.ids.get(slot).copied().flatten()
    }
}

/// Normalized 4-way keyboard direction in world space (y up).
fn keyboard_direction(input: &InputSnapshot) -> Vec2 {
    let mut direction = Vec2::ZERO;
    if input.left {
        direction.x -= 1.0;
    }
    if input.right {
        direction.x += 1.0;
    }
    if input.up {
        direction.y += 1.0;
    }
    if input.down {
        direction.y -= 1.0;
    }

    // Normalize to prevent faster diagonal movement
    if direction != Vec2::ZERO {
        direction = direction.normalize();
    }
    direction
}

/// Movement vector: touch steering first, keyboard otherwise.
///
/// The first pointer steers only when it is farther than the dead zone from
/// the player's body center; otherwise the keyboard decides.
pub fn move_vector(input: &InputSnapshot, player_center: Vec2, tuning: &Tuning) -> Vec2 {
    let touch = input
        .move_pointer
        .map(|pointer| pointer - player_center)
        .filter(|offset| offset.length() > tuning.touch_dead_zone);

    let direction = match touch {
        Some(offset) => offset.normalize(),
        None => keyboard_direction(input),
    };

    direction * tuning.player_speed
}

/// Requested attack, if any.
///
/// Keys pick the variant in priority order S, D, then A. A second touch
/// pointer requests an attack too but carries no variant of its own, so on
/// its own it swings the first attack.
pub fn attack_request(input: &InputSnapshot) -> Option<AttackVariant> {
    let requested =
        input.attack_pointer.is_some() || input.attack_1 || input.attack_2 || input.attack_3;
    if !requested {
        return None;
    }

    let variant = if input.attack_2 {
        AttackVariant::Second
    } else if input.attack_3 {
        AttackVariant::Third
    } else {
        AttackVariant::First
    };
    Some(variant)
}

/// Resolve one frame of input into player intent.
pub fn resolve_intent(input: &InputSnapshot, player_center: Vec2, tuning: &Tuning) -> PlayerIntent {
    PlayerIntent {
        movement: move_vector(input, player_center, tuning),
        attack: attack_request(input),
    }
}

/// Keep pointer slots in step with touches going down and up.
pub fn track_pointers(touches: Res<Touches>, mut slots: ResMut<PointerSlots>) {
    for touch in touches.iter_just_released().chain(touches.iter_just_canceled()) {
        slots.release(touch.id());
    }
    for touch in touches.iter_just_pressed() {
        if slots.press(touch.id()).is_none() {
            debug!("Ignoring touch {}: both pointers in use", touch.id());
        }
    }
}

/// Read devices and write this frame's [`PlayerIntent`].
pub fn gather_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    slots: Res<PointerSlots>,
    config: Res<SceneConfig>,
    roster: Res<SceneRoster>,
    cameras: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    players: Query<(&Transform, &ActorSize), With<Player>>,
    mut intent: ResMut<PlayerIntent>,
) {
    let Ok((player_transform, player_size)) = players.get(roster.player) else {
        return;
    };

    let pointer = |slot: usize| -> Option<Vec2> {
        let id = slots.get(slot)?;
        let screen = touches.get_pressed(id)?.position();
        let (camera, camera_transform) = cameras.get_single().ok()?;
        camera.viewport_to_world_2d(camera_transform, screen).ok()
    };

    let snapshot = InputSnapshot {
        left: keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::ArrowRight),
        up: keyboard.pressed(KeyCode::ArrowUp),
        down: keyboard.pressed(KeyCode::ArrowDown),
        attack_1: keyboard.pressed(KeyCode::KeyA),
        attack_2: keyboard.pressed(KeyCode::KeyS),
        attack_3: keyboard.pressed(KeyCode::KeyD),
        move_pointer: pointer(0),
        attack_pointer: pointer(1),
    };

    *intent = resolve_intent(&snapshot, player_size.body_center(player_transform), &config.tuning);
}
