//! Combat-related components.

use bevy::prelude::*;

use crate::animation::ClipKind;
use crate::core::Tuning;

/// One of the three combo attacks.
///
/// Higher variants are slower finishers with a lighter push and a smaller
/// shake: power is `base / variant²`, shake is `base / variant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackVariant {
    First,
    Second,
    Third,
}

impl AttackVariant {
    pub fn number(self) -> u8 {
        match self {
            AttackVariant::First => 1,
            AttackVariant::Second => 2,
            AttackVariant::Third => 3,
        }
    }

    pub fn clip(self) -> ClipKind {
        match self {
            AttackVariant::First => ClipKind::Attack1,
            AttackVariant::Second => ClipKind::Attack2,
            AttackVariant::Third => ClipKind::Attack3,
        }
    }

    pub fn from_clip(clip: ClipKind) -> Option<Self> {
        match clip {
            ClipKind::Attack1 => Some(AttackVariant::First),
            ClipKind::Attack2 => Some(AttackVariant::Second),
            ClipKind::Attack3 => Some(AttackVariant::Third),
            _ => None,
        }
    }

    /// Knockback speed added to enemies caught by this attack.
    pub fn power(self, tuning: &Tuning) -> f32 {
        let n = self.number() as f32;
        tuning.knockback_power / (n * n)
    }

    /// Camera shake intensity requested per enemy hit.
    pub fn shake(self, tuning: &Tuning) -> f32 {
        tuning.shake_intensity / self.number() as f32
    }
}

/// Whether the player is mid-swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttackPhase {
    #[default]
    Idle,
    Attacking(AttackVariant),
}

/// Player attack state machine.
///
/// `Idle -> Attacking` through [`AttackState::begin`], `Attacking -> Idle`
/// through [`AttackState::finish`] when the attack clip completes.
#[derive(Component, Debug, Clone, Default)]
pub struct AttackState {
    phase: AttackPhase,
    last_variant: Option<AttackVariant>,
}

impl AttackState {
    pub fn phase(&self) -> AttackPhase {
        self.phase
    }

    pub fn is_attacking(&self) -> bool {
        matches!(self.phase, AttackPhase::Attacking(_))
    }

    /// Variant of the most recently completed attack.
    pub fn last_variant(&self) -> Option<AttackVariant> {
        self.last_variant
    }

    /// Start an attack. Returns false and changes nothing if one is running.
    pub fn begin(&mut self, variant: AttackVariant) -> bool {
        if self.is_attacking() {
            return false;
        }
        self.phase = AttackPhase::Attacking(variant);
        true
    }

    /// Complete the running attack, returning its variant.
    pub fn finish(&mut self) -> Option<AttackVariant> {
        let AttackPhase::Attacking(variant) = self.phase else {
            return None;
        };
        self.phase = AttackPhase::Idle;
        self.last_variant = Some(variant);
        Some(variant)
    }
}

/// Sprite frame and physics hitbox dimensions of an actor.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ActorSize {
    pub frame: Vec2,
    pub hitbox: Vec2,
}

impl ActorSize {
    pub fn new(frame: Vec2, hitbox: Vec2) -> Self {
        Self { frame, hitbox }
    }

    /// Center of the physics body; the collider sits on the entity origin.
    pub fn body_center(&self, transform: &Transform) -> Vec2 {
        transform.translation.truncate()
    }

    /// Anchor position offset by half the sprite frame.
    ///
    /// Attack reach is measured between these points. They sit half a frame
    /// away from [`ActorSize::body_center`], so distances between two actors
    /// only agree with body distances when both use the same frame size.
    pub fn visual_center(&self, transform: &Transform) -> Vec2 {
        transform.translation.truncate() + self.frame / 2.0
    }
}

/// The scene camera; shake offsets are applied around `anchor`.
#[derive(Component, Debug, Clone, Copy)]
pub struct SceneCamera {
    pub anchor: Vec3,
}

/// Screen shake effect resource.
#[derive(Resource, Default)]
pub struct ScreenShake {
    /// Maximum offset as a fraction of the viewport size
    pub intensity: f32,
    pub duration: f32,
    pub timer: f32,
}

impl ScreenShake {
    pub fn shake(&mut self, intensity: f32, duration: f32) {
        // Only override if new shake is stronger
        if intensity > self.intensity || self.timer <= 0.0 {
            self.intensity = intensity;
            self.duration = duration;
            self.timer = duration;
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }

    /// Advance the shake and return this frame's camera offset.
    pub fn update(&mut self, delta: f32, viewport: Vec2) -> Vec3 {
        if self.timer <= 0.0 {
            return Vec3::ZERO;
        }

        self.timer -= delta;
        if self.timer <= 0.0 {
            self.intensity = 0.0;
            return Vec3::ZERO;
        }

        let progress = self.timer / self.duration;
        let current = viewport * self.intensity * progress;

        // Random offset
        let x = (rand::random::<f32>() - 0.5) * 2.0 * current.x;
        let y = (rand::random::<f32>() - 0.5) * 2.0 * current.y;

        Vec3::new(x, y, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_power_and_shake() {
        let tuning = Tuning::default();
        assert_eq!(AttackVariant::First.power(&tuning), 60.0);
        assert_eq!(AttackVariant::Second.power(&tuning), 15.0);
        assert!((AttackVariant::Third.power(&tuning) - 60.0 / 9.0).abs() < 1e-5);

        assert_eq!(AttackVariant::First.shake(&tuning), 0.001);
        assert_eq!(AttackVariant::Second.shake(&tuning), 0.0005);
    }

    #[test]
    fn test_variant_clip_mapping() {
        for variant in [AttackVariant::First, AttackVariant::Second, AttackVariant::Third] {
            assert_eq!(AttackVariant::from_clip(variant.clip()), Some(variant));
        }
        assert_eq!(AttackVariant::from_clip(ClipKind::Run), None);
    }

    #[test]
    fn test_attack_state_default() {
        let state = AttackState::default();
        assert_eq!(state.phase(), AttackPhase::Idle);
        assert_eq!(state.last_variant(), None);
    }

    #[test]
    fn test_cannot_attack_while_attacking() {
        let mut state = AttackState::default();
        assert!(state.begin(AttackVariant::Second));
        assert!(!state.begin(AttackVariant::First));
        assert_eq!(state.phase(), AttackPhase::Attacking(AttackVariant::Second));
        // No variant is recorded until the swing completes
        assert_eq!(state.last_variant(), None);
    }

    #[test]
    fn test_finish_records_variant_once() {
        let mut state = AttackState::default();
        state.begin(AttackVariant::Third);

        assert_eq!(state.finish(), Some(AttackVariant::Third));
        assert_eq!(state.last_variant(), Some(AttackVariant::Third));
        assert!(!state.is_attacking());

        assert_eq!(state.finish(), None);
        assert_eq!(state.last_variant(), Some(AttackVariant::Third));
    }

    #[test]
    fn test_visual_and_body_centers_differ() {
        let transform = Transform::from_xyz(100.0, 150.0, 0.0);
        let samurai = ActorSize::new(Vec2::splat(128.0), Vec2::new(64.0, 128.0));
        assert_eq!(samurai.body_center(&transform), Vec2::new(100.0, 150.0));
        assert_eq!(samurai.visual_center(&transform), Vec2::new(164.0, 214.0));

        // Equal frames: the offsets cancel and both distances agree
        let other = Transform::from_xyz(130.0, 190.0, 0.0);
        let body = samurai.body_center(&transform).distance(samurai.body_center(&other));
        let visual = samurai.visual_center(&transform).distance(samurai.visual_center(&other));
        assert!((body - visual).abs() < 1e-4);

        // Different frames: the two measures diverge
        let small = ActorSize::new(Vec2::splat(64.0), Vec2::new(32.0, 64.0));
        let visual = samurai.visual_center(&transform).distance(small.visual_center(&other));
        assert!((body - visual).abs() > 1.0);
    }

    #[test]
    fn test_weaker_shake_does_not_override() {
        let mut shake = ScreenShake::default();
        shake.shake(0.001, 0.5);
        shake.shake(0.0005, 0.5);
        assert_eq!(shake.intensity, 0.001);

        shake.shake(0.002, 0.25);
        assert_eq!(shake.intensity, 0.002);
        assert_eq!(shake.timer, 0.25);
    }

    #[test]
    fn test_shake_offset_bounded_and_expires() {
        let viewport = Vec2::new(800.0, 600.0);
        let mut shake = ScreenShake::default();
        shake.shake(0.001, 0.5);

        let offset = shake.update(0.1, viewport);
        assert!(offset.x.abs() <= 0.8 && offset.y.abs() <= 0.6);
        assert_eq!(offset.z, 0.0);

        assert_eq!(shake.update(1.0, viewport), Vec3::ZERO);
        assert!(!shake.is_active());
    }
}
