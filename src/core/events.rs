//! Global events used for cross-system communication.
//!
//! `AnimationFinished` is delivered as an entity-targeted trigger so that
//! observers attached to a single actor see only their own clips.
//! `CameraShake` is a buffered event consumed by the camera feedback system.

use bevy::prelude::*;

use crate::animation::ClipKind;

/// Triggered on an entity when a non-looping clip plays past its last frame.
///
/// Fired once per play of the clip. Looping clips never finish.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFinished {
    /// The clip that just completed
    pub clip: ClipKind,
}

/// Sent when something wants the scene camera to shake.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CameraShake {
    /// Shake length in seconds
    pub duration: f32,
    /// Fraction of the viewport size used as the maximum offset
    pub intensity: f32,
}
