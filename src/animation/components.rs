//! Sprite animation player state.

use bevy::prelude::*;
use serde::Deserialize;
use std::fmt;

/// Every clip a character sheet can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ClipKind {
    Idle,
    Walk,
    Run,
    Attack1,
    Attack2,
    Attack3,
    Hurt,
}

impl ClipKind {
    pub const ALL: [ClipKind; 7] = [
        ClipKind::Idle,
        ClipKind::Walk,
        ClipKind::Run,
        ClipKind::Attack1,
        ClipKind::Attack2,
        ClipKind::Attack3,
        ClipKind::Hurt,
    ];

    pub fn is_attack(self) -> bool {
        matches!(self, ClipKind::Attack1 | ClipKind::Attack2 | ClipKind::Attack3)
    }
}

impl fmt::Display for ClipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            ClipKind::Idle => "idle",
            ClipKind::Walk => "walk",
            ClipKind::Run => "run",
            ClipKind::Attack1 => "attack-1",
            ClipKind::Attack2 => "attack-2",
            ClipKind::Attack3 => "attack-3",
            ClipKind::Hurt => "hurt",
        };
        f.write_str(key)
    }
}

/// Frame timing of one clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipTiming {
    pub frames: usize,
    /// Seconds each frame stays on screen
    pub frame_duration: f32,
    pub looping: bool,
}

impl ClipTiming {
    pub fn new(frames: usize, fps: f32, looping: bool) -> Self {
        Self {
            frames,
            frame_duration: 1.0 / fps,
            looping,
        }
    }
}

/// What happened to an animation during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationTick {
    /// Not playing, nothing changed
    Stopped,
    /// Still on the same frame
    Held,
    /// Moved to a new frame
    Advanced,
    /// A one-shot clip ran past its last frame and stopped
    Finished,
}

/// Plays clips from a character's sprite sheets.
///
/// Mirrors a classic sprite animation player: `play` switches clips,
/// `tick` advances frames, and a one-shot clip stops on its last frame when
/// it finishes. The system driving it fires `AnimationFinished` on `Finished`.
#[derive(Component, Debug, Clone)]
pub struct SpriteAnimation {
    /// Character definition name the clips come from
    pub character: String,
    clip: ClipKind,
    frame: usize,
    elapsed: f32,
    playing: bool,
    /// The sprite still shows the previous clip's sheet
    needs_swap: bool,
}

impl SpriteAnimation {
    pub fn new(character: impl Into<String>, clip: ClipKind) -> Self {
        Self {
            character: character.into(),
            clip,
            frame: 0,
            elapsed: 0.0,
            playing: true,
            needs_swap: true,
        }
    }

    pub fn clip(&self) -> ClipKind {
        self.clip
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Start `clip` from its first frame.
    ///
    /// With `ignore_if_playing` set, a clip that is already running keeps
    /// its progress. A finished one-shot clip is restarted either way.
    pub fn play(&mut self, clip: ClipKind, ignore_if_playing: bool) {
        if ignore_if_playing && self.playing && self.clip == clip {
            return;
        }
        if self.clip != clip {
            self.needs_swap = true;
        }
        self.clip = clip;
        self.frame = 0;
        self.elapsed = 0.0;
        self.playing = true;
    }

    /// Clear the sheet-swap flag, returning whether a swap was pending.
    pub fn take_swap(&mut self) -> bool {
        std::mem::take(&mut self.needs_swap)
    }

    /// Advance by `delta` seconds using the current clip's timing.
    pub fn tick(&mut self, delta: f32, timing: ClipTiming) -> AnimationTick {
        if !self.playing || timing.frames == 0 {
            return AnimationTick::Stopped;
        }

        self.elapsed += delta;
        let mut result = AnimationTick::Held;

        while self.elapsed >= timing.frame_duration {
            self.elapsed -= timing.frame_duration;

            if self.frame + 1 < timing.frames {
                self.frame += 1;
                result = AnimationTick::Advanced;
            } else if timing.looping {
                self.frame = 0;
                result = AnimationTick::Advanced;
            } else {
                self.playing = false;
                self.elapsed = 0.0;
                return AnimationTick::Finished;
            }
        }

        result
    }
}
