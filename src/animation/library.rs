//! Loaded sprite sheets and the systems that play them.

use bevy::prelude::*;
use std::collections::HashMap;

use super::components::{AnimationTick, ClipKind, ClipTiming, SpriteAnimation};
use super::data::CharacterRegistry;
use crate::core::{AnimationFinished, GameState};

/// Everything needed to show one clip on a sprite.
#[derive(Debug, Clone)]
pub struct ClipHandles {
    pub image: Handle<Image>,
    pub layout: Handle<TextureAtlasLayout>,
    pub timing: ClipTiming,
}

/// Texture and atlas handles for every (character, clip) pair.
#[derive(Resource, Default)]
pub struct AnimationLibrary {
    clips: HashMap<(String, ClipKind), ClipHandles>,
}

impl AnimationLibrary {
    pub fn insert(&mut self, character: impl Into<String>, clip: ClipKind, handles: ClipHandles) {
        self.clips.insert((character.into(), clip), handles);
    }

    pub fn get(&self, character: &str, clip: ClipKind) -> Option<&ClipHandles> {
        // Tuple keys need an owned String for lookup
        self.clips.get(&(character.to_string(), clip))
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// Register every clip of every loaded character, then start the game.
pub fn build_animation_library(
    asset_server: Res<AssetServer>,
    registry: Res<CharacterRegistry>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    mut library: ResMut<AnimationLibrary>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for (character, definition) in registry.definitions.iter() {
        let (frame_w, frame_h) = definition.frame_size;

        for (&kind, clip) in definition.clips.iter() {
            let layout = TextureAtlasLayout::from_grid(
                UVec2::new(frame_w, frame_h),
                clip.frames as u32,
                1,
                None,
                None,
            );

            library.insert(
                character.clone(),
                kind,
                ClipHandles {
                    image: asset_server.load(&clip.sheet),
                    layout: layouts.add(layout),
                    timing: clip.timing(),
                },
            );
        }
    }

    if library.is_empty() {
        warn!("No animation clips registered; characters will neither animate nor attack");
    } else {
        info!("Registered {} animation clips", library.len());
    }
    next_state.set(GameState::InGame);
}

/// Step every sprite animation and fire `AnimationFinished` on one-shot ends.
pub fn advance_animations(
    mut commands: Commands,
    time: Res<Time>,
    library: Res<AnimationLibrary>,
    mut query: Query<(Entity, &mut SpriteAnimation, &mut Sprite)>,
) {
    for (entity, mut anim, mut sprite) in query.iter_mut() {
        let clip = anim.clip();
        let Some(handles) = library.get(&anim.character, clip) else {
            continue;
        };

        if anim.take_swap() {
            sprite.image = handles.image.clone();
            sprite.texture_atlas = Some(TextureAtlas {
                layout: handles.layout.clone(),
                index: 0,
            });
        }

        let tick = anim.tick(time.delta_secs(), handles.timing);

        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = anim.frame();
        }

        if tick == AnimationTick::Finished {
            commands.trigger_targets(AnimationFinished { clip }, entity);
        }
    }
}
