//! Shinobi Dojo - Entry Point
//!
//! Controls:
//! - Arrow keys: Move
//! - A / S / D: Attack 1 / 2 / 3
//! - Touch: first finger steers toward itself, a second finger attacks

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Shinobi Dojo".to_string(),
                        resolution: (800.0, 600.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )

        // Physics, top-down so no gravity is configured per body
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0))

        // Our game plugin
        .add_plugins(shinobi_dojo::DojoPlugin)

        .run();
}
