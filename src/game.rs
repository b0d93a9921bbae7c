//! Scene setup.
//!
//! Loads every texture, spawns the static backdrop, the four paired
//! parallax layers, the rider and bow, and the three emitters, and queues
//! the initial audio commands. Runs once before the main loop.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::archetype::{Archetype, Emitter};
use crate::components::mapposition::MapPosition;
use crate::components::parallax::{ScrollLayer, WrapPartner};
use crate::components::player::{BOW_POS, Bow, RIDER_RUN_POS, Rider};
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::TextureStore;
use crate::systems::bounds::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

const TEXTURES: &[(&str, &str)] = &[
    ("background", "assets/images/background.png"),
    ("clouds", "assets/images/clouds.png"),
    ("mountains", "assets/images/mountains.png"),
    ("trees", "assets/images/trees.png"),
    ("grass", "assets/images/grass.png"),
    ("horse_run", "assets/images/horse_run.png"),
    ("horse_jump", "assets/images/horse_jump.png"),
    ("bow", "assets/images/bow.png"),
    ("arrow", "assets/images/arrow.png"),
    ("mushroom", "assets/images/mushroom.png"),
    ("eye", "assets/images/eye.png"),
];

/// Distant layers scroll slower: scroll step is `scroll_speed / divisor`.
const LAYERS: &[(&str, f32, i32)] = &[
    ("clouds", 12.0, -9),
    ("mountains", 6.0, -8),
    ("trees", 2.0, -7),
    ("grass", 1.0, -6),
];

/// Load all textures into the store. Missing files log a warning and the
/// render pass skips their sprites.
pub fn load_textures(rl: &mut RaylibHandle, thread: &RaylibThread, store: &mut TextureStore) {
    for (key, path) in TEXTURES {
        match rl.load_texture(thread, path) {
            Ok(texture) => store.insert(*key, texture),
            Err(error) => warn!("failed to load texture '{key}' from {path}: {error}"),
        }
    }
}

/// Spawn the whole scene and queue the initial audio commands.
pub fn setup(world: &mut World) {
    // Static backdrop behind the scrolling layers.
    world.spawn((
        Sprite::whole("background", PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
        MapPosition::new(0.0, 0.0),
        ZIndex(-10),
    ));

    // Each parallax layer is a pair of screen-wide images; when one slides
    // off the left edge it re-enters to the right of its partner.
    for (key, divisor, z) in LAYERS {
        let left = world
            .spawn((
                Sprite::whole(*key, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
                MapPosition::new(0.0, 0.0),
                ScrollLayer { divisor: *divisor },
                ZIndex(*z),
            ))
            .id();
        let right = world
            .spawn((
                Sprite::whole(*key, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
                MapPosition::new(PLAYFIELD_WIDTH, 0.0),
                ScrollLayer { divisor: *divisor },
                WrapPartner(left),
                ZIndex(*z),
            ))
            .id();
        world.entity_mut(left).insert(WrapPartner(right));
    }

    world.spawn((
        Rider::default(),
        Rider::run_sprite(),
        Rider::run_animation(0.0),
        MapPosition { pos: RIDER_RUN_POS },
        ZIndex(1),
    ));

    world.spawn((
        Bow,
        Bow::sprite(),
        Bow::animation(),
        MapPosition { pos: BOW_POS },
        Rotation {
            degrees: 0.0,
            pivot: Vector2 { x: 0.0, y: 22.5 },
        },
        ZIndex(3),
    ));

    // Emitters are invisible spawn points; the arrow emitter sits at the
    // bow and gets its velocity from the aim on release.
    world.spawn((
        Emitter::new(Archetype::Arrow, Vector2::zero()),
        MapPosition::new(132.0, 710.0),
    ));
    world.spawn((
        Emitter::new(Archetype::Mushroom, Vector2 { x: -225.0, y: 0.0 }),
        MapPosition::new(850.0, 665.0),
    ));
    world.spawn((
        Emitter::new(Archetype::Eye, Vector2 { x: -225.0, y: 90.0 }),
        MapPosition::new(900.0, 300.0),
    ));

    let music_volume = world.resource::<GameConfig>().music_volume;
    let mut audio = world.resource_mut::<Messages<AudioCmd>>();
    audio.write(AudioCmd::LoadMusic {
        id: "music".into(),
        path: "assets/audio/music.mp3".into(),
    });
    audio.write(AudioCmd::LoadFx {
        id: "draw_bow".into(),
        path: "assets/audio/draw_bow.wav".into(),
    });
    audio.write(AudioCmd::LoadFx {
        id: "fire_bow".into(),
        path: "assets/audio/fire_bow.wav".into(),
    });
    audio.write(AudioCmd::PlayMusic {
        id: "music".into(),
        looped: true,
    });
    audio.write(AudioCmd::VolumeMusic {
        id: "music".into(),
        vol: music_volume,
    });

    info!("scene ready");
}
