//! Emission: turning an [`Emitter`] template into live entities.
//!
//! [`spawn_from_emitter`] instantiates one entity from an emitter's
//! archetype preset; [`enemy_spawner_system`] drives the second-aligned
//! enemy cadence from the [`SpawnDirector`]. Arrow emission is triggered by
//! the bow input system instead.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::archetype::{Archetype, Emitter};
use crate::components::boxcollider::BoxCollider;
use crate::components::lifespan::Lifespan;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sheetanimation::SheetAnimation;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::session::SpawnDirector;
use crate::resources::worldtime::WorldTime;

/// Instantiate one entity from the emitter's archetype preset.
///
/// The new entity gets the preset's sprite, collider, and body, with the
/// emitter's position and velocity template; its animation starts at `now`.
pub fn spawn_from_emitter(
    commands: &mut Commands,
    emitter: &Emitter,
    position: &MapPosition,
    now: f32,
) -> Entity {
    let preset = emitter.archetype.preset();

    let sprite = match preset.sheet {
        Some(_) => Sprite::sheet(preset.tex_key, preset.draw_width, preset.draw_height),
        None => Sprite::whole(preset.tex_key, preset.draw_width, preset.draw_height),
    };

    let mut anim = match preset.sheet {
        Some(layout) => SheetAnimation::new(layout.ntiles_x, layout.ntiles_y, layout.nframes),
        // static sprites keep a degenerate clip so physics stays time-gated
        // the same way as animated ones
        None => SheetAnimation::new(1, 1, 1),
    };
    anim.start(now);

    let body = RigidBody {
        velocity: emitter.velocity,
        acceleration: preset.base_acceleration,
        gravity_bound: preset.gravity_bound,
        ..RigidBody::new()
    };

    commands
        .spawn((
            emitter.archetype,
            MapPosition {
                pos: position.pos,
            },
            body,
            sprite,
            anim,
            BoxCollider::new(preset.collider_width, preset.collider_height),
            Lifespan::default(),
            ZIndex(2),
        ))
        .id()
}

/// Emit enemies on every whole second divisible by the director's rate.
///
/// On a qualifying tick: one mushroom always spawns; an eye joins it in
/// phase 2 and on every `rate*4` tick; every `rate*10` tick tightens the
/// rate down to 2 seconds, after which phase 2 begins.
pub fn enemy_spawner_system(
    emitters: Query<(&Emitter, &MapPosition)>,
    time: Res<WorldTime>,
    mut director: ResMut<SpawnDirector>,
    mut commands: Commands,
) {
    let rounded = time.elapsed.round() as u64;
    let rate = u64::from(director.enemy_rate);

    if rate == 0 || rounded % rate != 0 {
        director.just_spawned = false;
        return;
    }
    if director.just_spawned {
        return;
    }

    let spawn_eye_wave = rounded % (rate * 4) == 0;
    for (emitter, position) in emitters.iter() {
        match emitter.archetype {
            Archetype::Mushroom => {
                spawn_from_emitter(&mut commands, emitter, position, time.elapsed);
            }
            Archetype::Eye if director.phase2 || spawn_eye_wave => {
                spawn_from_emitter(&mut commands, emitter, position, time.elapsed);
            }
            _ => {}
        }
    }

    if rounded % (rate * 10) == 0 {
        if director.enemy_rate > 2 {
            director.enemy_rate -= 1;
            info!("enemy spawn rate tightened to {}s", director.enemy_rate);
        } else if !director.phase2 {
            director.phase2 = true;
            info!("phase 2: eyes join every wave");
        }
    }

    director.just_spawned = true;
}
