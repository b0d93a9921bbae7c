//! Rider and bow behavior.
//!
//! The rider swaps between the run and jump sheets on the jump key. The
//! bow aims at the mouse cursor, plays its draw half on press, and on
//! release fires an arrow when fully drawn before playing its release
//! half. Arrow velocity is the raw aim vector from the arrow emitter to
//! the cursor, so longer pulls shoot harder.

use bevy_ecs::prelude::*;

use crate::components::archetype::{Archetype, Emitter};
use crate::components::mapposition::MapPosition;
use crate::components::player::{
    BOW_DRAW_FRAMES, BOW_FULL_DRAW_FRAME, BOW_RELEASE_FRAMES, Bow, RIDER_JUMP_POS, RIDER_RUN_POS,
    Rider,
};
use crate::components::rotation::Rotation;
use crate::components::sheetanimation::SheetAnimation;
use crate::components::sprite::Sprite;
use crate::events::audio::AudioCmd;
use crate::resources::input::InputState;
use crate::resources::session::Session;
use crate::resources::worldtime::WorldTime;
use crate::systems::emitter::spawn_from_emitter;

/// Swap the rider to the jump sheet on the jump key and back to the run
/// sheet once the jump clip reaches its last frame.
pub fn rider_control_system(
    mut query: Query<(
        &mut Rider,
        &mut Sprite,
        &mut SheetAnimation,
        &mut MapPosition,
    )>,
    input: Res<InputState>,
    time: Res<WorldTime>,
) {
    for (mut rider, mut sprite, mut anim, mut position) in query.iter_mut() {
        if input.jump.just_pressed {
            *sprite = Rider::jump_sprite();
            *anim = Rider::jump_animation(time.elapsed);
            position.pos = RIDER_JUMP_POS;
            rider.jumping = true;
        } else if rider.jumping && anim.frame + 1 >= anim.nframes {
            *sprite = Rider::run_sprite();
            *anim = Rider::run_animation(time.elapsed);
            position.pos = RIDER_RUN_POS;
            rider.jumping = false;
        }
    }
}

/// Point the bow at the mouse cursor.
pub fn bow_aim_system(
    mut query: Query<(&MapPosition, &mut Rotation), With<Bow>>,
    input: Res<InputState>,
) {
    for (position, mut rotation) in query.iter_mut() {
        let dx = input.mouse_pos.x - position.pos.x;
        let dy = input.mouse_pos.y - position.pos.y;
        rotation.degrees = dy.atan2(dx).to_degrees();
    }
}

/// Drive the bow draw/release halves and fire arrows.
pub fn bow_control_system(
    mut bows: Query<&mut SheetAnimation, With<Bow>>,
    mut emitters: Query<(&mut Emitter, &MapPosition)>,
    input: Res<InputState>,
    session: Res<Session>,
    time: Res<WorldTime>,
    mut commands: Commands,
    mut audio: MessageWriter<AudioCmd>,
) {
    if input.fire.just_pressed {
        for mut anim in bows.iter_mut() {
            anim.nframes = BOW_DRAW_FRAMES;
            anim.start(time.elapsed);
        }
        if !session.game_over {
            audio.write(AudioCmd::PlayFx {
                id: "draw_bow".into(),
            });
        }
    }

    if input.fire.just_released {
        let mut fully_drawn = false;
        for mut anim in bows.iter_mut() {
            if anim.frame == BOW_FULL_DRAW_FRAME {
                fully_drawn = true;
            }
            // continue into the release half of the sheet
            anim.seek(BOW_DRAW_FRAMES);
            anim.nframes = BOW_RELEASE_FRAMES;
        }

        for (mut emitter, position) in emitters.iter_mut() {
            if emitter.archetype != Archetype::Arrow {
                continue;
            }
            emitter.velocity = input.mouse_pos - position.pos;
            if fully_drawn && !session.game_over {
                spawn_from_emitter(&mut commands, &emitter, position, time.elapsed);
                audio.write(AudioCmd::PlayFx {
                    id: "fire_bow".into(),
                });
            }
        }
    }
}

/// Stop the bow clip once the release half has played out.
pub fn bow_settle_system(mut bows: Query<&mut SheetAnimation, With<Bow>>) {
    for mut anim in bows.iter_mut() {
        if anim.running && anim.frame + 1 >= BOW_RELEASE_FRAMES {
            anim.stop();
        }
    }
}
