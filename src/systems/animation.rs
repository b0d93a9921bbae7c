//! Spritesheet animation system.
//!
//! Advances every running [`SheetAnimation`] one frame per 50 ms of wall
//! time and writes the resulting tile offset into the entity's [`Sprite`],
//! so the render pass only ever reads the sprite component.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::sheetanimation::{FRAME_STEP_SECONDS, SheetAnimation};
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// Advance running animations and refresh sprite tile offsets.
pub fn sheet_animation_system(
    mut query: Query<(&mut SheetAnimation, &mut Sprite)>,
    time: Res<WorldTime>,
) {
    for (mut anim, mut sprite) in query.iter_mut() {
        if !anim.running {
            continue;
        }

        if time.elapsed - anim.last_advance > FRAME_STEP_SECONDS {
            anim.advance_frame();
            anim.last_advance = time.elapsed;
        }

        sprite.offset = Vector2 {
            x: anim.col as f32 * sprite.width + anim.hoff,
            y: anim.row as f32 * sprite.height + anim.voff,
        };
    }
}
