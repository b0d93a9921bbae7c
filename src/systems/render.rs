//! Render pass.
//!
//! Draws every sprite sorted by z-index then spawn order, rotated around
//! its pivot where a [`Rotation`] is present. The rider and bow are hidden
//! once the run is over, and the HUD (score, game-over banner) draws last.
//!
//! The raylib handle and thread are taken out of the world for the
//! duration of the pass so the draw handle can borrow them while entity
//! queries run.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::{Bow, Rider};
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::session::Session;
use crate::resources::texturestore::TextureStore;

pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    let session = *world.resource::<Session>();

    // Collect the draw list before borrowing the handle for drawing.
    let mut to_draw: Vec<(Sprite, Vector2, Rotation, i32)> = {
        let mut query = world.query::<(
            &Sprite,
            &MapPosition,
            Option<&Rotation>,
            Option<&ZIndex>,
            Has<Rider>,
            Has<Bow>,
        )>();
        query
            .iter(world)
            .filter_map(|(sprite, position, rotation, z, is_rider, is_bow)| {
                if session.game_over && (is_rider || is_bow) {
                    return None;
                }
                Some((
                    sprite.clone(),
                    position.pos,
                    rotation.copied().unwrap_or_default(),
                    z.map(|z| z.0).unwrap_or(0),
                ))
            })
            .collect()
    };
    to_draw.sort_by_key(|(_, _, _, z)| *z);

    let textures = world.non_send_resource::<TextureStore>();

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::WHITE);

        for (sprite, pos, rotation, _z) in to_draw.iter() {
            let Some(tex) = textures.get(&sprite.tex_key) else {
                continue;
            };

            // Animated sprites blit one tile; static ones scale the whole
            // texture to the sprite's draw size.
            let src = if sprite.animated {
                Rectangle {
                    x: sprite.offset.x,
                    y: sprite.offset.y,
                    width: sprite.width,
                    height: sprite.height,
                }
            } else {
                Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: tex.width() as f32,
                    height: tex.height() as f32,
                }
            };

            // dest places the pivot, so shift by it to keep the top-left
            // at the entity position when unrotated
            let dest = Rectangle {
                x: pos.x + rotation.pivot.x,
                y: pos.y + rotation.pivot.y,
                width: sprite.width,
                height: sprite.height,
            };

            d.draw_texture_pro(tex, src, dest, rotation.pivot, rotation.degrees, Color::WHITE);
        }

        d.draw_text(&format!("SCORE: {}", session.score), 10, 10, 20, Color::BLACK);
        if session.game_over {
            d.draw_text("YOU DIED. GAME OVER.", 512, 384, 20, Color::BLACK);
        }
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}
