//! Parallax background scrolling.
//!
//! Each layer steps left by the configured scroll speed divided by its
//! depth divisor, once per frame. When a layer slides fully off the left
//! edge it re-enters one screen width to the right of its partner.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::mapposition::MapPosition;
use crate::components::parallax::{ScrollLayer, WrapPartner};
use crate::resources::gameconfig::GameConfig;
use crate::systems::bounds::PLAYFIELD_WIDTH;

/// Scroll every layer and wrap pairs around the screen edge.
pub fn parallax_system(
    mut query: Query<(Entity, &ScrollLayer, &WrapPartner, &mut MapPosition)>,
    config: Res<GameConfig>,
) {
    // snapshot partner X before mutating anything this frame
    let layer_x: FxHashMap<Entity, f32> = query
        .iter()
        .map(|(entity, _, _, position)| (entity, position.pos.x))
        .collect();

    for (_, layer, partner, mut position) in query.iter_mut() {
        if position.pos.x <= -PLAYFIELD_WIDTH {
            if let Some(partner_x) = layer_x.get(&partner.0) {
                position.pos.x = partner_x + PLAYFIELD_WIDTH;
                continue;
            }
        }
        position.pos.x -= config.scroll_speed / layer.divisor;
    }
}
