//! Play-field culling.
//!
//! Anything with a lifespan that leaves the fixed play field is marked dead
//! so the reaper removes it on the same schedule pass.

use bevy_ecs::prelude::*;

use crate::components::lifespan::Lifespan;
use crate::components::mapposition::MapPosition;

pub const PLAYFIELD_WIDTH: f32 = 1024.0;
pub const PLAYFIELD_HEIGHT: f32 = 768.0;

/// Mark entities outside [0,1024]x[0,768] for removal.
pub fn bounds_system(mut query: Query<(&MapPosition, &mut Lifespan)>) {
    for (position, mut lifespan) in query.iter_mut() {
        let p = position.pos;
        if p.x > PLAYFIELD_WIDTH || p.x < 0.0 || p.y > PLAYFIELD_HEIGHT || p.y < 0.0 {
            lifespan.mark_dead();
        }
    }
}
