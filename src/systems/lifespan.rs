//! Lifespan reaper.
//!
//! Counts lifespans down and despawns every entity whose budget is spent,
//! including those force-marked by the bounds or collision systems earlier
//! in the same pass. Despawning through commands keeps the sweep safe no
//! matter how many entities die in one frame.

use bevy_ecs::prelude::*;

use crate::components::lifespan::Lifespan;
use crate::resources::worldtime::WorldTime;

/// Decrement lifespans and despawn dead entities.
pub fn lifespan_system(
    time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Lifespan)>,
    mut commands: Commands,
) {
    let dt = time.delta;
    for (entity, mut lifespan) in query.iter_mut() {
        lifespan.remaining -= dt;
        if lifespan.is_dead() {
            commands.entity(entity).try_despawn();
        }
    }
}
