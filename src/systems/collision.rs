//! Arrow/enemy collision detection.
//!
//! A pairwise scan of every live arrow against every live enemy. Matching
//! pairs have both lifespans marked dead and an [`ArrowHitEvent`] is
//! triggered; the actual despawn is deferred to the lifespan reaper. The
//! populations stay in the tens, so the O(n*m) sweep needs no partitioning.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::archetype::Archetype;
use crate::components::boxcollider::BoxCollider;
use crate::components::lifespan::Lifespan;
use crate::components::mapposition::MapPosition;
use crate::events::collision::ArrowHitEvent;

/// Detect overlapping arrow/enemy pairs and mark both for death.
pub fn collision_system(
    mut query: Query<(
        Entity,
        &Archetype,
        &MapPosition,
        &BoxCollider,
        &mut Lifespan,
    )>,
    mut commands: Commands,
) {
    let mut arrows: Vec<(Entity, Vector2, BoxCollider)> = Vec::new();
    let mut enemies: Vec<(Entity, Vector2, BoxCollider)> = Vec::new();

    for (entity, archetype, position, collider, _) in query.iter() {
        if archetype.is_enemy() {
            enemies.push((entity, position.pos, *collider));
        } else {
            arrows.push((entity, position.pos, *collider));
        }
    }

    let mut hits: Vec<(Entity, Entity)> = Vec::new();
    for (arrow, arrow_pos, arrow_box) in arrows.iter() {
        for (enemy, enemy_pos, enemy_box) in enemies.iter() {
            if arrow_box.overlaps(*arrow_pos, enemy_box, *enemy_pos) {
                hits.push((*arrow, *enemy));
            }
        }
    }

    for (arrow, enemy) in hits {
        if let Ok((_, _, _, _, mut lifespan)) = query.get_mut(arrow) {
            lifespan.mark_dead();
        }
        if let Ok((_, _, _, _, mut lifespan)) = query.get_mut(enemy) {
            lifespan.mark_dead();
        }
        commands.trigger(ArrowHitEvent { arrow, enemy });
    }
}
