//! Arrow-hit event and its scoring observer.
//!
//! The collision system triggers one [`ArrowHitEvent`] per overlapping
//! arrow/enemy pair after marking both lifespans dead. The observer only
//! accounts for the kill; removal stays with the lifespan reaper.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::session::Session;

/// Fired when an arrow overlaps an enemy. Both entities are already marked
/// for removal when the event triggers.
#[derive(Event, Debug, Clone, Copy)]
pub struct ArrowHitEvent {
    pub arrow: Entity,
    pub enemy: Entity,
}

/// Global observer crediting one point per downed enemy.
pub fn observe_arrow_hit(trigger: On<ArrowHitEvent>, mut session: ResMut<Session>) {
    let hit = trigger.event();
    session.score += 1;
    debug!(
        "arrow {:?} downed enemy {:?}, score={}",
        hit.arrow, hit.enemy, session.score
    );
}
