//! Enemy proximity rules.
//!
//! Once an enemy's X drops to its archetype's attack threshold it switches
//! to the attack rows of its sheet; once it reaches the game-over line the
//! run ends. Enemies only ever move left, so both transitions are
//! monotonic and never revert.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::archetype::{ATTACK_ROW_OFFSET, Archetype, GAME_OVER_X};
use crate::components::mapposition::MapPosition;
use crate::components::sheetanimation::SheetAnimation;
use crate::resources::session::Session;

/// Apply attack-animation and game-over thresholds to every enemy.
pub fn aggro_system(
    mut query: Query<(&Archetype, &MapPosition, &mut SheetAnimation)>,
    mut session: ResMut<Session>,
) {
    for (archetype, position, mut anim) in query.iter_mut() {
        let Some(trigger_x) = archetype.attack_trigger_x() else {
            continue;
        };

        if position.pos.x <= trigger_x {
            anim.voff = ATTACK_ROW_OFFSET;
        }
        if position.pos.x <= GAME_OVER_X && !session.game_over {
            session.game_over = true;
            info!("an enemy reached the rider: game over");
        }
    }
}
