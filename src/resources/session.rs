//! Session state for one run of the game.
//!
//! All run-level flags live here instead of being scattered over the host
//! loop: systems read and write one resource, and a new run starts by
//! reinserting the defaults.

use bevy_ecs::prelude::Resource;

/// Score and game-over state of the current run.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Session {
    pub score: u32,
    pub game_over: bool,
}

/// Enemy emission cadence.
///
/// Enemies spawn on every whole elapsed second divisible by `enemy_rate`;
/// `just_spawned` edge-detects the tick so one qualifying second emits
/// exactly once. The rate tightens over time until phase 2 begins, where an
/// eye accompanies every mushroom.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SpawnDirector {
    /// Seconds between enemy spawn ticks; never drops below 2.
    pub enemy_rate: u32,
    pub phase2: bool,
    pub just_spawned: bool,
}

impl Default for SpawnDirector {
    fn default() -> Self {
        Self {
            enemy_rate: 5,
            phase2: false,
            just_spawned: false,
        }
    }
}
