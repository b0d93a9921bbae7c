//! Time update.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! once per frame with the scaled delta and the host-reported frame rate.

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Write elapsed, delta, and frame rate into `WorldTime`.
///
/// `dt` is the unscaled frame delta in seconds; `frame_rate` is the host's
/// instantaneous fps reading used as the inverse physics timestep.
pub fn update_world_time(world: &mut World, dt: f32, frame_rate: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_rate = frame_rate;
}
