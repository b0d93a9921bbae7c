use bevy_ecs::prelude::Resource;

/// Simulation clock, fed once per frame from the raylib handle.
///
/// `frame_rate` is the host's instantaneous frames per second; the movement
/// system derives its physics timestep from it and treats anything below
/// 5 fps as a startup transient.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Seconds since start.
    pub elapsed: f32,
    /// Scaled delta of the current frame, in seconds.
    pub delta: f32,
    pub time_scale: f32,
    /// Instantaneous frames per second as reported by the host.
    pub frame_rate: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_rate: 0.0,
        }
    }
}
