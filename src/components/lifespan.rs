//! Lifespan component for deferred entity removal.
//!
//! The remaining budget counts down each frame; collision and bounds checks
//! force it to zero to mark an entity for death. Actual despawn happens in
//! the reaper system on the same schedule pass, so marks never dangle
//! across frames.

use bevy_ecs::prelude::Component;

/// Default budget, effectively "lives until killed".
pub const DEFAULT_LIFESPAN_SECONDS: f32 = 500_000.0;

#[derive(Component, Clone, Copy, Debug)]
pub struct Lifespan {
    /// Remaining seconds; zero or below means marked for removal.
    pub remaining: f32,
}

impl Default for Lifespan {
    fn default() -> Self {
        Self {
            remaining: DEFAULT_LIFESPAN_SECONDS,
        }
    }
}

impl Lifespan {
    pub fn new(seconds: f32) -> Self {
        Self { remaining: seconds }
    }

    /// Mark the entity for removal on the next reaper pass.
    pub fn mark_dead(&mut self) {
        self.remaining = 0.0;
    }

    pub fn is_dead(&self) -> bool {
        self.remaining <= 0.0
    }
}
