//! Parallax background layers.
//!
//! Each layer scrolls left at the configured scroll speed divided by its
//! `divisor`. Layers come in pairs: when one slides fully off the left edge
//! it re-enters to the right of its partner, so the pair tiles the screen
//! seamlessly.

use bevy_ecs::prelude::{Component, Entity};

#[derive(Component, Clone, Copy, Debug)]
pub struct ScrollLayer {
    /// Scroll speed divisor; 1.0 is the foreground, larger is farther away.
    pub divisor: f32,
}

/// The other half of a scrolling layer pair.
#[derive(Component, Clone, Copy, Debug)]
pub struct WrapPartner(pub Entity);
