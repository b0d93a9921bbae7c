use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Draw rotation in degrees around a pivot relative to the sprite's top-left.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Rotation {
    pub degrees: f32,
    pub pivot: Vector2,
}
