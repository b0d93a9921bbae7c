use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned collision box centered on the entity's position.
///
/// Overlap uses summed half-extents on the position deltas, so the test is
/// symmetric by construction. There is no depth axis and no swept test.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct BoxCollider {
    pub width: f32,
    pub height: f32,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Same-frame AABB overlap against another collider at another position.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let dx = other_position.x - position.x;
        let dy = other_position.y - position.y;
        let x_contact = (other.width + self.width) / 2.0;
        let y_contact = (other.height + self.height) / 2.0;
        dx.abs() < x_contact && dy.abs() < y_contact
    }
}
