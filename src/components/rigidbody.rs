//! Kinematic body integrated with a fixed-point Euler step.
//!
//! The [`RigidBody`] carries velocity, a persistent base acceleration, and a
//! queue of transient forces consumed by the next integration step. Queued
//! forces do not persist: callers must re-add them every frame for a
//! continuing effect. Gravity-bound bodies additionally receive a downward
//! pull and random turbulence inside the movement system.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    /// Velocity in pixels per second.
    pub velocity: Vector2,
    /// Base acceleration always applied, independent of forces.
    pub acceleration: Vector2,
    /// Persistent force accumulator, cleared after every step.
    pub force: Vector2,
    /// Transient forces queued for the next step only.
    pub impulses: Vec<Vector2>,
    pub mass: f32,
    /// Reserved damping factor; the integration step does not apply it.
    pub damping: f32,
    /// Apply gravity and turbulence during integration.
    pub gravity_bound: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    pub fn new() -> Self {
        Self {
            velocity: Vector2::zero(),
            acceleration: Vector2::zero(),
            force: Vector2::zero(),
            impulses: Vec::new(),
            mass: 1.0,
            damping: 0.99,
            gravity_bound: false,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vector2) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn with_gravity(mut self) -> Self {
        self.gravity_bound = true;
        self
    }

    /// Queue a force for the next integration step.
    pub fn add_force(&mut self, force: Vector2) {
        self.impulses.push(force);
    }
}
