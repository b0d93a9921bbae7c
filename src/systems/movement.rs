//! Euler integration of rigid bodies.
//!
//! The timestep is the inverse of the host-reported frame rate. Below
//! [`MIN_FRAME_RATE`] the renderer has not produced a real delta yet, so
//! the step is skipped entirely and accumulated force is discarded to
//! avoid a first-frame impulse.
//!
//! Gravity-bound bodies get a constant downward pull proportional to mass
//! while `y > 0` and a symmetric random turbulence kick while `y > 0.5`
//! (screen coordinates, Y grows downward).

use bevy_ecs::prelude::*;
use fastrand::Rng;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Frame rates below this are treated as a startup transient.
pub const MIN_FRAME_RATE: f32 = 5.0;
/// Downward pull per unit mass, pixels per second squared.
pub const GRAVITY_PULL: f32 = 10.0;
/// Y above which turbulence kicks in.
pub const TURBULENCE_FLOOR_Y: f32 = 0.5;
/// Turbulence force magnitude bound per axis.
pub const TURBULENCE_KICK: f32 = 0.5;

#[inline]
fn random_f32_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    min + rng.f32() * (max - min)
}

/// Integrate positions and velocities one fixed step.
pub fn movement_system(
    mut query: Query<(&mut MapPosition, &mut RigidBody)>,
    time: Res<WorldTime>,
    mut rng: Local<Rng>,
) {
    if time.frame_rate < MIN_FRAME_RATE {
        for (_, mut body) in query.iter_mut() {
            body.force = Vector2::zero();
        }
        return;
    }

    let dt = 1.0 / time.frame_rate;

    for (mut position, mut body) in query.iter_mut() {
        position.pos += body.velocity.scale_by(dt);

        let queued = std::mem::take(&mut body.impulses);
        for impulse in queued {
            body.force += impulse;
        }

        if body.gravity_bound {
            if position.pos.y > 0.0 {
                body.force.y += GRAVITY_PULL * body.mass;
            }
            if position.pos.y > TURBULENCE_FLOOR_Y {
                body.force.x += random_f32_range(&mut rng, -TURBULENCE_KICK, TURBULENCE_KICK);
                body.force.y += random_f32_range(&mut rng, -TURBULENCE_KICK, TURBULENCE_KICK);
            }
        }

        // f = ma, so a = f / m, on top of the persistent base acceleration
        let accel = body.acceleration + body.force.scale_by(1.0 / body.mass);
        body.velocity += accel.scale_by(dt);

        // queued forces only act for one step
        body.force = Vector2::zero();
    }
}
