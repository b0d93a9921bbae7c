//! ECS components for entities.
//!
//! Submodules overview:
//! - [`archetype`] – arrow/mushroom/eye presets and the emitter tag
//! - [`boxcollider`] – axis-aligned collision box with summed-half-extent overlap
//! - [`lifespan`] – countdown marking entities for deferred removal
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`parallax`] – scrolling background layer pairs
//! - [`player`] – rider and bow tags plus their animation presets
//! - [`rigidbody`] – velocity, base acceleration, and queued forces
//! - [`rotation`] – draw rotation around a pivot
//! - [`sheetanimation`] – tile-grid frame stepping for spritesheets
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod archetype;
pub mod boxcollider;
pub mod lifespan;
pub mod mapposition;
pub mod parallax;
pub mod player;
pub mod rigidbody;
pub mod rotation;
pub mod sheetanimation;
pub mod sprite;
pub mod zindex;
