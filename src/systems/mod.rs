//! Game systems.
//!
//! This module groups all ECS systems that advance the simulation, input,
//! and rendering.
//!
//! Submodules overview
//! - [`aggro`] – switch close enemies to their attack rows and end the run
//! - [`animation`] – advance spritesheet clips and write tile offsets
//! - [`audio`] – bridge with the audio thread (poll/update message queues)
//! - [`bounds`] – mark entities that leave the playfield for removal
//! - [`collision`] – arrow/enemy overlap sweep and hit events
//! - [`emitter`] – instantiate entities from emitters, enemy wave cadence
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`lifespan`] – count down lifespans and despawn dead entities
//! - [`movement`] – integrate rigid bodies with gravity and turbulence
//! - [`parallax`] – scroll the paired background layers
//! - [`player`] – rider jump handling and bow draw/aim/fire
//! - [`render`] – draw world and HUD using Raylib
//! - [`time`] – update simulation time, delta, and frame rate

pub mod aggro;
pub mod animation;
pub mod audio;
pub mod bounds;
pub mod collision;
pub mod emitter;
pub mod input;
pub mod lifespan;
pub mod movement;
pub mod parallax;
pub mod player;
pub mod render;
pub mod time;
