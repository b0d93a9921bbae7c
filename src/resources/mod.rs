//! ECS resources made available to systems.
//!
//! Overview
//! - [`audio`] – bridge and channels for the background audio thread
//! - [`gameconfig`] – window, cadence, and volume settings from config.ini
//! - [`input`] – per-frame keyboard/mouse state relevant to the game
//! - [`session`] – score, game-over flag, and the enemy spawn cadence
//! - [`texturestore`] – loaded textures keyed by string IDs
//! - [`worldtime`] – simulation time, delta, and the reported frame rate

pub mod audio;
pub mod gameconfig;
pub mod input;
pub mod session;
pub mod texturestore;
pub mod worldtime;
