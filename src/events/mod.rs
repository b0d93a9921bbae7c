//! Event types and observers.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`collision`] – arrow-hit notifications emitted by the collision system

pub mod audio;
pub mod collision;
