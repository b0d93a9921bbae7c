//! Tile-grid animation state for spritesheet entities.
//!
//! A [`SheetAnimation`] steps through `nframes` tiles of an `ntiles_x` wide
//! grid, one frame every [`FRAME_STEP_SECONDS`] of wall time while running.
//! One-shot animations hold on their last frame instead of wrapping, which
//! is how the bow draw/release sheet behaves.

use bevy_ecs::prelude::Component;

/// Seconds between frame advances while an animation is running.
pub const FRAME_STEP_SECONDS: f32 = 0.05;

/// Frame-stepping state over a spritesheet tile grid.
///
/// Invariant after every advance: `row == frame / ntiles_x` and `col`
/// increments modulo `ntiles_x` in lock-step with `frame`.
#[derive(Component, Clone, Debug)]
pub struct SheetAnimation {
    /// Tiles per sheet row.
    pub ntiles_x: u32,
    /// Sheet rows.
    pub ntiles_y: u32,
    /// Frames used by the current clip; may span several rows.
    pub nframes: u32,
    pub frame: u32,
    pub row: u32,
    pub col: u32,
    /// Extra pixel offset into the sheet, e.g. to select the attack rows.
    pub hoff: f32,
    pub voff: f32,
    /// Hold on the last frame instead of wrapping to frame 0.
    pub one_shot: bool,
    pub running: bool,
    /// World time of the last frame advance, in seconds.
    pub last_advance: f32,
}

impl SheetAnimation {
    pub fn new(ntiles_x: u32, ntiles_y: u32, nframes: u32) -> Self {
        Self {
            ntiles_x,
            ntiles_y,
            nframes,
            frame: 0,
            row: 0,
            col: 0,
            hoff: 0.0,
            voff: 0.0,
            one_shot: false,
            running: false,
            last_advance: 0.0,
        }
    }

    pub fn one_shot(mut self) -> Self {
        self.one_shot = true;
        self
    }

    /// Start playback from frame 0, stamping `now` as the last advance time.
    pub fn start(&mut self, now: f32) {
        self.frame = 0;
        self.row = 0;
        self.col = 0;
        self.running = true;
        self.last_advance = now;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Jump to an absolute frame, keeping row/col in lock-step.
    pub fn seek(&mut self, frame: u32) {
        self.frame = frame;
        self.row = frame / self.ntiles_x;
        self.col = frame % self.ntiles_x;
    }

    /// Step to the next frame. At the last frame, looping clips wrap to
    /// frame 0 while one-shot clips hold.
    pub fn advance_frame(&mut self) {
        if self.frame == self.nframes.saturating_sub(1) {
            if !self.one_shot {
                self.frame = 0;
                self.row = 0;
                self.col = 0;
            }
        } else {
            self.frame += 1;
            if self.col == self.ntiles_x - 1 {
                self.col = 0;
            } else {
                self.col += 1;
            }
            self.row = self.frame / self.ntiles_x;
        }
    }
}
