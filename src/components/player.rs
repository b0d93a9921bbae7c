//! Player-side entities: the riding archer and the bow.
//!
//! The rider loops a horse-run sheet and swaps to a one-jump sheet on
//! demand; the bow is a one-shot sheet split into a draw half (frames
//! 0..=10) and a release half (frames 11..=23). The presets live here so
//! both the setup code and the input-driven systems build identical clips.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::sheetanimation::SheetAnimation;
use crate::components::sprite::Sprite;

/// Frame index at which a fully drawn bow may release an arrow.
pub const BOW_FULL_DRAW_FRAME: u32 = 10;
/// Frame count of the draw half of the bow sheet.
pub const BOW_DRAW_FRAMES: u32 = 11;
/// Frame count of the full bow sheet (draw plus release).
pub const BOW_RELEASE_FRAMES: u32 = 24;

pub const RIDER_RUN_POS: Vector2 = Vector2 { x: 100.0, y: 705.0 };
pub const RIDER_JUMP_POS: Vector2 = Vector2 { x: 100.0, y: 687.0 };
pub const BOW_POS: Vector2 = Vector2 { x: 132.0, y: 703.0 };

/// The mounted archer.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Rider {
    /// Set while the jump sheet plays; cleared when the run preset returns.
    pub jumping: bool,
}

impl Rider {
    pub fn run_sprite() -> Sprite {
        Sprite::sheet("horse_run", 80.0, 64.0)
    }

    pub fn run_animation(now: f32) -> SheetAnimation {
        let mut anim = SheetAnimation::new(2, 3, 6);
        anim.start(now);
        anim
    }

    pub fn jump_sprite() -> Sprite {
        Sprite::sheet("horse_jump", 80.0, 82.0)
    }

    /// One-shot: the rider system restores the run preset at the last frame.
    pub fn jump_animation(now: f32) -> SheetAnimation {
        let mut anim = SheetAnimation::new(4, 4, 16).one_shot();
        anim.start(now);
        anim
    }
}

/// The bow, rendered rotated toward the mouse cursor.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Bow;

impl Bow {
    pub fn sprite() -> Sprite {
        Sprite::sheet("bow", 35.0, 45.0)
    }

    /// Idle bow clip: one-shot, not running until the player draws.
    pub fn animation() -> SheetAnimation {
        SheetAnimation::new(6, 4, BOW_DRAW_FRAMES).one_shot()
    }
}
