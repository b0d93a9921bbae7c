//! Archetypes: the presets that turn an emitted entity into an arrow, a
//! mushroom monster, or an eye monster.
//!
//! Each archetype fixes the spritesheet layout, draw size, collision box,
//! base acceleration, and whether the body is gravity-bound. Enemy
//! archetypes additionally carry the aggro thresholds evaluated by
//! [`crate::systems::aggro::aggro_system`].

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// X position at or below which any enemy ends the run.
pub const GAME_OVER_X: f32 = 150.0;

/// Vertical sheet offset of the enemy attack rows, in pixels.
pub const ATTACK_ROW_OFFSET: f32 = 300.0;

/// Tag selecting an emission preset and per-frame behavior rules.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Archetype {
    Arrow,
    Mushroom,
    Eye,
}

/// Spritesheet layout of an animated archetype.
#[derive(Clone, Copy, Debug)]
pub struct SheetLayout {
    pub ntiles_x: u32,
    pub ntiles_y: u32,
    pub nframes: u32,
}

/// Everything needed to instantiate one entity of an archetype.
#[derive(Clone, Copy, Debug)]
pub struct ArchetypePreset {
    pub tex_key: &'static str,
    /// `None` draws the whole texture (the arrow is not tile-animated).
    pub sheet: Option<SheetLayout>,
    pub draw_width: f32,
    pub draw_height: f32,
    pub collider_width: f32,
    pub collider_height: f32,
    pub base_acceleration: Vector2,
    pub gravity_bound: bool,
}

impl Archetype {
    pub fn preset(self) -> ArchetypePreset {
        match self {
            Archetype::Arrow => ArchetypePreset {
                tex_key: "arrow",
                sheet: None,
                draw_width: 52.0,
                draw_height: 18.0,
                collider_width: 10.0,
                collider_height: 2.0,
                base_acceleration: Vector2 { x: 200.0, y: 200.0 },
                gravity_bound: true,
            },
            Archetype::Mushroom => ArchetypePreset {
                tex_key: "mushroom",
                sheet: Some(SheetLayout {
                    ntiles_x: 4,
                    ntiles_y: 3,
                    nframes: 8,
                }),
                draw_width: 150.0,
                draw_height: 150.0,
                collider_width: 150.0,
                collider_height: 150.0,
                base_acceleration: Vector2::zero(),
                gravity_bound: false,
            },
            Archetype::Eye => ArchetypePreset {
                tex_key: "eye",
                sheet: Some(SheetLayout {
                    ntiles_x: 4,
                    ntiles_y: 2,
                    nframes: 8,
                }),
                draw_width: 150.0,
                draw_height: 150.0,
                collider_width: 150.0,
                collider_height: 150.0,
                base_acceleration: Vector2::zero(),
                gravity_bound: false,
            },
        }
    }

    /// X position at or below which this enemy switches to its attack row.
    /// Arrows have no aggro behavior.
    pub fn attack_trigger_x(self) -> Option<f32> {
        match self {
            Archetype::Arrow => None,
            Archetype::Mushroom => Some(188.0),
            Archetype::Eye => Some(190.0),
        }
    }

    pub fn is_enemy(self) -> bool {
        self.attack_trigger_x().is_some()
    }
}

/// Spawner bound to one archetype: holds the emission position (via the
/// entity's `MapPosition`) and the initial velocity template.
#[derive(Component, Clone, Copy, Debug)]
pub struct Emitter {
    pub archetype: Archetype,
    pub velocity: Vector2,
}

impl Emitter {
    pub fn new(archetype: Archetype, velocity: Vector2) -> Self {
        Self {
            archetype,
            velocity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemies_have_aggro_thresholds_arrows_do_not() {
        assert_eq!(Archetype::Mushroom.attack_trigger_x(), Some(188.0));
        assert_eq!(Archetype::Eye.attack_trigger_x(), Some(190.0));
        assert_eq!(Archetype::Arrow.attack_trigger_x(), None);
        assert!(Archetype::Mushroom.is_enemy());
        assert!(!Archetype::Arrow.is_enemy());
    }

    #[test]
    fn arrow_preset_is_a_narrow_gravity_bound_dart() {
        let preset = Archetype::Arrow.preset();
        assert!(preset.sheet.is_none());
        assert!(preset.gravity_bound);
        assert_eq!(preset.collider_width, 10.0);
        assert_eq!(preset.collider_height, 2.0);
    }

    #[test]
    fn enemy_presets_drive_motion_by_velocity_only() {
        for archetype in [Archetype::Mushroom, Archetype::Eye] {
            let preset = archetype.preset();
            assert_eq!(preset.base_acceleration.x, 0.0);
            assert_eq!(preset.base_acceleration.y, 0.0);
            assert!(preset.sheet.is_some());
        }
    }
}
