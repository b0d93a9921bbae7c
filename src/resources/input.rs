//! Per-frame input resource.
//!
//! Captures the subset of keyboard and mouse state the game cares about:
//! the jump key, the fire button, and the aim position.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{KeyboardKey, MouseButton, Vector2};

#[derive(Debug, Clone, Copy)]
pub struct KeyState {
    pub active: bool,
    pub just_pressed: bool,
    pub key_binding: KeyboardKey,
}

#[derive(Debug, Clone, Copy)]
pub struct ButtonState {
    pub active: bool,
    pub just_pressed: bool,
    pub just_released: bool,
    pub binding: MouseButton,
}

/// Input snapshot relevant to gameplay: jump, fire, and the mouse cursor.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub jump: KeyState,
    pub fire: ButtonState,
    pub mouse_pos: Vector2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            jump: KeyState {
                active: false,
                just_pressed: false,
                key_binding: KeyboardKey::KEY_SPACE,
            },
            fire: ButtonState {
                active: false,
                just_pressed: false,
                just_released: false,
                binding: MouseButton::MOUSE_BUTTON_LEFT,
            },
            mouse_pos: Vector2::zero(),
        }
    }
}
