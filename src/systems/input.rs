//! Input polling.
//!
//! Reads hardware input from Raylib once per frame and writes the results
//! into [`InputState`](crate::resources::input::InputState). Gameplay
//! systems only ever read the resource, never the raylib handle.

use bevy_ecs::prelude::*;

use crate::resources::input::InputState;

/// Poll Raylib for the jump key, fire button, and mouse position.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    input.jump.active = rl.is_key_down(input.jump.key_binding);
    input.jump.just_pressed = rl.is_key_pressed(input.jump.key_binding);

    input.fire.active = rl.is_mouse_button_down(input.fire.binding);
    input.fire.just_pressed = rl.is_mouse_button_pressed(input.fire.binding);
    input.fire.just_released = rl.is_mouse_button_released(input.fire.binding);

    input.mouse_pos = rl.get_mouse_position();
}
