//! Horsebow main entry point.
//!
//! A 2D side-scrolling archery game written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! A mounted archer rides past a scrolling landscape while mushroom and
//! eye monsters advance from the right; the player draws the bow with the
//! mouse and looses arrows to stop them before they reach the rider.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (sprites, physics, collision, animation, etc.)
//! - [`events`] – Event types (arrow hits, audio commands)
//! - [`game`] – Scene setup (textures, entities, initial audio)
//! - [`resources`] – ECS resources (time, input, config, session, stores)
//! - [`systems`] – ECS systems (input, physics, collision, rendering, etc.)
//!
//! # Main Loop
//!
//! 1. Initialize raylib window, ECS world, resources, audio thread
//! 2. Load textures and spawn the scene
//! 3. Register observers and systems
//! 4. Run the main game loop:
//!    - Update input, player control, spawning, physics, collision, animation
//!    - Render world and HUD
//! 5. Clean up audio thread on exit

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::events::collision::observe_arrow_hit;
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::session::{Session, SpawnDirector};
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::aggro::aggro_system;
use crate::systems::animation::sheet_animation_system;
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::bounds::bounds_system;
use crate::systems::collision::collision_system;
use crate::systems::emitter::enemy_spawner_system;
use crate::systems::input::update_input_state;
use crate::systems::lifespan::lifespan_system;
use crate::systems::movement::movement_system;
use crate::systems::parallax::parallax_system;
use crate::systems::player::{
    bow_aim_system, bow_control_system, bow_settle_system, rider_control_system,
};
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Horsebow
#[derive(Parser)]
#[command(version, about = "Horsebow: mounted archery against the mushroom tide")]
struct Cli {
    /// Path to the configuration INI file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Enable debug logging (same as RUST_LOG=debug).
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = GameConfig::with_path(cli.config);
    config.load_from_file().ok(); // ignore errors, use defaults

    let window_width = config.window_width;
    let window_height = config.window_height;

    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Horsebow")
        .build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    let mut textures = TextureStore::new();
    game::load_textures(&mut rl, &thread, &mut textures);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(Session::default());
    world.insert_resource(SpawnDirector::default());
    world.insert_non_send_resource(textures);

    // Init audio. Must go before the scene setup queues audio commands.
    setup_audio(&mut world);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(observe_arrow_hit));
    // Ensure the observer is registered before any system triggers events.
    world.flush();

    game::setup(&mut world);
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(rider_control_system.after(update_input_state));
    update.add_systems(bow_aim_system.after(update_input_state));
    update.add_systems(bow_control_system.after(update_input_state));
    update.add_systems(bow_settle_system.after(sheet_animation_system));
    update.add_systems(parallax_system);
    update.add_systems(enemy_spawner_system);
    update.add_systems(movement_system.after(bow_control_system));
    update.add_systems(bounds_system.after(movement_system));
    update.add_systems(collision_system.after(movement_system));
    update.add_systems(aggro_system.after(movement_system));
    update.add_systems(
        lifespan_system
            .after(bounds_system)
            .after(collision_system),
    );
    update.add_systems(sheet_animation_system.after(aggro_system));
    update.add_systems(
        // audio systems must be together
        (
            // First, advance AudioCmd messages and forward them to the audio thread
            update_bevy_audio_cmds,
            forward_audio_cmds,
            // Then, pull audio thread messages and advance them
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain(),
    );
    update.add_systems(render_system.after(sheet_animation_system));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let (dt, fps) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_frame_time(), rl.get_fps() as f32)
        };
        update_world_time(&mut world, dt, fps);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
    shutdown_audio(&mut world);
}
