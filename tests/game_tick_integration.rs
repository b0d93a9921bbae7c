//! Game tick integration tests for movement, collision, spawning, and aggro.

#![allow(dead_code)]

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use horsebow::components::archetype::{ATTACK_ROW_OFFSET, Archetype, Emitter};
use horsebow::components::boxcollider::BoxCollider;
use horsebow::components::lifespan::Lifespan;
use horsebow::components::mapposition::MapPosition;
use horsebow::components::rigidbody::RigidBody;
use horsebow::components::sheetanimation::SheetAnimation;
use horsebow::components::sprite::Sprite;
use horsebow::events::collision::observe_arrow_hit;
use horsebow::resources::session::{Session, SpawnDirector};
use horsebow::resources::worldtime::WorldTime;
use horsebow::systems::aggro::aggro_system;
use horsebow::systems::animation::sheet_animation_system;
use horsebow::systems::bounds::bounds_system;
use horsebow::systems::collision::collision_system;
use horsebow::systems::emitter::enemy_spawner_system;
use horsebow::systems::lifespan::lifespan_system;
use horsebow::systems::movement::movement_system;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(Session::default());
    world.insert_resource(SpawnDirector::default());
    world
}

fn set_time(world: &mut World, elapsed: f32, delta: f32, frame_rate: f32) {
    let mut time = world.resource_mut::<WorldTime>();
    time.elapsed = elapsed;
    time.delta = delta;
    time.frame_rate = frame_rate;
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement_system);
    schedule.run(world);
}

fn tick_animation(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(sheet_animation_system);
    schedule.run(world);
}

fn tick_collision(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(collision_system);
    schedule.run(world);
}

fn tick_bounds_then_reaper(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((bounds_system, lifespan_system).chain());
    schedule.run(world);
}

fn tick_aggro(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(aggro_system);
    schedule.run(world);
}

fn tick_spawner(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(enemy_spawner_system);
    schedule.run(world);
}

fn count_spawned(world: &mut World, archetype: Archetype) -> usize {
    let mut query = world.query_filtered::<&Archetype, With<Lifespan>>();
    query.iter(world).filter(|a| **a == archetype).count()
}

// =============================================================================
// Animation
// =============================================================================

#[test]
fn animation_advances_on_the_frame_cadence_and_writes_offsets() {
    let mut world = make_world();

    let mut anim = SheetAnimation::new(4, 3, 8);
    anim.start(0.0);
    let entity = world
        .spawn((anim, Sprite::sheet("mushroom", 150.0, 150.0)))
        .id();

    // below the cadence: no advance
    set_time(&mut world, 0.04, 0.04, 60.0);
    tick_animation(&mut world);
    assert_eq!(world.get::<SheetAnimation>(entity).unwrap().frame, 0);

    // past the cadence: one step, offset follows col
    set_time(&mut world, 0.06, 0.02, 60.0);
    tick_animation(&mut world);
    let anim = world.get::<SheetAnimation>(entity).unwrap();
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert_eq!(anim.frame, 1);
    assert!(approx_eq(sprite.offset.x, 150.0));
    assert!(approx_eq(sprite.offset.y, 0.0));
}

#[test]
fn animation_row_tracks_frame_and_wraps() {
    let mut world = make_world();

    let mut anim = SheetAnimation::new(4, 2, 8);
    anim.start(0.0);
    let entity = world
        .spawn((anim, Sprite::sheet("eye", 150.0, 150.0)))
        .id();

    let mut elapsed = 0.0;
    for _ in 0..12 {
        elapsed += 0.06;
        set_time(&mut world, elapsed, 0.06, 60.0);
        tick_animation(&mut world);
        let anim = world.get::<SheetAnimation>(entity).unwrap();
        assert_eq!(anim.row, anim.frame / anim.ntiles_x);
        assert!(anim.frame < anim.nframes);
    }
}

#[test]
fn attack_row_offset_shifts_the_tile_vertically() {
    let mut world = make_world();

    let mut anim = SheetAnimation::new(4, 3, 8);
    anim.start(0.0);
    anim.voff = ATTACK_ROW_OFFSET;
    let entity = world
        .spawn((anim, Sprite::sheet("mushroom", 150.0, 150.0)))
        .id();

    set_time(&mut world, 0.06, 0.06, 60.0);
    tick_animation(&mut world);

    let sprite = world.get::<Sprite>(entity).unwrap();
    assert!(approx_eq(sprite.offset.y, ATTACK_ROW_OFFSET));
}

#[test]
fn stopped_animation_does_not_advance() {
    let mut world = make_world();

    let mut anim = SheetAnimation::new(2, 3, 6);
    anim.start(0.0);
    anim.stop();
    let entity = world
        .spawn((anim, Sprite::sheet("horse_run", 80.0, 64.0)))
        .id();

    set_time(&mut world, 1.0, 0.5, 60.0);
    tick_animation(&mut world);
    assert_eq!(world.get::<SheetAnimation>(entity).unwrap().frame, 0);
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn movement_integrates_velocity_at_the_inverse_frame_rate() {
    let mut world = make_world();

    let body = RigidBody::new().with_velocity(Vector2 { x: -225.0, y: 0.0 });
    let entity = world.spawn((MapPosition::new(850.0, 665.0), body)).id();

    set_time(&mut world, 0.0, 0.02, 50.0);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 850.0 - 225.0 / 50.0));
    assert!(approx_eq(pos.pos.y, 665.0));
}

#[test]
fn movement_applies_base_acceleration_to_velocity() {
    let mut world = make_world();

    // y = 0 keeps the body out of the gravity and turbulence bands
    let body = RigidBody::new()
        .with_acceleration(Vector2 { x: 200.0, y: 200.0 })
        .with_gravity();
    let entity = world.spawn((MapPosition::new(500.0, 0.0), body)).id();

    set_time(&mut world, 0.0, 0.02, 50.0);
    tick_movement(&mut world);

    let body = world.get::<RigidBody>(entity).unwrap();
    assert!(approx_eq(body.velocity.x, 4.0));
    assert!(approx_eq(body.velocity.y, 4.0));
}

#[test]
fn movement_skips_startup_frames_but_clears_forces() {
    let mut world = make_world();

    let mut body = RigidBody::new().with_velocity(Vector2 { x: 100.0, y: 0.0 });
    body.force = Vector2 { x: 50.0, y: 50.0 };
    let entity = world.spawn((MapPosition::new(10.0, 10.0), body)).id();

    set_time(&mut world, 0.0, 0.2, 4.0);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    let body = world.get::<RigidBody>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 10.0));
    assert!(approx_eq(body.velocity.x, 100.0)); // untouched
    assert!(approx_eq(body.force.x, 0.0)); // discarded
    assert!(approx_eq(body.force.y, 0.0));
}

#[test]
fn queued_forces_act_for_exactly_one_step() {
    let mut world = make_world();

    let mut body = RigidBody::new();
    body.add_force(Vector2 { x: 100.0, y: 0.0 });
    let entity = world.spawn((MapPosition::new(300.0, 0.0), body)).id();

    set_time(&mut world, 0.0, 0.02, 50.0);
    tick_movement(&mut world);

    let body = world.get::<RigidBody>(entity).unwrap();
    assert!(approx_eq(body.velocity.x, 2.0));
    assert!(body.impulses.is_empty());

    tick_movement(&mut world);
    let body = world.get::<RigidBody>(entity).unwrap();
    // no force left, so velocity only coasts
    assert!(approx_eq(body.velocity.x, 2.0));
}

#[test]
fn gravity_pulls_airborne_bodies_down() {
    let mut world = make_world();

    // below the turbulence band but inside the gravity band
    let body = RigidBody::new().with_gravity();
    let entity = world.spawn((MapPosition::new(500.0, 0.4), body)).id();

    set_time(&mut world, 0.0, 0.02, 50.0);
    tick_movement(&mut world);

    let body = world.get::<RigidBody>(entity).unwrap();
    assert!(approx_eq(body.velocity.y, 10.0 / 50.0));
    assert!(approx_eq(body.velocity.x, 0.0));
}

// =============================================================================
// Bounds and lifespan reaper
// =============================================================================

#[test]
fn out_of_bounds_entities_are_removed_in_the_same_pass() {
    let mut world = make_world();

    let outside = world
        .spawn((MapPosition::new(1030.0, 400.0), Lifespan::default()))
        .id();
    let inside = world
        .spawn((MapPosition::new(512.0, 400.0), Lifespan::default()))
        .id();

    set_time(&mut world, 0.0, 0.016, 60.0);
    tick_bounds_then_reaper(&mut world);

    assert!(world.get_entity(outside).is_err());
    assert!(world.get_entity(inside).is_ok());
}

#[test]
fn lifespan_counts_down_and_despawns_at_zero() {
    let mut world = make_world();

    let entity = world
        .spawn((MapPosition::new(512.0, 400.0), Lifespan::new(1.0)))
        .id();

    set_time(&mut world, 0.0, 0.5, 60.0);
    tick_bounds_then_reaper(&mut world);
    assert!(world.get_entity(entity).is_ok());

    tick_bounds_then_reaper(&mut world);
    assert!(world.get_entity(entity).is_err());
}

// =============================================================================
// Collision
// =============================================================================

#[test]
fn overlapping_arrow_and_enemy_both_die_others_survive() {
    let mut world = make_world();
    world.spawn(Observer::new(observe_arrow_hit));
    world.flush();

    let arrow = world
        .spawn((
            Archetype::Arrow,
            MapPosition::new(500.0, 500.0),
            BoxCollider::new(10.0, 2.0),
            Lifespan::default(),
        ))
        .id();
    let near_enemy = world
        .spawn((
            Archetype::Mushroom,
            MapPosition::new(505.0, 501.0),
            BoxCollider::new(150.0, 150.0),
            Lifespan::default(),
        ))
        .id();
    let far_enemy = world
        .spawn((
            Archetype::Mushroom,
            MapPosition::new(700.0, 700.0),
            BoxCollider::new(150.0, 150.0),
            Lifespan::default(),
        ))
        .id();

    set_time(&mut world, 0.0, 0.016, 60.0);
    tick_collision(&mut world);

    assert!(world.get::<Lifespan>(arrow).unwrap().is_dead());
    assert!(world.get::<Lifespan>(near_enemy).unwrap().is_dead());
    assert!(!world.get::<Lifespan>(far_enemy).unwrap().is_dead());
    assert_eq!(world.resource::<Session>().score, 1);
}

#[test]
fn enemies_do_not_collide_with_each_other() {
    let mut world = make_world();
    world.spawn(Observer::new(observe_arrow_hit));
    world.flush();

    world.spawn((
        Archetype::Mushroom,
        MapPosition::new(500.0, 500.0),
        BoxCollider::new(150.0, 150.0),
        Lifespan::default(),
    ));
    world.spawn((
        Archetype::Eye,
        MapPosition::new(510.0, 510.0),
        BoxCollider::new(150.0, 150.0),
        Lifespan::default(),
    ));

    tick_collision(&mut world);

    let mut query = world.query::<&Lifespan>();
    assert!(query.iter(&world).all(|lifespan| !lifespan.is_dead()));
    assert_eq!(world.resource::<Session>().score, 0);
}

// =============================================================================
// Spawner cadence
// =============================================================================

#[test]
fn spawner_emits_once_per_qualifying_second() {
    let mut world = make_world();
    world.spawn((
        Emitter::new(Archetype::Mushroom, Vector2 { x: -225.0, y: 0.0 }),
        MapPosition::new(850.0, 665.0),
    ));
    world.spawn((
        Emitter::new(Archetype::Eye, Vector2 { x: -225.0, y: 90.0 }),
        MapPosition::new(900.0, 300.0),
    ));

    set_time(&mut world, 5.0, 0.016, 60.0);
    tick_spawner(&mut world);
    assert_eq!(count_spawned(&mut world, Archetype::Mushroom), 1);
    assert_eq!(count_spawned(&mut world, Archetype::Eye), 0);

    // same rounded second, no double spawn
    set_time(&mut world, 5.2, 0.016, 60.0);
    tick_spawner(&mut world);
    assert_eq!(count_spawned(&mut world, Archetype::Mushroom), 1);

    // off-cadence second re-arms the edge detector
    set_time(&mut world, 6.0, 0.016, 60.0);
    tick_spawner(&mut world);
    assert_eq!(count_spawned(&mut world, Archetype::Mushroom), 1);

    set_time(&mut world, 10.0, 0.016, 60.0);
    tick_spawner(&mut world);
    assert_eq!(count_spawned(&mut world, Archetype::Mushroom), 2);
}

#[test]
fn eye_waves_join_on_the_long_cadence() {
    let mut world = make_world();
    world.spawn((
        Emitter::new(Archetype::Mushroom, Vector2 { x: -225.0, y: 0.0 }),
        MapPosition::new(850.0, 665.0),
    ));
    world.spawn((
        Emitter::new(Archetype::Eye, Vector2 { x: -225.0, y: 90.0 }),
        MapPosition::new(900.0, 300.0),
    ));

    // rate 5: eyes spawn every 20 rounded seconds
    set_time(&mut world, 20.0, 0.016, 60.0);
    tick_spawner(&mut world);
    assert_eq!(count_spawned(&mut world, Archetype::Mushroom), 1);
    assert_eq!(count_spawned(&mut world, Archetype::Eye), 1);
}

#[test]
fn rate_tightens_on_the_longest_cadence_until_phase_two() {
    let mut world = make_world();
    world.spawn((
        Emitter::new(Archetype::Mushroom, Vector2 { x: -225.0, y: 0.0 }),
        MapPosition::new(850.0, 665.0),
    ));

    set_time(&mut world, 50.0, 0.016, 60.0);
    tick_spawner(&mut world);
    assert_eq!(world.resource::<SpawnDirector>().enemy_rate, 4);

    // drive the rate to the floor, then one more long tick flips phase 2
    {
        let mut director = world.resource_mut::<SpawnDirector>();
        director.enemy_rate = 2;
        director.just_spawned = false;
    }
    set_time(&mut world, 60.0, 0.016, 60.0);
    tick_spawner(&mut world);
    let director = world.resource::<SpawnDirector>();
    assert_eq!(director.enemy_rate, 2);
    assert!(director.phase2);
}

#[test]
fn phase_two_spawns_an_eye_with_every_wave() {
    let mut world = make_world();
    world.resource_mut::<SpawnDirector>().phase2 = true;
    world.resource_mut::<SpawnDirector>().enemy_rate = 2;
    world.spawn((
        Emitter::new(Archetype::Mushroom, Vector2 { x: -225.0, y: 0.0 }),
        MapPosition::new(850.0, 665.0),
    ));
    world.spawn((
        Emitter::new(Archetype::Eye, Vector2 { x: -225.0, y: 90.0 }),
        MapPosition::new(900.0, 300.0),
    ));

    // 62 is not a multiple of 8 (rate*4), so only phase 2 explains the eye
    set_time(&mut world, 62.0, 0.016, 60.0);
    tick_spawner(&mut world);
    assert_eq!(count_spawned(&mut world, Archetype::Mushroom), 1);
    assert_eq!(count_spawned(&mut world, Archetype::Eye), 1);
}

// =============================================================================
// Aggro end to end
// =============================================================================

#[test]
fn advancing_mushroom_turns_aggressive_then_ends_the_run() {
    let mut world = make_world();
    world.spawn((
        Emitter::new(Archetype::Mushroom, Vector2 { x: -225.0, y: 0.0 }),
        MapPosition::new(850.0, 665.0),
    ));

    set_time(&mut world, 5.0, 0.016, 60.0);
    tick_spawner(&mut world);

    let mushroom = {
        let mut query = world.query_filtered::<Entity, (With<Lifespan>, With<Archetype>)>();
        query.single(&world).unwrap()
    };

    let mut attack_tick = None;
    let mut game_over_tick = None;
    let mut last_x = f32::INFINITY;

    for tick in 0..200 {
        set_time(&mut world, 5.0 + tick as f32 / 60.0, 1.0 / 60.0, 60.0);
        tick_movement(&mut world);
        tick_aggro(&mut world);

        let x = world.get::<MapPosition>(mushroom).unwrap().pos.x;
        assert!(x <= last_x); // strictly leftward
        last_x = x;

        let anim = world.get::<SheetAnimation>(mushroom).unwrap();
        if attack_tick.is_none() && anim.voff == ATTACK_ROW_OFFSET {
            assert!(x <= 188.0);
            attack_tick = Some(tick);
        }
        if game_over_tick.is_none() && world.resource::<Session>().game_over {
            assert!(x <= 150.0);
            game_over_tick = Some(tick);
        }
    }

    let attack_tick = attack_tick.expect("mushroom never turned aggressive");
    let game_over_tick = game_over_tick.expect("run never ended");
    assert!(attack_tick < game_over_tick);
}
