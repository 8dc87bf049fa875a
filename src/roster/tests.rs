//! Roster domain: tests for registration, respawn queueing and the death flow.

use avian3d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;
use std::time::Duration;

use super::systems::{detect_kill_plane, handle_player_killed, process_respawns};
use super::{
    ArenaLayout, PlayerIdentity, PlayerKilled, PlayerRegistry, PlayerRespawned, Respawning,
    Roster,
};
use crate::movement::{LocomotionController, LocomotionTuning, Player};

fn spawn_points() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(10.0, 2.0, 0.0),
        Vec3::new(0.0, 2.0, 10.0),
    ]
}

// -----------------------------------------------------------------------------
// Registry tests
// -----------------------------------------------------------------------------

#[test]
fn test_register_and_unregister() {
    let mut roster = Roster::new(spawn_points(), 1.0, 1);
    let entity = World::new().spawn_empty().id();

    roster.register("Alice", entity);
    assert_eq!(roster.get("Alice"), Some(entity));
    assert_eq!(roster.len(), 1);

    assert_eq!(roster.unregister("Alice"), Some(entity));
    assert!(roster.is_empty());
    assert_eq!(roster.unregister("Alice"), None);
}

#[test]
fn test_spawn_points_come_from_the_arena() {
    let points = spawn_points();
    let mut roster = Roster::new(points.clone(), 1.0, 42);

    for _ in 0..32 {
        assert!(points.contains(&roster.pick_spawn_point()));
    }
}

#[test]
fn test_spawn_selection_is_seeded() {
    let mut a = Roster::new(spawn_points(), 1.0, 99);
    let mut b = Roster::new(spawn_points(), 1.0, 99);

    let picks_a: Vec<_> = (0..16).map(|_| a.pick_spawn_point()).collect();
    let picks_b: Vec<_> = (0..16).map(|_| b.pick_spawn_point()).collect();
    assert_eq!(picks_a, picks_b);
}

#[test]
fn test_no_spawn_points_falls_back_to_origin() {
    let mut roster = Roster::new(Vec::new(), 1.0, 1);
    assert_eq!(roster.pick_spawn_point(), Vec3::ZERO);
}

#[test]
fn test_respawn_is_queued_once() {
    let mut roster = Roster::new(spawn_points(), 2.0, 1);
    let entity = World::new().spawn_empty().id();

    roster.respawn(entity);
    roster.respawn(entity);
    assert_eq!(roster.pending().len(), 1);
    assert!(roster.is_pending(entity));
}

#[test]
fn test_respawn_waits_for_delay() {
    let mut roster = Roster::new(spawn_points(), 2.0, 1);
    let entity = World::new().spawn_empty().id();
    roster.respawn(entity);

    assert!(roster.tick(1.5).is_empty());
    assert!(roster.is_pending(entity));

    let due = roster.tick(0.5);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].entity, entity);
    assert!(!roster.is_pending(entity));
}

// -----------------------------------------------------------------------------
// Death flow
// -----------------------------------------------------------------------------

#[test]
fn test_death_unregisters_then_respawns_with_full_tank() {
    let spawn = Vec3::new(5.0, 2.0, -5.0);
    let tuning = LocomotionTuning::default();

    let mut app = App::new();
    app.insert_resource(Time::<()>::default())
        .insert_resource(Roster::new(vec![spawn], 1.0, 1))
        .insert_resource(tuning.clone())
        .add_message::<PlayerKilled>()
        .add_message::<PlayerRespawned>()
        .add_systems(Update, (handle_player_killed, process_respawns).chain());

    let mut controller = LocomotionController::new(&tuning);
    controller.jetpack.fuel = 0.0;
    controller.jetpack.must_wait_for_fuel = true;

    let player = app
        .world_mut()
        .spawn((
            PlayerIdentity::new("Alice"),
            controller,
            Transform::from_xyz(0.0, -50.0, 0.0),
            Position(Vec3::new(0.0, -50.0, 0.0)),
            LinearVelocity(Vec3::new(0.0, -20.0, 0.0)),
            Visibility::Visible,
        ))
        .id();
    app.world_mut()
        .resource_mut::<Roster>()
        .register("Alice", player);

    app.world_mut()
        .resource_mut::<Messages<PlayerKilled>>()
        .write(PlayerKilled {
            killer: player,
            victim: player,
        });
    app.update();

    {
        let roster = app.world().resource::<Roster>();
        assert_eq!(roster.get("Alice"), None);
        assert!(roster.is_pending(player));
    }
    assert!(app.world().get::<Respawning>(player).is_some());

    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs(1));
    app.update();

    let world = app.world();
    assert!(world.get::<Respawning>(player).is_none());
    assert_eq!(world.resource::<Roster>().get("Alice"), Some(player));
    assert_eq!(world.get::<Transform>(player).unwrap().translation, spawn);
    assert_eq!(world.get::<LinearVelocity>(player).unwrap().0, Vec3::ZERO);

    let controller = world.get::<LocomotionController>(player).unwrap();
    assert_eq!(controller.jetpack.fuel, tuning.jetpack.max_fuel);
    assert!(!controller.jetpack.must_wait_for_fuel);
}

#[test]
fn test_falling_below_kill_plane_is_a_self_kill() {
    let tuning = LocomotionTuning::default();
    let layout = ArenaLayout {
        floor_size: 40.0,
        kill_plane_y: -30.0,
        spawn_points: spawn_points(),
    };

    let mut app = App::new();
    app.insert_resource(Roster::new(spawn_points(), 1.0, 1))
        .insert_resource(layout)
        .add_message::<PlayerKilled>()
        .add_systems(Update, (detect_kill_plane, handle_player_killed).chain());

    let mut spawn = |name: &str, y: f32| {
        app.world_mut()
            .spawn((
                Player,
                PlayerIdentity::new(name),
                LocomotionController::new(&tuning),
                Transform::from_xyz(0.0, y, 0.0),
            ))
            .id()
    };
    let faller = spawn("Alice", -31.0);
    let standing = spawn("Bob", 2.0);
    for (name, entity) in [("Alice", faller), ("Bob", standing)] {
        app.world_mut().resource_mut::<Roster>().register(name, entity);
    }

    app.update();

    let roster = app.world().resource::<Roster>();
    assert!(roster.is_pending(faller));
    assert_eq!(roster.get("Alice"), None);
    assert!(!roster.is_pending(standing));
    assert_eq!(roster.get("Bob"), Some(standing));
    assert!(app.world().get::<Respawning>(faller).is_some());
    assert!(app.world().get::<Respawning>(standing).is_none());

    // Still below the plane, but already dead: no second kill
    app.update();
    assert_eq!(app.world().resource::<Roster>().pending().len(), 1);
}

#[test]
fn test_duplicate_kills_in_one_frame_queue_one_respawn() {
    let tuning = LocomotionTuning::default();
    let mut app = App::new();
    app.insert_resource(Roster::new(spawn_points(), 1.0, 1))
        .add_message::<PlayerKilled>()
        .add_systems(Update, handle_player_killed);

    let victim = app
        .world_mut()
        .spawn((PlayerIdentity::new("Alice"), LocomotionController::new(&tuning)))
        .id();

    let mut kills = app.world_mut().resource_mut::<Messages<PlayerKilled>>();
    for _ in 0..2 {
        kills.write(PlayerKilled {
            killer: victim,
            victim,
        });
    }
    app.update();

    assert_eq!(app.world().resource::<Roster>().pending().len(), 1);
}
