//! Movement domain: player bootstrap from tuning data.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    FrictionProfiles, Head, JetpackEmitter, LocomotionController, LocomotionRig, LocomotionTuning,
    Player,
};
use crate::roster::{ArenaLayout, PlayerIdentity, PlayerRegistry, Roster};

pub(crate) const PLAYER_NAME: &str = "Player 1";
pub(crate) const PLAYER_RADIUS: f32 = 0.4;
pub(crate) const PLAYER_HEIGHT: f32 = 1.0;
pub(crate) const HEAD_HEIGHT: f32 = 0.7;

/// Emitter offsets on the player's back, left and right nozzle
const EMITTER_OFFSETS: [Vec3; 2] = [Vec3::new(-0.2, 0.1, 0.4), Vec3::new(0.2, 0.1, 0.4)];

/// Spawn the local player at the first arena spawn point.
pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tuning: Res<LocomotionTuning>,
    layout: Res<ArenaLayout>,
    mut roster: ResMut<Roster>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let camera = commands.spawn((Camera3d::default(), Transform::default())).id();
    let head = commands
        .spawn((
            Head,
            Transform::from_xyz(0.0, HEAD_HEIGHT, 0.0),
            Visibility::default(),
        ))
        .add_child(camera)
        .id();

    let nozzle_mesh = meshes.add(Cuboid::new(0.12, 0.3, 0.12));
    let flame = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.6, 0.2),
        emissive: LinearRgba::rgb(6.0, 2.0, 0.4),
        ..default()
    });
    let emitters: Vec<Entity> = EMITTER_OFFSETS
        .iter()
        .map(|&offset| {
            commands
                .spawn((
                    JetpackEmitter::default(),
                    Mesh3d(nozzle_mesh.clone()),
                    MeshMaterial3d(flame.clone()),
                    Transform::from_translation(offset),
                    Visibility::Hidden,
                ))
                .id()
        })
        .collect();

    let spawn_point = layout.first_spawn();
    let player = commands
        .spawn((
            // Identity & locomotion
            (
                Player,
                PlayerIdentity::new(PLAYER_NAME),
                LocomotionController::new(&tuning),
                FrictionProfiles::from(&*tuning),
                LocomotionRig {
                    head,
                    camera,
                    emitters: emitters.clone(),
                },
            ),
            // Rendering
            Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_HEIGHT))),
            MeshMaterial3d(materials.add(Color::srgb(0.85, 0.85, 0.9))),
            Transform::from_translation(spawn_point),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(PLAYER_RADIUS, PLAYER_HEIGHT),
                LockedAxes::ROTATION_LOCKED,
                Mass(tuning.mass),
                Friction::new(tuning.grounded_friction),
                LinearDamping(0.0),
            ),
        ))
        .add_child(head)
        .add_children(&emitters)
        .id();

    roster.register(PLAYER_NAME, player);
    info!(
        "Spawned {} at ({:.1}, {:.1}, {:.1}), fuel={}",
        PLAYER_NAME, spawn_point.x, spawn_point.y, spawn_point.z, tuning.jetpack.max_fuel
    );
}
