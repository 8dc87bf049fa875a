//! Core domain: arena setup and boot flow.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::state::GameState;
use crate::roster::ArenaLayout;

const FLOOR_THICKNESS: f32 = 1.0;

/// Marker for the arena floor collider
#[derive(Component, Debug)]
pub struct ArenaFloor;

pub(crate) fn setup_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    layout: Res<ArenaLayout>,
) {
    let size = layout.floor_size;

    commands.spawn((
        ArenaFloor,
        Mesh3d(meshes.add(Cuboid::new(size, FLOOR_THICKNESS, size))),
        MeshMaterial3d(materials.add(Color::srgb(0.35, 0.4, 0.35))),
        Transform::from_xyz(0.0, -FLOOR_THICKNESS * 0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(size, FLOOR_THICKNESS, size),
    ));

    // Spawn pads so respawn points are visible
    let pad_mesh = meshes.add(Cylinder::new(1.0, 0.05));
    let pad_material = materials.add(Color::srgb(0.3, 0.5, 0.8));
    for point in &layout.spawn_points {
        commands.spawn((
            Mesh3d(pad_mesh.clone()),
            MeshMaterial3d(pad_material.clone()),
            Transform::from_xyz(point.x, 0.03, point.z),
        ));
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 30.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!(
        "Arena ready: floor={}m, spawn_points={}, kill_plane_y={}",
        size,
        layout.spawn_points.len(),
        layout.kill_plane_y
    );
}

pub(crate) fn transition_to_playing(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Playing);
}
