//! Movement domain: jetpack exhaust nozzles and their particles.

use bevy::prelude::*;
use rand::Rng;

use crate::movement::{
    ControlTuning, ExhaustAssets, ExhaustParticle, JetpackEmitter, LocomotionController,
    LocomotionRig,
};
use crate::roster::Respawning;

const EXHAUST_SPEED: f32 = 4.0;
const EXHAUST_SPREAD: f32 = 0.6;
const EXHAUST_SIZE: f32 = 0.12;

pub(crate) fn setup_exhaust_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(ExhaustAssets {
        mesh: meshes.add(Sphere::new(EXHAUST_SIZE)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 0.7, 0.3, 0.8),
            emissive: LinearRgba::rgb(4.0, 1.5, 0.3),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        }),
    });
}

/// Show nozzles and spray exhaust while thrust is requested and fuel is left.
pub(crate) fn trigger_jetpack_emitters(
    mut commands: Commands,
    time: Res<Time>,
    controls: Res<ControlTuning>,
    exhaust: Res<ExhaustAssets>,
    players: Query<(&LocomotionController, &LocomotionRig, Has<Respawning>)>,
    mut emitters: Query<(&mut JetpackEmitter, &mut Visibility, &GlobalTransform)>,
) {
    let mut rng = rand::rng();

    for (controller, rig, respawning) in &players {
        let firing = !respawning && controller.thrust_requested() && controller.jetpack.fuel > 0.0;

        for &entity in &rig.emitters {
            let Ok((mut emitter, mut visibility, nozzle)) = emitters.get_mut(entity) else {
                continue;
            };

            if !firing {
                emitter.backlog = 0.0;
                *visibility = Visibility::Hidden;
                continue;
            }

            *visibility = Visibility::Visible;
            let origin = nozzle.translation();
            for _ in 0..emitter.particles_due(controls.exhaust_rate, time.delta_secs()) {
                let spread = Vec3::new(
                    rng.random_range(-EXHAUST_SPREAD..EXHAUST_SPREAD),
                    0.0,
                    rng.random_range(-EXHAUST_SPREAD..EXHAUST_SPREAD),
                );
                commands.spawn((
                    ExhaustParticle::new(
                        Vec3::NEG_Y * EXHAUST_SPEED + spread,
                        controls.exhaust_lifetime,
                    ),
                    Mesh3d(exhaust.mesh.clone()),
                    MeshMaterial3d(exhaust.material.clone()),
                    Transform::from_translation(origin),
                ));
            }
        }
    }
}

/// Drift, shrink and despawn exhaust particles.
pub(crate) fn update_exhaust_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut particles: Query<(Entity, &mut ExhaustParticle, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (entity, mut particle, mut transform) in &mut particles {
        if !particle.update(dt) {
            commands.entity(entity).despawn();
            continue;
        }
        transform.translation += particle.velocity * dt;
        transform.scale = Vec3::splat(0.3 + particle.life_fraction() * 0.7);
    }
}
