//! Movement domain: the fixed-rate locomotion tick.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AvianBody, FrictionProfiles, Head, JetpackPhase, LocomotionController, LocomotionRig,
    LocomotionTuning, RigVerified,
};
use crate::roster::Respawning;

pub(crate) fn tick_locomotion(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    mut players: Query<
        (
            &mut LocomotionController,
            &FrictionProfiles,
            &LocomotionRig,
            &mut LinearVelocity,
            &mut Rotation,
            &mut Friction,
            &mut LinearDamping,
            &ComputedMass,
        ),
        (With<RigVerified>, Without<Respawning>),
    >,
    mut heads: Query<&mut Transform, With<Head>>,
) {
    let dt = time.delta_secs();

    for (
        mut controller,
        profiles,
        rig,
        mut velocity,
        mut rotation,
        mut friction,
        mut damping,
        mass,
    ) in &mut players
    {
        let mut body = AvianBody::new(
            &mut *velocity,
            &mut *rotation,
            &mut *friction,
            &mut *damping,
            mass.inverse(),
            dt,
        );

        let was_locked = controller.jetpack.must_wait_for_fuel;
        let report = controller.on_physics_tick(&mut body, &tuning);

        // Slide freely while the jetpack carries us, grip again once it stops
        let flying = report.phase == JetpackPhase::Flying;
        if flying && !controller.friction_released() {
            controller.deactivate_friction(&mut body, profiles);
        } else if !flying && controller.friction_released() {
            controller.activate_friction(&mut body, profiles);
        }
        body.commit();

        if let Ok(mut head) = heads.get_mut(rig.head) {
            head.rotation = Quat::from_rotation_x(report.camera_pitch.to_radians());
        }

        match (was_locked, controller.jetpack.must_wait_for_fuel) {
            (false, true) => debug!("Jetpack ran dry, locked until half full"),
            (true, false) => debug!(
                "Jetpack refueled to {:.1}/{:.1}, thrust available",
                controller.jetpack.fuel, tuning.jetpack.max_fuel
            ),
            _ => {}
        }
    }
}
