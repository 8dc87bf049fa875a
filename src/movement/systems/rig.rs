//! Movement domain: activation checks for player rigs.

use bevy::prelude::*;

use crate::movement::{
    FrictionProfiles, Head, JetpackEmitter, LocomotionController, LocomotionError, LocomotionRig,
    LocomotionTuning, RigRejected, RigVerified,
};

/// Fail fast when a new controller is missing any part it drives.
///
/// A failing controller is marked [`RigRejected`] so it is reported once.
pub(crate) fn verify_locomotion_rigs(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    rigs: Query<
        (Entity, &LocomotionRig, Has<FrictionProfiles>),
        (
            With<LocomotionController>,
            Without<RigVerified>,
            Without<RigRejected>,
        ),
    >,
    unrigged: Query<
        Entity,
        (
            With<LocomotionController>,
            Without<LocomotionRig>,
            Without<RigRejected>,
        ),
    >,
    heads: Query<(), With<Head>>,
    cameras: Query<(), With<Camera3d>>,
    emitters: Query<(), With<JetpackEmitter>>,
) -> Result {
    let mut first_error = None;

    for entity in &unrigged {
        commands.entity(entity).insert(RigRejected);
        first_error.get_or_insert(LocomotionError::MissingReference {
            entity,
            what: "locomotion rig",
        });
    }

    for (entity, rig, has_friction) in &rigs {
        let checked = tuning.check().and_then(|()| {
            rig.verify(
                entity,
                |e| heads.contains(e),
                |e| cameras.contains(e),
                |e| emitters.contains(e),
                has_friction,
            )
        });

        match checked {
            Ok(()) => {
                commands.entity(entity).insert(RigVerified);
                debug!("Locomotion rig verified for {}", entity);
            }
            Err(e) => {
                commands.entity(entity).insert(RigRejected);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
