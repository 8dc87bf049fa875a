//! Movement domain: components for the player body rig.

use bevy::prelude::*;

use crate::movement::{LocomotionError, LocomotionTuning};

#[derive(Component, Debug)]
pub struct Player;

/// Camera joint. Receives pitch only; yaw lives on the body.
#[derive(Component, Debug)]
pub struct Head;

/// Jetpack nozzle. Shown and spraying exhaust while thrusting with fuel left.
#[derive(Component, Debug, Default)]
pub struct JetpackEmitter {
    /// Fractional particles carried over between frames
    pub backlog: f32,
    pub emitted: u64,
}

impl JetpackEmitter {
    /// Number of whole particles due after `dt` seconds at `rate` per second.
    pub fn particles_due(&mut self, rate: f32, dt: f32) -> u32 {
        self.backlog += rate * dt;
        let due = self.backlog.floor();
        self.backlog -= due;
        self.emitted += due as u64;
        due as u32
    }
}

/// One puff of jetpack exhaust, despawned when its life runs out.
#[derive(Component, Debug, Clone)]
pub struct ExhaustParticle {
    pub velocity: Vec3,
    pub life: f32,
    pub max_life: f32,
}

impl ExhaustParticle {
    pub fn new(velocity: Vec3, lifetime: f32) -> Self {
        Self {
            velocity,
            life: lifetime,
            max_life: lifetime,
        }
    }

    /// Age the particle; returns false once it has burned out.
    pub fn update(&mut self, dt: f32) -> bool {
        self.life -= dt;
        self.velocity *= 1.0 - 3.0 * dt; // drag
        self.life > 0.0
    }

    /// 1 when fresh, 0 when burned out.
    pub fn life_fraction(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

/// Shared mesh and material for exhaust particles.
#[derive(Resource, Debug, Default)]
pub struct ExhaustAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// Contact friction coefficients swapped in and out by the controller.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FrictionProfiles {
    pub grounded: f32,
    pub airborne: f32,
}

impl From<&LocomotionTuning> for FrictionProfiles {
    fn from(tuning: &LocomotionTuning) -> Self {
        Self {
            grounded: tuning.grounded_friction,
            airborne: tuning.airborne_friction,
        }
    }
}

/// Entities the controller drives besides its own body.
#[derive(Component, Debug, Clone)]
pub struct LocomotionRig {
    pub head: Entity,
    pub camera: Entity,
    pub emitters: Vec<Entity>,
}

impl LocomotionRig {
    /// Check every referenced part exists before the first tick uses it.
    pub fn verify(
        &self,
        owner: Entity,
        is_head: impl Fn(Entity) -> bool,
        is_camera: impl Fn(Entity) -> bool,
        is_emitter: impl Fn(Entity) -> bool,
        has_friction_profiles: bool,
    ) -> Result<(), LocomotionError> {
        if !is_head(self.head) {
            return Err(LocomotionError::MissingReference {
                entity: owner,
                what: "head joint",
            });
        }
        if !is_camera(self.camera) {
            return Err(LocomotionError::MissingReference {
                entity: owner,
                what: "camera",
            });
        }
        if !has_friction_profiles {
            return Err(LocomotionError::MissingReference {
                entity: owner,
                what: "friction profiles",
            });
        }
        if self.emitters.is_empty() || !self.emitters.iter().all(|&e| is_emitter(e)) {
            return Err(LocomotionError::MissingReference {
                entity: owner,
                what: "jetpack emitters",
            });
        }
        Ok(())
    }
}

/// Marks a rig that passed verification and may be ticked.
#[derive(Component, Debug)]
pub struct RigVerified;

/// Marks a controller whose rig failed verification. It is reported once
/// and never ticked.
#[derive(Component, Debug)]
pub struct RigRejected;
