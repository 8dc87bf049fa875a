//! Movement domain: the per-tick locomotion controller.
//!
//! Each fixed tick runs four stages in order: gravity boost, jetpack,
//! horizontal movement, rotation. All forces go through [`PhysicsBody`]
//! so they integrate with the body's mass.

use bevy::prelude::*;

use crate::movement::{
    FrictionProfiles, JetpackPhase, JetpackState, LocomotionError, LocomotionTuning, PhysicsBody,
};
use crate::roster::PlayerRegistry;

/// Intents for the next physics tick, written by the input layer.
///
/// `movement` and `thrust` are held levels: they stay in effect until the
/// input layer writes new values. `rotation` and `camera_pitch` are deltas
/// and are consumed by the tick that applies them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocomotionCommand {
    pub movement: Vec3,
    /// Euler angles in degrees
    pub rotation: Vec3,
    /// Degrees, positive looks up
    pub camera_pitch: f32,
    pub thrust: f32,
}

/// What a tick did, for HUD and debug consumers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub phase: JetpackPhase,
    pub jetpack_force: Vec3,
    pub movement_force: Vec3,
    pub camera_pitch: f32,
}

#[derive(Component, Debug, Clone)]
pub struct LocomotionController {
    pub jetpack: JetpackState,
    pub boost_gravity: bool,
    command: LocomotionCommand,
    camera_pitch: f32,
    friction_released: bool,
    last_phase: JetpackPhase,
}

impl LocomotionController {
    pub fn new(tuning: &LocomotionTuning) -> Self {
        Self {
            jetpack: JetpackState::full(&tuning.jetpack),
            boost_gravity: false,
            command: LocomotionCommand::default(),
            camera_pitch: 0.0,
            friction_released: false,
            last_phase: JetpackPhase::Refueling,
        }
    }

    pub fn set_movement_intent(&mut self, movement: Vec3) {
        self.command.movement = movement;
    }

    pub fn set_rotation_intent(&mut self, rotation: Vec3) {
        self.command.rotation = rotation;
    }

    pub fn set_camera_pitch_intent(&mut self, pitch: f32) {
        self.command.camera_pitch = pitch;
    }

    /// Zero means no thrust.
    pub fn request_thrust(&mut self, thrust: f32) {
        self.command.thrust = thrust;
    }

    pub fn command(&self) -> &LocomotionCommand {
        &self.command
    }

    pub fn camera_pitch(&self) -> f32 {
        self.camera_pitch
    }

    pub fn thrust_requested(&self) -> bool {
        self.command.thrust != 0.0
    }

    pub fn friction_released(&self) -> bool {
        self.friction_released
    }

    pub fn last_phase(&self) -> JetpackPhase {
        self.last_phase
    }

    pub fn on_physics_tick(
        &mut self,
        body: &mut impl PhysicsBody,
        tuning: &LocomotionTuning,
    ) -> TickReport {
        self.apply_gravity(body, tuning);
        let (phase, jetpack_force) = self.apply_jetpack(body, tuning);
        let movement_force = self.perform_movement(body, tuning);
        self.perform_rotation(body, tuning);

        self.last_phase = phase;
        TickReport {
            phase,
            jetpack_force,
            movement_force,
            camera_pitch: self.camera_pitch,
        }
    }

    fn apply_gravity(&self, body: &mut impl PhysicsBody, tuning: &LocomotionTuning) {
        // Extra pull on top of the engine's own gravity
        if self.boost_gravity {
            body.apply_force(tuning.gravity * tuning.gravity_boost);
        }
    }

    fn apply_jetpack(
        &mut self,
        body: &mut impl PhysicsBody,
        tuning: &LocomotionTuning,
    ) -> (JetpackPhase, Vec3) {
        let phase = self.jetpack.step(self.thrust_requested(), &tuning.jetpack);
        if phase == JetpackPhase::Refueling {
            return (phase, Vec3::ZERO);
        }

        let force = if body.velocity().y < tuning.jetpack_max_velocity {
            Vec3::Y * self.command.thrust
        } else {
            // Hold vertical speed at the cap
            -tuning.gravity * body.mass()
        };
        body.apply_force(force);
        (phase, force)
    }

    fn perform_movement(&self, body: &mut impl PhysicsBody, tuning: &LocomotionTuning) -> Vec3 {
        let force = movement_force(self.command.movement, body.velocity(), tuning.max_velocity);
        if force != Vec3::ZERO {
            body.apply_force(force);
        }
        force
    }

    fn perform_rotation(&mut self, body: &mut impl PhysicsBody, tuning: &LocomotionTuning) {
        let delta = self.command.rotation;
        if delta != Vec3::ZERO {
            let turn = Quat::from_euler(
                EulerRot::YXZ,
                delta.y.to_radians(),
                delta.x.to_radians(),
                delta.z.to_radians(),
            );
            body.set_rotation(body.rotation() * turn);
        }

        self.camera_pitch = clamp_pitch(
            self.camera_pitch + self.command.camera_pitch,
            tuning.cam_limit,
        );

        self.command.rotation = Vec3::ZERO;
        self.command.camera_pitch = 0.0;
    }

    /// Let the body slide: airborne friction profile and no linear drag.
    pub fn deactivate_friction(&mut self, body: &mut impl PhysicsBody, profiles: &FrictionProfiles) {
        body.set_linear_drag(0.0);
        body.set_friction(profiles.airborne);
        self.friction_released = true;
    }

    pub fn activate_friction(&mut self, body: &mut impl PhysicsBody, profiles: &FrictionProfiles) {
        body.set_linear_drag(0.0);
        body.set_friction(profiles.grounded);
        self.friction_released = false;
    }

    /// Hand the player back to the registry: unregister, then ask for a respawn.
    pub fn die(&self, name: &str, entity: Entity, registry: &mut impl PlayerRegistry) {
        registry.unregister(name);
        registry.respawn(entity);
    }

    /// Fresh tank and no pending intents, for a respawned body.
    pub fn reset(&mut self, tuning: &LocomotionTuning) {
        *self = Self::new(tuning);
    }
}

pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Share of the requested force still allowed at `speed`; 1 at rest, 0 at the cap.
pub fn velocity_multiplier(speed: f32, max_velocity: f32) -> f32 {
    ((max_velocity - speed) / max_velocity).max(0.0)
}

/// At the cap only the part of `movement` orthogonal to current horizontal
/// travel is kept, so the player can turn without speeding up.
pub fn steering_force(movement: Vec3, velocity: Vec3) -> Vec3 {
    let forward = horizontal(velocity);
    let length_squared = forward.length_squared();
    if length_squared <= f32::EPSILON {
        return movement;
    }

    let direction = horizontal(movement);
    let forward_part = forward * (direction.dot(forward) / length_squared);
    movement - forward_part
}

pub fn movement_force(movement: Vec3, velocity: Vec3, max_velocity: f32) -> Vec3 {
    if movement == Vec3::ZERO {
        return Vec3::ZERO;
    }

    let speed = horizontal(velocity).length();
    if speed < max_velocity {
        movement * velocity_multiplier(speed, max_velocity)
    } else {
        steering_force(movement, velocity)
    }
}

pub fn clamp_pitch(pitch: f32, limit: f32) -> f32 {
    pitch.clamp(-limit, limit)
}

impl LocomotionTuning {
    pub fn check(&self) -> Result<(), LocomotionError> {
        if self.max_velocity <= 0.0 {
            return Err(LocomotionError::InvalidTuning(format!(
                "max_velocity must be > 0, got {}",
                self.max_velocity
            )));
        }
        if self.jetpack.max_fuel <= 0.0 {
            return Err(LocomotionError::InvalidTuning(format!(
                "max_fuel must be > 0, got {}",
                self.jetpack.max_fuel
            )));
        }
        if self.cam_limit <= 0.0 {
            return Err(LocomotionError::InvalidTuning(format!(
                "cam_limit must be > 0, got {}",
                self.cam_limit
            )));
        }
        Ok(())
    }
}
