//! Movement domain: tuning resources for locomotion and controls.

use bevy::prelude::*;

use crate::content::{ControlsDef, LocomotionDef};

#[derive(Resource, Debug, Clone)]
pub struct LocomotionTuning {
    pub gravity: Vec3,
    pub gravity_boost: f32,
    pub mass: f32,
    pub max_velocity: f32,
    pub jetpack_max_velocity: f32,
    /// Degrees
    pub cam_limit: f32,
    pub jetpack: JetpackTuning,
    pub grounded_friction: f32,
    pub airborne_friction: f32,
}

/// Fuel budget. Rates are applied once per fixed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JetpackTuning {
    pub max_fuel: f32,
    pub refill_rate: f32,
    pub usage_rate: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self::from(&LocomotionDef::default())
    }
}

impl From<&LocomotionDef> for LocomotionTuning {
    fn from(def: &LocomotionDef) -> Self {
        Self {
            gravity: Vec3::NEG_Y * def.gravity,
            gravity_boost: def.gravity_boost,
            mass: def.mass,
            max_velocity: def.max_velocity,
            jetpack_max_velocity: def.jetpack_max_velocity,
            cam_limit: def.cam_limit,
            jetpack: JetpackTuning {
                max_fuel: def.jetpack.max_fuel,
                refill_rate: def.jetpack.fuel_refill_rate,
                usage_rate: def.jetpack.fuel_usage_rate,
            },
            grounded_friction: def.friction.grounded,
            airborne_friction: def.friction.airborne,
        }
    }
}

/// How raw input maps onto locomotion commands.
#[derive(Resource, Debug, Clone)]
pub struct ControlTuning {
    pub move_force: f32,
    pub thrust_force: f32,
    pub look_sensitivity: f32,
    /// Particles per second per nozzle
    pub exhaust_rate: f32,
    /// Seconds
    pub exhaust_lifetime: f32,
}

impl Default for ControlTuning {
    fn default() -> Self {
        Self::from(&LocomotionDef::default().controls)
    }
}

impl From<&ControlsDef> for ControlTuning {
    fn from(def: &ControlsDef) -> Self {
        Self {
            move_force: def.move_force,
            thrust_force: def.thrust_force,
            look_sensitivity: def.look_sensitivity,
            exhaust_rate: def.exhaust_rate,
            exhaust_lifetime: def.exhaust_lifetime,
        }
    }
}

/// Raw input sampled once per frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// x = strafe right, y = forward
    pub axis: Vec2,
    /// Mouse motion in pixels since last frame
    pub look: Vec2,
    pub thrust_held: bool,
    pub boost_gravity_held: bool,
}
