//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. Runtime resources are built from them at startup.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Locomotion (locomotion.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct LocomotionDef {
    pub schema_version: u32,
    /// Fixed physics rate; jetpack rates below are per tick of this clock
    pub tick_rate_hz: f64,
    /// Downward gravity magnitude shared with the physics engine
    pub gravity: f32,
    /// Multiplier for the extra downward force while gravity boost is held
    pub gravity_boost: f32,
    pub mass: f32,
    /// Horizontal speed cap
    pub max_velocity: f32,
    /// Vertical speed above which the jetpack only holds altitude
    pub jetpack_max_velocity: f32,
    /// Camera pitch limit in degrees (both directions)
    pub cam_limit: f32,
    pub jetpack: JetpackDef,
    pub friction: FrictionDef,
    pub controls: ControlsDef,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct JetpackDef {
    pub max_fuel: f32,
    pub fuel_refill_rate: f32,
    pub fuel_usage_rate: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct FrictionDef {
    pub grounded: f32,
    pub airborne: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ControlsDef {
    pub move_force: f32,
    pub thrust_force: f32,
    /// Degrees of rotation per pixel of mouse motion
    pub look_sensitivity: f32,
    /// Exhaust particles per second from each nozzle while thrusting
    pub exhaust_rate: f32,
    /// Seconds an exhaust particle lives
    pub exhaust_lifetime: f32,
}

impl Default for LocomotionDef {
    fn default() -> Self {
        Self {
            schema_version: 1,
            tick_rate_hz: 50.0,
            gravity: 9.81,
            gravity_boost: 200.0,
            mass: 80.0,
            max_velocity: 10.0,
            jetpack_max_velocity: 6.0,
            cam_limit: 80.0,
            jetpack: JetpackDef {
                max_fuel: 100.0,
                fuel_refill_rate: 0.5,
                fuel_usage_rate: 1.0,
            },
            friction: FrictionDef {
                grounded: 0.8,
                airborne: 0.0,
            },
            controls: ControlsDef {
                move_force: 1200.0,
                thrust_force: 1400.0,
                look_sensitivity: 0.12,
                exhaust_rate: 100.0,
                exhaust_lifetime: 0.35,
            },
        }
    }
}

// ============================================================================
// Arena (arena.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ArenaDef {
    pub schema_version: u32,
    /// Seed for spawn point selection
    pub seed: u64,
    pub floor_size: f32,
    /// Players below this height are killed
    pub kill_plane_y: f32,
    /// Seconds between death and respawn
    pub respawn_delay: f32,
    pub spawn_points: Vec<(f32, f32, f32)>,
}

impl Default for ArenaDef {
    fn default() -> Self {
        Self {
            schema_version: 1,
            seed: 7,
            floor_size: 80.0,
            kill_plane_y: -30.0,
            respawn_delay: 2.0,
            spawn_points: vec![(0.0, 2.0, 0.0)],
        }
    }
}
