//! Movement domain: jetpack locomotion for the player body.

mod body;
mod bootstrap;
mod components;
mod controller;
mod error;
mod jetpack;
mod resources;
mod systems;

pub use body::{AvianBody, PhysicsBody};
pub use components::{
    ExhaustAssets, ExhaustParticle, FrictionProfiles, Head, JetpackEmitter, LocomotionRig, Player,
    RigRejected, RigVerified,
};
pub use controller::{
    LocomotionCommand, LocomotionController, TickReport, clamp_pitch, horizontal,
    movement_force, steering_force, velocity_multiplier,
};
pub use error::LocomotionError;
pub use jetpack::{JetpackPhase, JetpackState, REIGNITE_FRACTION};
pub use resources::{ControlTuning, JetpackTuning, LocomotionTuning, MovementInput};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    grab_cursor, issue_commands, read_input, setup_exhaust_assets, tick_locomotion,
    trigger_jetpack_emitters, update_exhaust_particles, verify_locomotion_rigs,
};

/// Ordering for the per-frame locomotion systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocomotionInput;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<ControlTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, setup_exhaust_assets)
            .add_systems(OnEnter(GameState::Playing), spawn_player)
            .add_systems(
                Update,
                (grab_cursor, read_input, issue_commands, trigger_jetpack_emitters)
                    .chain()
                    .in_set(LocomotionInput)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                verify_locomotion_rigs.run_if(in_state(GameState::Playing)),
            )
            .add_systems(Update, update_exhaust_particles)
            .add_systems(
                FixedUpdate,
                tick_locomotion.run_if(in_state(GameState::Playing)),
            );
    }
}
