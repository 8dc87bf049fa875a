//! Roster domain: registered players, deaths and respawns.

mod events;
mod registry;
mod systems;
#[cfg(test)]
mod tests;

pub use events::{PlayerKilled, PlayerRespawned};
pub use registry::{ArenaLayout, PendingRespawn, PlayerRegistry, Roster};

use bevy::prelude::*;

use crate::core::GameState;
use crate::roster::systems::{detect_kill_plane, handle_player_killed, process_respawns};

/// Display identity of a player, used for kill messages and the registry.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub name: String,
}

impl PlayerIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Dead and waiting in the respawn queue.
#[derive(Component, Debug)]
pub struct Respawning;

/// Ordering for systems that produce kills.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct KillDetection;

/// Ordering for systems that react to kills.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct KillHandling;

pub struct RosterPlugin;

impl Plugin for RosterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Roster>()
            .init_resource::<ArenaLayout>()
            .add_message::<PlayerKilled>()
            .add_message::<PlayerRespawned>()
            .configure_sets(Update, KillDetection.before(KillHandling))
            .add_systems(
                Update,
                detect_kill_plane
                    .in_set(KillDetection)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (handle_player_killed, process_respawns)
                    .chain()
                    .in_set(KillHandling)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
