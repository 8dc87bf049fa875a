//! Core domain: game states and arena setup.

mod state;
mod systems;

pub use state::GameState;
pub use systems::ArenaFloor;

use bevy::prelude::*;

use crate::core::systems::{setup_arena, transition_to_playing};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(Startup, (setup_arena, transition_to_playing));
    }
}
