//! Content domain: RON data files for locomotion tuning and arena layout.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{ArenaDef, ControlsDef, FrictionDef, JetpackDef, LocomotionDef};
pub use loader::{ContentLoadError, GameData, load_all_content};
pub use validation::{ValidationError, validate_content};

use avian3d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::movement::{ControlTuning, LocomotionTuning};
use crate::roster::{ArenaLayout, Roster};

pub const CONTENT_PATH: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let data = load_game_data(Path::new(CONTENT_PATH));

        app.insert_resource(Time::<Fixed>::from_hz(data.locomotion.tick_rate_hz))
            .insert_resource(Gravity(Vec3::NEG_Y * data.locomotion.gravity))
            .insert_resource(LocomotionTuning::from(&data.locomotion))
            .insert_resource(ControlTuning::from(&data.locomotion.controls))
            .insert_resource(ArenaLayout::from(&data.arena))
            .insert_resource(Roster::from(&data.arena));
    }
}

/// Load and validate game data, falling back to built-in defaults when
/// files are missing, malformed or out of range.
pub fn load_game_data(base_path: &Path) -> GameData {
    let data = match load_all_content(base_path) {
        Ok(data) => data,
        Err(errors) => {
            for e in &errors {
                warn!("{}", e);
            }
            warn!("Content failed to load, using default tuning");
            return GameData::default();
        }
    };

    let errors = validate_content(&data);
    if !errors.is_empty() {
        for e in &errors {
            error!("{}", e);
        }
        warn!(
            "Content has {} validation error(s), using default tuning",
            errors.len()
        );
        return GameData::default();
    }

    info!(
        "Loaded content: tick_rate={}Hz, max_fuel={}, spawn_points={}",
        data.locomotion.tick_rate_hz,
        data.locomotion.jetpack.max_fuel,
        data.arena.spawn_points.len()
    );
    data
}
