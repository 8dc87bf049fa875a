//! Movement domain: configuration errors raised when a player rig activates.

use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum LocomotionError {
    /// A part of the player rig the controller drives is absent
    MissingReference { entity: Entity, what: &'static str },
    InvalidTuning(String),
}

impl std::fmt::Display for LocomotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingReference { entity, what } => {
                write!(f, "Player {} is missing its {}", entity, what)
            }
            Self::InvalidTuning(message) => write!(f, "Invalid locomotion tuning: {}", message),
        }
    }
}

impl std::error::Error for LocomotionError {}
