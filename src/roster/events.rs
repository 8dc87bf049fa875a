//! Roster domain: messages for kills and respawns.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A player was killed. Self-kills use the same entity for both fields.
#[derive(Debug, Clone, Copy)]
pub struct PlayerKilled {
    pub killer: Entity,
    pub victim: Entity,
}

impl Message for PlayerKilled {}

/// A dead player was placed back into the arena.
#[derive(Debug, Clone, Copy)]
pub struct PlayerRespawned {
    pub entity: Entity,
    pub spawn_point: Vec3,
}

impl Message for PlayerRespawned {}
