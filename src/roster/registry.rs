//! Roster domain: the player registry and its respawn queue.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

use crate::content::ArenaDef;

/// Who is in the match, and how dead players come back.
pub trait PlayerRegistry {
    fn register(&mut self, name: &str, entity: Entity);
    /// Returns the entity that was registered under `name`, if any.
    fn unregister(&mut self, name: &str) -> Option<Entity>;
    /// Queue `entity` to be placed back into the arena.
    fn respawn(&mut self, entity: Entity);
}

/// A respawn waiting for its delay to run out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingRespawn {
    pub entity: Entity,
    pub spawn_point: Vec3,
    pub remaining: f32,
}

#[derive(Resource, Debug)]
pub struct Roster {
    players: HashMap<String, Entity>,
    spawn_points: Vec<Vec3>,
    respawn_delay: f32,
    rng: ChaCha8Rng,
    pending: Vec<PendingRespawn>,
}

impl Roster {
    pub fn new(spawn_points: Vec<Vec3>, respawn_delay: f32, seed: u64) -> Self {
        Self {
            players: HashMap::new(),
            spawn_points,
            respawn_delay,
            rng: ChaCha8Rng::seed_from_u64(seed),
            pending: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<Entity> {
        self.players.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_pending(&self, entity: Entity) -> bool {
        self.pending.iter().any(|p| p.entity == entity)
    }

    pub fn pending(&self) -> &[PendingRespawn] {
        &self.pending
    }

    /// Pick one of the arena's spawn points at random.
    pub fn pick_spawn_point(&mut self) -> Vec3 {
        if self.spawn_points.is_empty() {
            warn!("Roster has no spawn points, respawning at origin");
            return Vec3::ZERO;
        }
        let index = self.rng.random_range(0..self.spawn_points.len());
        self.spawn_points[index]
    }

    /// Count down pending respawns and hand back the ones that are due.
    pub fn tick(&mut self, dt: f32) -> Vec<PendingRespawn> {
        for pending in &mut self.pending {
            pending.remaining -= dt;
        }

        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.remaining <= 0.0);
        self.pending = waiting;
        due
    }
}

impl PlayerRegistry for Roster {
    fn register(&mut self, name: &str, entity: Entity) {
        if let Some(previous) = self.players.insert(name.to_string(), entity) {
            if previous != entity {
                warn!(
                    "Player name '{}' re-registered: {} replaces {}",
                    name, entity, previous
                );
            }
        }
        debug!("Registered player '{}' as {}", name, entity);
    }

    fn unregister(&mut self, name: &str) -> Option<Entity> {
        let removed = self.players.remove(name);
        if removed.is_none() {
            debug!("Unregister of unknown player '{}' ignored", name);
        }
        removed
    }

    fn respawn(&mut self, entity: Entity) {
        if self.is_pending(entity) {
            debug!("Respawn already queued for {}", entity);
            return;
        }

        let spawn_point = self.pick_spawn_point();
        self.pending.push(PendingRespawn {
            entity,
            spawn_point,
            remaining: self.respawn_delay,
        });
        info!(
            "Respawn queued for {} at ({:.1}, {:.1}, {:.1}) in {:.1}s",
            entity, spawn_point.x, spawn_point.y, spawn_point.z, self.respawn_delay
        );
    }
}

impl From<&ArenaDef> for Roster {
    fn from(def: &ArenaDef) -> Self {
        Self::new(
            def.spawn_points
                .iter()
                .map(|&(x, y, z)| Vec3::new(x, y, z))
                .collect(),
            def.respawn_delay,
            def.seed,
        )
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::from(&ArenaDef::default())
    }
}

/// Static arena geometry shared by spawning and the kill plane.
#[derive(Resource, Debug, Clone)]
pub struct ArenaLayout {
    pub floor_size: f32,
    pub kill_plane_y: f32,
    pub spawn_points: Vec<Vec3>,
}

impl ArenaLayout {
    pub fn first_spawn(&self) -> Vec3 {
        self.spawn_points.first().copied().unwrap_or(Vec3::Y * 2.0)
    }
}

impl From<&ArenaDef> for ArenaLayout {
    fn from(def: &ArenaDef) -> Self {
        Self {
            floor_size: def.floor_size,
            kill_plane_y: def.kill_plane_y,
            spawn_points: def
                .spawn_points
                .iter()
                .map(|&(x, y, z)| Vec3::new(x, y, z))
                .collect(),
        }
    }
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self::from(&ArenaDef::default())
    }
}
