//! Roster domain: death and respawn systems.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{LocomotionController, LocomotionTuning, Player};
use crate::roster::{
    ArenaLayout, PlayerIdentity, PlayerKilled, PlayerRegistry, PlayerRespawned, Respawning, Roster,
};

/// Falling out of the arena counts as killing yourself.
pub(crate) fn detect_kill_plane(
    layout: Res<ArenaLayout>,
    query: Query<(Entity, &Transform), (With<Player>, Without<Respawning>)>,
    mut kills: MessageWriter<PlayerKilled>,
) {
    for (entity, transform) in &query {
        if transform.translation.y < layout.kill_plane_y {
            kills.write(PlayerKilled {
                killer: entity,
                victim: entity,
            });
        }
    }
}

pub(crate) fn handle_player_killed(
    mut commands: Commands,
    mut kills: MessageReader<PlayerKilled>,
    mut roster: ResMut<Roster>,
    victims: Query<(&LocomotionController, &PlayerIdentity), Without<Respawning>>,
) {
    for kill in kills.read() {
        let Ok((controller, identity)) = victims.get(kill.victim) else {
            continue;
        };
        // Already queued by an earlier kill this frame
        if roster.is_pending(kill.victim) {
            continue;
        }

        info!("{} died", identity.name);
        controller.die(&identity.name, kill.victim, &mut *roster);
        commands
            .entity(kill.victim)
            .insert((Respawning, Visibility::Hidden));
    }
}

pub(crate) fn process_respawns(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    mut roster: ResMut<Roster>,
    mut query: Query<
        (
            &PlayerIdentity,
            &mut LocomotionController,
            &mut Transform,
            &mut Position,
            &mut LinearVelocity,
        ),
        With<Respawning>,
    >,
    mut respawned: MessageWriter<PlayerRespawned>,
) {
    for due in roster.tick(time.delta_secs()) {
        let Ok((identity, mut controller, mut transform, mut position, mut velocity)) =
            query.get_mut(due.entity)
        else {
            debug!("Respawn for {} dropped, entity is gone", due.entity);
            continue;
        };

        transform.translation = due.spawn_point;
        position.0 = due.spawn_point;
        velocity.0 = Vec3::ZERO;
        controller.reset(&tuning);
        roster.register(&identity.name, due.entity);

        commands
            .entity(due.entity)
            .remove::<Respawning>()
            .insert(Visibility::Inherited);
        respawned.write(PlayerRespawned {
            entity: due.entity,
            spawn_point: due.spawn_point,
        });
        info!("{} respawned", identity.name);
    }
}
