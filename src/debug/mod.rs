//! Debug overlay for tuning the jetpack (dev-tools builds only).
//!
//! F1 toggles a text panel with live locomotion state.
//! F2 kills the local player to exercise the respawn flow.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::{
    ExhaustParticle, JetpackEmitter, LocomotionController, LocomotionTuning, Player, horizontal,
};
use crate::roster::{PlayerKilled, Roster};

// ============================================================================
// Debug State Resource
// ============================================================================

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay is visible
    pub show_info: bool,
}

/// Marker for the info overlay text
#[derive(Component)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (handle_debug_hotkeys, update_debug_info_overlay)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}

fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    player_query: Query<Entity, With<Player>>,
    mut kills: MessageWriter<PlayerKilled>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
        info!("Debug overlay: {}", debug_state.show_info);
    }

    if keyboard.just_pressed(KeyCode::F2) {
        for player in &player_query {
            kills.write(PlayerKilled {
                killer: player,
                victim: player,
            });
        }
    }
}

/// Update the debug info overlay with current player state
fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    tuning: Res<LocomotionTuning>,
    roster: Res<Roster>,
    player_query: Query<(&LocomotionController, &LinearVelocity), With<Player>>,
    emitters: Query<&JetpackEmitter>,
    particles: Query<(), With<ExhaustParticle>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((controller, velocity)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let jetpack = &controller.jetpack;
        let emitted: u64 = emitters.iter().map(|e| e.emitted).sum();
        **text = format!(
            "Fuel: {:.1}/{:.1}\nPhase: {:?}\nLocked: {}\nSpeed: {:.2}/{:.1} (vy {:.2})\nPitch: {:.1}\nFriction released: {}\nGravity boost: {}\nExhaust: {} live, {} total\nRegistered: {}",
            jetpack.fuel,
            tuning.jetpack.max_fuel,
            controller.last_phase(),
            jetpack.must_wait_for_fuel,
            horizontal(velocity.0).length(),
            tuning.max_velocity,
            velocity.y,
            controller.camera_pitch(),
            controller.friction_released(),
            controller.boost_gravity,
            particles.iter().count(),
            emitted,
            roster.len()
        );
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(16.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
