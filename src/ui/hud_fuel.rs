//! UI domain: jetpack fuel bar.

use bevy::prelude::*;

use crate::movement::{LocomotionController, LocomotionTuning, Player};

pub(crate) const FUEL_BAR_WIDTH: f32 = 200.0;
pub(crate) const FUEL_BAR_HEIGHT: f32 = 14.0;
pub(crate) const FUEL_BAR_PADDING: f32 = 16.0;

/// Marker for the fuel bar container
#[derive(Component)]
pub struct FuelBarUI;

/// Marker for the fuel bar fill element
#[derive(Component)]
pub struct FuelBarFill;

pub(crate) fn spawn_fuel_bar_ui(mut commands: Commands) {
    // Root container positioned at bottom-left
    commands
        .spawn((
            FuelBarUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(FUEL_BAR_PADDING),
                bottom: Val::Px(FUEL_BAR_PADDING),
                width: Val::Px(FUEL_BAR_WIDTH),
                height: Val::Px(FUEL_BAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                FuelBarFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.3, 0.6, 0.95)),
            ));
        });
}

pub(crate) fn update_fuel_bar(
    tuning: Res<LocomotionTuning>,
    player_query: Query<&LocomotionController, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<FuelBarFill>>,
) {
    let Ok(controller) = player_query.single() else {
        return;
    };

    for (mut node, mut bg_color) in &mut fill_query {
        node.width = Val::Percent(controller.jetpack.fuel_fraction(&tuning.jetpack) * 100.0);
        bg_color.0 = fuel_bar_color(controller);
    }
}

/// Red while locked out, orange while burning, blue otherwise.
pub(crate) fn fuel_bar_color(controller: &LocomotionController) -> Color {
    if controller.jetpack.must_wait_for_fuel {
        Color::srgb(0.85, 0.2, 0.2)
    } else if !controller.jetpack.is_refueling && controller.thrust_requested() {
        Color::srgb(0.95, 0.6, 0.2)
    } else {
        Color::srgb(0.3, 0.6, 0.95)
    }
}
