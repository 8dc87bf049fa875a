//! UI domain: kill feed and jetpack HUD.

mod hud_fuel;
mod kill_feed;

pub use kill_feed::{
    KillFeed, KillNotification, NOTIFICATION_LIFETIME, NotificationError, NotificationLifetime,
};

use bevy::prelude::*;

use crate::core::GameState;
use crate::roster::{KillDetection, KillHandling};
use crate::ui::hud_fuel::{spawn_fuel_bar_ui, update_fuel_bar};
use crate::ui::kill_feed::{expire_kill_notifications, spawn_kill_feed, spawn_kill_notifications};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_fuel_bar_ui, spawn_kill_feed))
            .add_systems(
                Update,
                (
                    update_fuel_bar,
                    // Before the roster marks the victim as respawning
                    spawn_kill_notifications
                        .after(KillDetection)
                        .before(KillHandling),
                )
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Update, expire_kill_notifications);
    }
}
