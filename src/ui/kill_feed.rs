//! UI domain: kill feed entries that remove themselves after a few seconds.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use std::time::Duration;

use crate::roster::{PlayerIdentity, PlayerKilled, Respawning};

/// How long a kill message stays on screen, in real time.
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(3);

pub(crate) const KILL_FEED_PADDING: f32 = 16.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    MissingIdentity(&'static str),
}

impl std::fmt::Display for NotificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingIdentity(role) => {
                write!(f, "Kill notification has no {} identity", role)
            }
        }
    }
}

impl std::error::Error for NotificationError {}

#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct KillNotification {
    pub killer: String,
    pub victim: String,
    pub text: String,
}

impl KillNotification {
    pub fn new(
        killer: Option<&PlayerIdentity>,
        victim: Option<&PlayerIdentity>,
    ) -> Result<Self, NotificationError> {
        let killer = killer.ok_or(NotificationError::MissingIdentity("killer"))?;
        let victim = victim.ok_or(NotificationError::MissingIdentity("victim"))?;

        Ok(Self {
            text: format!("{} has killed {}", killer.name, victim.name),
            killer: killer.name.clone(),
            victim: victim.name.clone(),
        })
    }
}

/// One-shot countdown. Not cancellable once started.
#[derive(Component, Debug)]
pub struct NotificationLifetime {
    elapsed: Duration,
    duration: Duration,
}

impl NotificationLifetime {
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Returns true once the full duration has passed.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.elapsed += delta;
        self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }
}

/// Column in the top-right corner holding the entries
#[derive(Component)]
pub struct KillFeed;

pub(crate) fn spawn_kill_feed(mut commands: Commands) {
    commands.spawn((
        KillFeed,
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(KILL_FEED_PADDING),
            top: Val::Px(KILL_FEED_PADDING),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::FlexEnd,
            row_gap: Val::Px(4.0),
            ..default()
        },
    ));
}

/// One entry per death. Kills of a player who is already dead are dropped,
/// the same way the roster drops them.
pub(crate) fn spawn_kill_notifications(
    mut commands: Commands,
    mut kills: MessageReader<PlayerKilled>,
    identities: Query<&PlayerIdentity>,
    dead: Query<(), With<Respawning>>,
    feed_query: Query<Entity, With<KillFeed>>,
) {
    let mut reported = Vec::new();

    for kill in kills.read() {
        if dead.contains(kill.victim) || reported.contains(&kill.victim) {
            continue;
        }
        reported.push(kill.victim);

        let notification = match KillNotification::new(
            identities.get(kill.killer).ok(),
            identities.get(kill.victim).ok(),
        ) {
            Ok(notification) => notification,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        debug!("Kill feed: {}", notification.text);
        let entry = commands
            .spawn((
                Text::new(notification.text.clone()),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.9, 0.85)),
                Node {
                    padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
                notification,
                NotificationLifetime::new(NOTIFICATION_LIFETIME),
            ))
            .id();

        if let Ok(feed) = feed_query.single() {
            commands.entity(feed).add_child(entry);
        }
    }
}

pub(crate) fn expire_kill_notifications(
    mut commands: Commands,
    time: Res<Time<Real>>,
    mut query: Query<(Entity, &mut NotificationLifetime)>,
) {
    for (entity, mut lifetime) in &mut query {
        if lifetime.tick(time.delta()) {
            commands.entity(entity).despawn();
        }
    }
}
