//! Movement domain: input sampling and command issuing.

use avian3d::prelude::*;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

use crate::movement::{ControlTuning, LocomotionController, MovementInput, Player};
use crate::roster::Respawning;

/// Lock the cursor on click, release it on Escape.
pub(crate) fn grab_cursor(
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut cursor: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    let Ok(mut cursor) = cursor.single_mut() else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    }
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    cursor: Query<&CursorOptions, With<PrimaryWindow>>,
    mut input: ResMut<MovementInput>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    // Mouse only steers the view while the cursor is captured
    let captured = cursor
        .single()
        .is_ok_and(|c| c.grab_mode != CursorGrabMode::None);

    input.axis = Vec2::new(x, y);
    input.look = if captured {
        mouse_motion.delta
    } else {
        Vec2::ZERO
    };
    input.thrust_held = keyboard.pressed(KeyCode::Space);
    input.boost_gravity_held = keyboard.pressed(KeyCode::ControlLeft);
}

/// Turn sampled input into controller intents.
///
/// Movement and thrust are re-issued every frame, zeros included. Look
/// deltas are added to whatever the controller has not consumed yet, since
/// several frames can pass between fixed ticks.
pub(crate) fn issue_commands(
    input: Res<MovementInput>,
    controls: Res<ControlTuning>,
    mut query: Query<(&mut LocomotionController, &Rotation), (With<Player>, Without<Respawning>)>,
) {
    for (mut controller, rotation) in &mut query {
        controller.set_movement_intent(wish_direction(rotation.0, input.axis) * controls.move_force);
        controller.request_thrust(if input.thrust_held {
            controls.thrust_force
        } else {
            0.0
        });
        controller.boost_gravity = input.boost_gravity_held;

        let look = input.look * controls.look_sensitivity;
        let pending = controller.command().clone();
        controller.set_rotation_intent(pending.rotation + Vec3::new(0.0, -look.x, 0.0));
        controller.set_camera_pitch_intent(pending.camera_pitch - look.y);
    }
}

/// Horizontal unit direction for a strafe/forward axis relative to body yaw.
pub(crate) fn wish_direction(body_rotation: Quat, axis: Vec2) -> Vec3 {
    let forward = horizontal_unit(body_rotation * Vec3::NEG_Z);
    let right = horizontal_unit(body_rotation * Vec3::X);
    (right * axis.x + forward * axis.y).normalize_or_zero()
}

fn horizontal_unit(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}
