use bevy::{
    input::mouse::{MouseButton, MouseMotion},
    prelude::*,
    window::{CursorGrabMode, CursorOptions},
};

use crate::{
    components::Body,
    constants::*,
    markers::LocalPlayerMarker,
    resources::{InputSettings, LocalPlayerView},
};
use level::{Level, slide_body};

const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.05;

// Escape toggles cursor lock, left click re-locks it
pub fn input_cursor_toggle_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut cursor_options: Single<&mut CursorOptions>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        cursor_options.visible = !cursor_options.visible;
        cursor_options.grab_mode = if cursor_options.visible {
            CursorGrabMode::None
        } else {
            CursorGrabMode::Locked
        };
    }

    if mouse.just_pressed(MouseButton::Left) && cursor_options.visible {
        cursor_options.visible = false;
        cursor_options.grab_mode = CursorGrabMode::Locked;
    }
}

// Handle WASD movement and mouse look for the local player; walls block movement
pub fn input_movement_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    cursor_options: Single<&CursorOptions>,
    time: Res<Time>,
    input_settings: Res<InputSettings>,
    level: Res<Level>,
    mut view: ResMut<LocalPlayerView>,
    player: Single<(&mut Transform, &Body), With<LocalPlayerMarker>>,
) {
    let (mut transform, body) = player.into_inner();

    // Require locked cursor before processing any input
    if cursor_options.grab_mode == CursorGrabMode::None {
        for _ in mouse_motion.read() {}
        return;
    }

    let pitch_sign = if input_settings.invert_pitch {
        MOUSE_SENSITIVITY
    } else {
        -MOUSE_SENSITIVITY
    };
    for motion in mouse_motion.read() {
        view.yaw = motion.delta.x.mul_add(-MOUSE_SENSITIVITY, view.yaw);
        view.pitch = motion.delta.y.mul_add(pitch_sign, view.pitch);
    }
    view.pitch = view.pitch.clamp(-MAX_PITCH, MAX_PITCH);
    transform.rotation = Quat::from_euler(EulerRot::YXZ, view.yaw, view.pitch, 0.0);

    // Build movement input vector (forward=y, right=x)
    let mut move_input = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        move_input.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        move_input.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        move_input.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        move_input.x -= 1.0;
    }

    let speed = if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
        SPEED_RUN
    } else {
        SPEED_WALK
    };
    let motion = movement_direction(move_input, view.yaw) * speed * time.delta_secs();
    if motion == Vec3::ZERO {
        return;
    }

    let center = body.center(transform.translation);
    let next_center = slide_body(&level.walls, center, body.half_extents, motion);
    transform.translation += next_center - center;
}

// Horizontal unit direction for an input vector, relative to the view yaw (yaw 0 faces -Z)
#[must_use]
pub fn movement_direction(move_input: Vec2, yaw: f32) -> Vec3 {
    if move_input.length_squared() == 0.0 {
        return Vec3::ZERO;
    }

    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let forward = Vec3::new(-sin_yaw, 0.0, -cos_yaw);
    let right = Vec3::new(cos_yaw, 0.0, -sin_yaw);
    (forward * move_input.y + right * move_input.x).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_at_zero_yaw_is_negative_z() {
        let dir = movement_direction(Vec2::new(0.0, 1.0), 0.0);
        assert!(dir.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn strafe_right_at_zero_yaw_is_positive_x() {
        let dir = movement_direction(Vec2::new(1.0, 0.0), 0.0);
        assert!(dir.abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn diagonal_input_is_normalized() {
        let dir = movement_direction(Vec2::new(1.0, 1.0), 0.3);
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert_eq!(dir.y, 0.0);
    }

    #[test]
    fn quarter_turn_rotates_forward_to_negative_x() {
        let dir = movement_direction(Vec2::new(0.0, 1.0), std::f32::consts::FRAC_PI_2);
        assert!(dir.abs_diff_eq(Vec3::NEG_X, 1e-6));
    }

    #[test]
    fn no_input_no_movement() {
        assert_eq!(movement_direction(Vec2::ZERO, 1.0), Vec3::ZERO);
    }
}
