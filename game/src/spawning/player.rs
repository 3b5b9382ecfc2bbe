use bevy::prelude::*;

use crate::{components::Body, constants::*, markers::LocalPlayerMarker};
use level::BodyTag;

// Spawn the first-person player standing at `floor_position`. The camera sits at eye height.
pub fn spawn_local_player(commands: &mut Commands, floor_position: Vec3) {
    commands.spawn((
        Name::new("Player"),
        LocalPlayerMarker,
        IsDefaultUiCamera,
        Camera3d::default(),
        Camera {
            order: 0,
            ..default()
        },
        Projection::from(PerspectiveProjection {
            fov: FPV_CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(floor_position + Vec3::Y * PLAYER_EYE_HEIGHT),
        BodyTag::player(),
        Body {
            center_offset: Vec3::new(0.0, PLAYER_HEIGHT / 2.0 - PLAYER_EYE_HEIGHT, 0.0),
            half_extents: PLAYER_HALF_EXTENTS,
        },
    ));
}
