use bevy::prelude::*;

use crate::{constants::*, markers::WallMarker};
use level::{WallKind, WallPiece};

#[derive(Bundle)]
struct WallBundle {
    name: Name,
    mesh: Mesh3d,
    material: MeshMaterial3d<StandardMaterial>,
    transform: Transform,
    visibility: Visibility,
    marker: WallMarker,
}

// One material per wall family, plus the plain default used for unknown symbols
pub struct WallMaterials {
    pub absorbing: Handle<StandardMaterial>,
    pub reflective: Handle<StandardMaterial>,
    pub transparent: Handle<StandardMaterial>,
    pub fallback: Handle<StandardMaterial>,
}

impl WallMaterials {
    pub fn new(materials: &mut Assets<StandardMaterial>) -> Self {
        let [r, g, b] = WALL_ABSORBING_COLOR;
        let absorbing = materials.add(StandardMaterial {
            base_color: Color::srgb(r, g, b),
            perceptual_roughness: 1.0,
            reflectance: 0.0,
            ..default()
        });

        let [r, g, b] = WALL_REFLECTIVE_COLOR;
        let reflective = materials.add(StandardMaterial {
            base_color: Color::srgb(r, g, b),
            metallic: 1.0,
            perceptual_roughness: WALL_REFLECTIVE_ROUGHNESS,
            ..default()
        });

        let [r, g, b, a] = WALL_TRANSPARENT_COLOR;
        let transparent = materials.add(StandardMaterial {
            base_color: Color::srgba(r, g, b, a),
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        Self {
            absorbing,
            reflective,
            transparent,
            fallback: materials.add(StandardMaterial::default()),
        }
    }

    #[must_use]
    pub fn for_kind(&self, kind: WallKind) -> Handle<StandardMaterial> {
        match kind {
            WallKind::Absorbing => self.absorbing.clone(),
            WallKind::Reflective => self.reflective.clone(),
            WallKind::Transparent => self.transparent.clone(),
            WallKind::Unrecognized(_) => self.fallback.clone(),
        }
    }
}

// Spawn a wall from the shared unit cube, stretched to the piece's scale.
pub fn spawn_wall(commands: &mut Commands, cube: &Handle<Mesh>, wall_materials: &WallMaterials, wall: &WallPiece) {
    commands.spawn(WallBundle {
        name: Name::new(wall.name()),
        mesh: Mesh3d(cube.clone()),
        material: MeshMaterial3d(wall_materials.for_kind(wall.kind)),
        transform: Transform::from_translation(wall.position).with_scale(wall.scale),
        visibility: Visibility::default(),
        marker: WallMarker,
    });
}
