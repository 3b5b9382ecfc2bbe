use bevy::prelude::*;

use crate::markers::{FloorLightMarker, LightDiskMarker};
use level::{
    LevelSettings, PlacedLight,
    constants::{LIGHT_COLOR, LIGHT_EMISSIVE_STRENGTH},
};

// Mesh and emissive material shared by every light disk
pub struct FloorLightAssets {
    pub disk_mesh: Handle<Mesh>,
    pub disk_material: Handle<StandardMaterial>,
}

impl FloorLightAssets {
    pub fn new(
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        settings: &LevelSettings,
    ) -> Self {
        let [r, g, b] = LIGHT_COLOR;
        Self {
            disk_mesh: meshes.add(Cylinder::new(
                settings.light_disk_diameter / 2.0,
                settings.light_disk_height,
            )),
            disk_material: materials.add(StandardMaterial {
                base_color: Color::srgb(r, g, b),
                emissive: LinearRgba::rgb(r, g, b) * LIGHT_EMISSIVE_STRENGTH,
                ..default()
            }),
        }
    }
}

// Spawn a point light with its decorative disk as a child. The disk has no collider.
pub fn spawn_floor_light(commands: &mut Commands, assets: &FloorLightAssets, light: &PlacedLight) {
    let [r, g, b] = LIGHT_COLOR;

    commands
        .spawn((
            Name::new(light.name()),
            PointLight {
                intensity: light.intensity,
                range: light.range,
                color: Color::srgb(r, g, b),
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(light.position),
            Visibility::default(),
            FloorLightMarker,
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(assets.disk_mesh.clone()),
                MeshMaterial3d(assets.disk_material.clone()),
                Transform::default(),
                LightDiskMarker,
            ));
        });
}
