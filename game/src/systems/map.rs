use bevy::prelude::*;

use crate::{
    constants::*,
    spawning::{
        FloorLightAssets, WallMaterials, setup_exit_label_rendering, spawn_exit, spawn_floor_light,
        spawn_local_player, spawn_wall,
    },
};
use level::{Level, LevelSettings, layout::cell_origin};

// ============================================================================
// Level Spawning System
// ============================================================================

// Turn the generated level into entities: floor, walls, exits, floor lights, player
pub fn map_spawn_level_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    level: Res<Level>,
    settings: Res<LevelSettings>,
) {
    info!(
        "spawning {} walls, {} exits and {} floor lights",
        level.walls.len(),
        level.exits.len(),
        level.lights.len()
    );

    spawn_floor(&mut commands, &mut meshes, &mut materials, &level, &settings);

    commands.spawn((
        DirectionalLight {
            illuminance: LIGHT_DIRECTIONAL_BRIGHTNESS,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let cube = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let wall_materials = WallMaterials::new(&mut materials);
    for wall in &level.walls {
        spawn_wall(&mut commands, &cube, &wall_materials, wall);
    }

    if !level.exits.is_empty() {
        let label_image = setup_exit_label_rendering(&mut commands, &mut images, &settings);
        for zone in &level.exits {
            spawn_exit(&mut commands, &mut meshes, &mut materials, &label_image, zone);
        }
    }

    let light_assets = FloorLightAssets::new(&mut meshes, &mut materials, &settings);
    for light in &level.lights {
        spawn_floor_light(&mut commands, &light_assets, light);
    }

    let (row, col) = level.grid.first_open().unwrap_or_else(|| {
        warn!("grid has no open cell, spawning player at the origin");
        (0, 0)
    });
    spawn_local_player(&mut commands, cell_origin(row, col, &settings));
}

// Floor plane covering every cell of the grid
fn spawn_floor(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    level: &Level,
    settings: &LevelSettings,
) {
    let width = level.grid.cols() as f32 * settings.cell_size;
    let depth = level.grid.rows() as f32 * settings.cell_size;
    // Cell origins are cell centers, so the grid spans half a cell past the first origin
    let center = Vec3::new(
        (width - settings.cell_size) / 2.0,
        0.0,
        (depth - settings.cell_size) / 2.0,
    );
    let [r, g, b] = FLOOR_COLOR;

    commands.spawn((
        Name::new("Floor"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(width, depth))),
        MeshMaterial3d(materials.add(Color::srgb(r, g, b))),
        Transform::from_translation(center),
        Visibility::default(),
    ));
}
