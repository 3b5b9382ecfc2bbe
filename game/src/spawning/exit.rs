use bevy::{
    asset::RenderAssetUsages,
    prelude::*,
    render::render_resource::{Extent3d, TextureDimension, TextureFormat, TextureUsages},
};

use crate::{components::ExitVolume, constants::*, markers::ExitLabelMarker};
use level::{ExitTrigger, ExitZone, LevelSettings, constants::EXIT_TEXT};

// Render the exit text once into an offscreen image that every exit label samples.
pub fn setup_exit_label_rendering(
    commands: &mut Commands,
    images: &mut Assets<Image>,
    settings: &LevelSettings,
) -> Handle<Image> {
    let size = Extent3d {
        width: LABEL_TEXTURE_SIZE,
        height: LABEL_TEXTURE_SIZE,
        ..default()
    };

    let [bg_r, bg_g, bg_b, bg_a] = LABEL_BACKGROUND_COLOR;
    let mut image = Image::new_fill(
        size,
        TextureDimension::D2,
        &[
            (bg_b * 255.0) as u8,
            (bg_g * 255.0) as u8,
            (bg_r * 255.0) as u8,
            (bg_a * 255.0) as u8,
        ],
        TextureFormat::Bgra8UnormSrgb,
        RenderAssetUsages::default(),
    );
    image.texture_descriptor.usage =
        TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST | TextureUsages::RENDER_ATTACHMENT;

    let image_handle = images.add(image);

    let text_camera = commands
        .spawn((
            Name::new("ExitLabelCamera"),
            Camera2d,
            Camera {
                order: -1,
                target: bevy::camera::RenderTarget::Image(image_handle.clone().into()),
                clear_color: bevy::camera::ClearColorConfig::Custom(Color::srgba(bg_r, bg_g, bg_b, bg_a)),
                ..default()
            },
        ))
        .id();

    let [r, g, b] = settings.exit_color;
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            UiTargetCamera(text_camera),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(EXIT_TEXT),
                TextFont {
                    font_size: settings.exit_font_size * LABEL_FONT_SCALE,
                    ..default()
                },
                TextColor(Color::srgb(r, g, b)),
                TextLayout::new_with_no_wrap(),
            ));
        });

    image_handle
}

// Spawn an exit: the trigger volume entity with a flat, upward-facing label quad as its child.
pub fn spawn_exit(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    label_image: &Handle<Image>,
    zone: &ExitZone,
) {
    let label_mesh = meshes.add(Rectangle::new(zone.label_size, zone.label_size));
    let label_material = materials.add(StandardMaterial {
        base_color_texture: Some(label_image.clone()),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            Name::new(zone.name()),
            Transform::from_translation(zone.position),
            Visibility::default(),
            ExitVolume(zone.clone()),
            ExitTrigger::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                ExitLabelMarker,
                Mesh3d(label_mesh),
                MeshMaterial3d(label_material),
                Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
            ));
        });
}
