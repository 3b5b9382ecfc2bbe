use bevy::prelude::*;

use crate::{constants::*, markers::CompletionBannerMarker};
use level::LevelCompleted;

// Show a banner the first time any exit reports completion
pub fn ui_completion_banner_system(
    mut commands: Commands,
    mut completed: MessageReader<LevelCompleted>,
    banner: Query<(), With<CompletionBannerMarker>>,
) {
    let Some(event) = completed.read().last() else {
        return;
    };
    info!("exit at row {}, column {} reached", event.row, event.col);

    if !banner.is_empty() {
        return;
    }

    commands.spawn((
        Text::new(BANNER_TEXT),
        TextFont {
            font_size: BANNER_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            top: Val::Px(20.0),
            ..default()
        },
        CompletionBannerMarker,
    ));
}
