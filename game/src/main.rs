use anyhow::Result;
use bevy::{log::LogPlugin, prelude::*};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;

use game::{
    constants::{DEFAULT_LEVEL_PATH, LOG_FILTER},
    resources::{InputSettings, LocalPlayerView},
    systems::{
        exit::exit_trigger_system,
        input::{input_cursor_toggle_system, input_movement_system},
        map::map_spawn_level_system,
        ui::ui_completion_banner_system,
    },
};
use level::{Level, LevelCompleted, LevelSettings, generate_level, load_level_file};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "Maze level viewer", long_about = None)]
struct Args {
    // Level description (JSON)
    #[arg(short, long, default_value = DEFAULT_LEVEL_PATH)]
    level: PathBuf,

    // Seed for floor light placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    // Corridor width in meters
    #[arg(long)]
    cell_size: Option<f32>,

    // Wall height in meters
    #[arg(long)]
    wall_height: Option<f32>,

    // Wall thickness in meters
    #[arg(long)]
    wall_thickness: Option<f32>,

    // Random draws allowed when placing floor lights
    #[arg(long)]
    light_attempts: Option<u32>,

    // Invert vertical mouse look
    #[arg(long, default_value_t = false)]
    invert_pitch: bool,

    // Window width
    #[arg(long, default_value = "1200")]
    window_width: u32,

    // Window height
    #[arg(long, default_value = "800")]
    window_height: u32,
}

impl Args {
    fn level_settings(&self) -> LevelSettings {
        let mut settings = LevelSettings::default();
        if let Some(cell_size) = self.cell_size {
            settings.cell_size = cell_size;
        }
        if let Some(wall_height) = self.wall_height {
            settings.wall_height = wall_height;
        }
        if let Some(wall_thickness) = self.wall_thickness {
            settings.wall_thickness = wall_thickness;
        }
        if let Some(attempts) = self.light_attempts {
            settings.light_placement_attempts = attempts;
        }
        settings
    }
}

// ============================================================================
// Level Generation
// ============================================================================

fn build_level(args: &Args, settings: &LevelSettings) -> Result<Level> {
    let payload = load_level_file(&args.level)?;
    match args.seed {
        Some(seed) => generate_level(&payload, settings, &mut StdRng::seed_from_u64(seed)),
        None => generate_level(&payload, settings, &mut rand::rng()),
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = args.level_settings();

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Labyrinth".to_string(),
                    resolution: (args.window_width, args.window_height).into(),
                    ..default()
                }),
                primary_cursor_options: Some(bevy::window::CursorOptions {
                    visible: false,
                    grab_mode: bevy::window::CursorGrabMode::Locked,
                    hit_test: true,
                }),
                ..default()
            })
            .set(LogPlugin {
                level: bevy::log::Level::INFO,
                filter: LOG_FILTER.to_string(),
                ..default()
            }),
    );

    // Generate after the log plugin is installed so the pipeline's tracing output is visible
    let level = build_level(&args, &settings).inspect_err(|err| error!("level generation aborted: {err:#}"))?;

    app.insert_resource(level)
        .insert_resource(settings)
        .insert_resource(InputSettings {
            invert_pitch: args.invert_pitch,
        })
        .insert_resource(LocalPlayerView::default())
        .add_message::<LevelCompleted>()
        .add_systems(Startup, map_spawn_level_system)
        .add_systems(
            Update,
            (
                // Toggle cursor lock with Escape
                input_cursor_toggle_system,
                // Handle WASD input and mouse look
                input_movement_system,
                // Fire exit triggers on player entry
                exit_trigger_system,
                // Show the completion banner
                ui_completion_banner_system,
            )
                .chain(),
        )
        .run();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_level_settings() {
        let args = Args::parse_from(["game", "--cell-size", "3", "--light-attempts", "10"]);
        let settings = args.level_settings();

        assert_eq!(settings.cell_size, 3.0);
        assert_eq!(settings.light_placement_attempts, 10);
        assert_eq!(settings.wall_height, LevelSettings::default().wall_height);
        assert_eq!(args.level, PathBuf::from(DEFAULT_LEVEL_PATH));
    }

    #[test]
    fn default_level_path_is_relative_to_the_working_directory() {
        let args = Args::parse_from(["game"]);
        assert!(args.level.is_relative());
        assert_eq!(args.level, PathBuf::from("assets/labyrinth.json"));
    }
}
