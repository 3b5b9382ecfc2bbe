use anyhow::{Context, Result};
use bevy_ecs::prelude::Resource;
use rand::Rng;
use tracing::{info, warn};

use crate::{
    config::LevelSettings,
    grid::{Grid, LightKind, LightSpec, parse_level},
    layout::{ExitZone, WallPiece, build_layout},
    lights::{PlacedLight, place_lights, wants_lights},
};

/// Everything generated from one level payload.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Level {
    pub grid: Grid,
    pub walls: Vec<WallPiece>,
    pub exits: Vec<ExitZone>,
    pub lights: Vec<PlacedLight>,
    pub requested_lights: usize,
}

// Parse the payload, build walls and exits, then place floor lights
pub fn generate_level<R: Rng>(payload: &str, settings: &LevelSettings, rng: &mut R) -> Result<Level> {
    settings.validate().context("Invalid level settings")?;
    let description = parse_level(payload)?;
    let grid = description.grid;

    let layout = build_layout(&grid, settings);

    let (requested_lights, lights) = match description.lights {
        Some(spec) if wants_lights(Some(&spec)) => (spec.count, place_lights(&grid, spec.count, settings, rng)),
        Some(LightSpec {
            kind: LightKind::Unsupported(name),
            ..
        }) => {
            warn!("light type '{name}' is not supported, skipping floor lights");
            (0, Vec::new())
        }
        _ => (0, Vec::new()),
    };

    info!(
        "level built: {}x{} grid, {} walls, {} exits, {} of {} lights",
        grid.rows(),
        grid.cols(),
        layout.walls.len(),
        layout.exits.len(),
        lights.len(),
        requested_lights
    );

    Ok(Level {
        grid,
        walls: layout.walls,
        exits: layout.exits,
        lights,
        requested_lights,
    })
}
