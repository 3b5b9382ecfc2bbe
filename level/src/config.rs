use anyhow::{Context, Result, bail};
use bevy_ecs::prelude::Resource;
use std::path::Path;

use crate::constants::*;

// ============================================================================
// Level Settings
// ============================================================================

/// Dimensions and tuning values used when turning a grid into geometry.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LevelSettings {
    pub cell_size: f32,
    pub wall_height: f32,
    pub wall_thickness: f32,

    pub exit_extent: f32,
    pub exit_label_height: f32,
    pub exit_trigger_height: f32,
    pub exit_font_size: f32,
    pub exit_color: [f32; 3],

    pub light_intensity: f32,
    pub light_range_cells: f32,
    pub light_disk_diameter: f32,
    pub light_disk_height: f32,
    pub light_placement_attempts: u32,
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            wall_height: WALL_HEIGHT,
            wall_thickness: WALL_THICKNESS,
            exit_extent: EXIT_EXTENT,
            exit_label_height: EXIT_LABEL_HEIGHT,
            exit_trigger_height: EXIT_TRIGGER_HEIGHT,
            exit_font_size: EXIT_FONT_SIZE,
            exit_color: EXIT_COLOR,
            light_intensity: LIGHT_INTENSITY,
            light_range_cells: LIGHT_RANGE_CELLS,
            light_disk_diameter: LIGHT_DISK_DIAMETER,
            light_disk_height: LIGHT_DISK_HEIGHT,
            light_placement_attempts: LIGHT_PLACEMENT_ATTEMPTS,
        }
    }
}

impl LevelSettings {
    // Reject dimensions that would produce degenerate or mirrored geometry
    pub fn validate(&self) -> Result<()> {
        let dimensions = [
            ("cell size", self.cell_size),
            ("wall height", self.wall_height),
            ("wall thickness", self.wall_thickness),
            ("exit extent", self.exit_extent),
            ("exit trigger height", self.exit_trigger_height),
            ("light range", self.light_range_cells),
            ("light disk diameter", self.light_disk_diameter),
            ("light disk height", self.light_disk_height),
        ];
        for (name, value) in dimensions {
            if !(value.is_finite() && value > 0.0) {
                bail!("{name} must be a positive number, got {value}");
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn light_range(&self) -> f32 {
        self.cell_size * self.light_range_cells
    }
}

// ============================================================================
// Payload Loading
// ============================================================================

pub fn load_level_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).with_context(|| format!("Failed to read level file {}", path.display()))
}
