use bevy_math::Vec3;
use rand::Rng;
use tracing::debug;

use crate::{
    config::LevelSettings,
    grid::{Grid, LightKind, LightSpec},
    layout::cell_origin,
};

/// A floor light accepted by placement. The disk visual shares its position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLight {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub position: Vec3,
    pub intensity: f32,
    pub range: f32,
}

impl PlacedLight {
    #[must_use]
    pub fn name(&self) -> String {
        format!("PointLight_{}", self.index)
    }
}

// A cell is central when it and all 8 neighbors are in bounds and open floor
#[must_use]
pub fn is_central(grid: &Grid, row: usize, col: usize) -> bool {
    let (row, col) = (row as isize, col as isize);
    (-1..=1).all(|dr| (-1..=1).all(|dc| grid.is_open(row + dr, col + dc)))
}

// Whether a light descriptor asks for any placement at all
#[must_use]
pub fn wants_lights(spec: Option<&LightSpec>) -> bool {
    matches!(spec, Some(LightSpec { count, kind: LightKind::Point }) if *count > 0)
}

/// Rejection-sample random cells until `count` central cells were accepted or the
/// attempt budget runs out. Returns fewer lights than requested when the budget
/// is exhausted first.
pub fn place_lights<R: Rng>(
    grid: &Grid,
    count: usize,
    settings: &LevelSettings,
    rng: &mut R,
) -> Vec<PlacedLight> {
    // Every accepted light costs an attempt, so the budget caps the result size
    let mut lights = Vec::with_capacity(count.min(settings.light_placement_attempts as usize));
    let mut attempts = settings.light_placement_attempts;

    while lights.len() < count && attempts > 0 {
        attempts -= 1;

        let col = rng.random_range(0..grid.cols());
        let row = rng.random_range(0..grid.rows());
        if !is_central(grid, row, col) {
            continue;
        }

        let origin = cell_origin(row, col, settings);
        lights.push(PlacedLight {
            index: lights.len(),
            row,
            col,
            position: Vec3::new(origin.x, settings.light_disk_height * 0.5, origin.z),
            intensity: settings.light_intensity,
            range: settings.light_range(),
        });
    }

    if lights.len() < count {
        debug!(
            "placed {} of {} floor lights before exhausting {} attempts",
            lights.len(),
            count,
            settings.light_placement_attempts
        );
    }

    lights
}
