use bevy_math::Vec3;
use tracing::debug;

use crate::{
    collision::boxes_overlap,
    config::LevelSettings,
    grid::{Cell, Grid, WallKind},
};

// ============================================================================
// Layout Types
// ============================================================================

/// One wall primitive: a unit cube placed at `position` and stretched by `scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct WallPiece {
    pub row: usize,
    pub col: usize,
    pub symbol: char,
    pub kind: WallKind,
    pub position: Vec3,
    pub scale: Vec3,
}

impl WallPiece {
    #[must_use]
    pub fn name(&self) -> String {
        format!("Wall_{}_{}_{}", self.col, self.row, self.symbol)
    }
}

/// Exit marker: a flat label plus a trigger box, both anchored at `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExitZone {
    pub row: usize,
    pub col: usize,
    pub position: Vec3,
    // Full size of the trigger box
    pub trigger_size: Vec3,
    // Trigger box center relative to `position`
    pub trigger_offset: Vec3,
    pub label_size: f32,
}

impl ExitZone {
    #[must_use]
    pub fn name(&self) -> String {
        format!("End_{}_{}", self.col, self.row)
    }

    #[must_use]
    pub fn trigger_center(&self) -> Vec3 {
        self.position + self.trigger_offset
    }

    // Box overlap test against a body's center and half extents
    #[must_use]
    pub fn overlaps(&self, center: Vec3, half_extents: Vec3) -> bool {
        boxes_overlap(self.trigger_center(), self.trigger_size / 2.0, center, half_extents)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelLayout {
    pub walls: Vec<WallPiece>,
    pub exits: Vec<ExitZone>,
}

// ============================================================================
// Geometry Builder
// ============================================================================

// World position of a cell's center on the floor plane
#[must_use]
pub fn cell_origin(row: usize, col: usize, settings: &LevelSettings) -> Vec3 {
    Vec3::new(col as f32 * settings.cell_size, 0.0, row as f32 * settings.cell_size)
}

#[must_use]
pub fn wall_piece(row: usize, col: usize, kind: WallKind, settings: &LevelSettings) -> WallPiece {
    let origin = cell_origin(row, col, settings);
    WallPiece {
        row,
        col,
        symbol: Cell::Wall(kind).symbol(),
        kind,
        position: Vec3::new(origin.x, settings.wall_height * 0.5, origin.z),
        scale: Vec3::new(settings.wall_thickness, settings.wall_height, settings.wall_thickness),
    }
}

#[must_use]
pub fn exit_zone(row: usize, col: usize, settings: &LevelSettings) -> ExitZone {
    let origin = cell_origin(row, col, settings);
    ExitZone {
        row,
        col,
        position: Vec3::new(origin.x, settings.exit_label_height, origin.z),
        trigger_size: Vec3::new(settings.exit_extent, settings.exit_trigger_height, settings.exit_extent),
        trigger_offset: Vec3::new(0.0, settings.exit_trigger_height / 2.0, 0.0),
        label_size: settings.exit_extent,
    }
}

/// Walk the grid once, emitting a wall per wall cell and an exit zone per exit cell.
#[must_use]
pub fn build_layout(grid: &Grid, settings: &LevelSettings) -> LevelLayout {
    let mut layout = LevelLayout::default();

    for (row, col, cell) in grid.iter() {
        match cell {
            Cell::Open => {}
            Cell::Exit => layout.exits.push(exit_zone(row, col, settings)),
            Cell::Wall(kind) => {
                if let WallKind::Unrecognized(symbol) = kind {
                    debug!("unrecognized wall symbol '{symbol}' at ({row}, {col}), using default material");
                }
                layout.walls.push(wall_piece(row, col, kind, settings));
            }
        }
    }

    layout
}
