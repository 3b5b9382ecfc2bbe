use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::warn;

use crate::constants::*;

// ============================================================================
// Cells
// ============================================================================

/// Wall material family selected by the cell symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallKind {
    Absorbing,
    Reflective,
    Transparent,
    // Any symbol without a dedicated material; rendered with the default one
    Unrecognized(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Wall(WallKind),
    Exit,
}

impl Cell {
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Self {
        match symbol {
            SYMBOL_OPEN => Self::Open,
            SYMBOL_EXIT => Self::Exit,
            SYMBOL_ABSORBING => Self::Wall(WallKind::Absorbing),
            SYMBOL_REFLECTIVE => Self::Wall(WallKind::Reflective),
            SYMBOL_TRANSPARENT => Self::Wall(WallKind::Transparent),
            other => Self::Wall(WallKind::Unrecognized(other)),
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Open => SYMBOL_OPEN,
            Self::Exit => SYMBOL_EXIT,
            Self::Wall(WallKind::Absorbing) => SYMBOL_ABSORBING,
            Self::Wall(WallKind::Reflective) => SYMBOL_REFLECTIVE,
            Self::Wall(WallKind::Transparent) => SYMBOL_TRANSPARENT,
            Self::Wall(WallKind::Unrecognized(symbol)) => symbol,
        }
    }
}

// ============================================================================
// Grid
// ============================================================================

/// Rectangular, non-empty grid of cells. Row index maps to world Z, column to world X.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.is_empty() {
            bail!("grid is empty");
        }

        let cols = rows[0].as_ref().chars().count();
        if cols == 0 {
            bail!("grid row 0 is empty");
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != cols {
                bail!("grid row {index} has {len} cells, expected {cols}");
            }
            cells.extend(row.chars().map(Cell::from_symbol));
        }

        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    // Signed lookup so neighborhood scans can step past the border
    #[must_use]
    pub fn is_open(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.get(row as usize, col as usize) == Some(Cell::Open)
    }

    // First open cell in row-major order, used as the player start
    #[must_use]
    pub fn first_open(&self) -> Option<(usize, usize)> {
        self.iter()
            .find(|(_, _, cell)| *cell == Cell::Open)
            .map(|(row, col, _)| (row, col))
    }

    // Row-major walk yielding (row, col, cell)
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (i / self.cols, i % self.cols, *cell))
    }
}

// ============================================================================
// Light Descriptor
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightKind {
    Point,
    Unsupported(String),
}

impl LightKind {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == LIGHT_KIND_POINT {
            Self::Point
        } else {
            Self::Unsupported(name.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightSpec {
    pub count: usize,
    pub kind: LightKind,
}

// ============================================================================
// Payload Parsing
// ============================================================================

#[derive(Deserialize)]
struct RawLevel {
    #[serde(default)]
    grid: Option<Vec<String>>,
    #[serde(default)]
    lights: Option<RawLights>,
}

#[derive(Deserialize)]
struct RawLights {
    #[serde(default)]
    count: i64,
    #[serde(default, rename = "type")]
    kind: String,
}

/// Parsed level payload: the grid plus the optional light descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDescription {
    pub grid: Grid,
    pub lights: Option<LightSpec>,
}

pub fn parse_level(payload: &str) -> Result<LevelDescription> {
    if payload.trim().is_empty() {
        bail!("level payload is empty");
    }

    let raw: RawLevel = serde_json::from_str(payload).context("Failed to parse level JSON")?;

    let rows = match raw.grid {
        Some(rows) if !rows.is_empty() => rows,
        _ => bail!("grid is empty"),
    };
    let grid = Grid::from_rows(&rows)?;

    let lights = raw.lights.map(|lights| {
        if lights.count < 0 {
            warn!("negative light count {} treated as zero", lights.count);
        }
        LightSpec {
            count: usize::try_from(lights.count).unwrap_or(0),
            kind: LightKind::from_name(&lights.kind),
        }
    });

    Ok(LevelDescription { grid, lights })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grid_and_lights() {
        let level = parse_level(r#"{"grid":["AR_","TG_"],"lights":{"count":3,"type":"Point"}}"#)
            .expect("valid payload");

        assert_eq!(level.grid.rows(), 2);
        assert_eq!(level.grid.cols(), 3);
        assert_eq!(level.grid.get(0, 0), Some(Cell::Wall(WallKind::Absorbing)));
        assert_eq!(level.grid.get(0, 1), Some(Cell::Wall(WallKind::Reflective)));
        assert_eq!(level.grid.get(0, 2), Some(Cell::Open));
        assert_eq!(level.grid.get(1, 0), Some(Cell::Wall(WallKind::Transparent)));
        assert_eq!(level.grid.get(1, 1), Some(Cell::Exit));
        assert_eq!(level.grid.get(2, 0), None);
        assert_eq!(
            level.lights,
            Some(LightSpec {
                count: 3,
                kind: LightKind::Point
            })
        );
    }

    #[test]
    fn lights_are_optional() {
        let level = parse_level(r#"{"grid":["_"]}"#).expect("valid payload");
        assert!(level.lights.is_none());
    }

    #[test]
    fn unknown_symbols_become_unrecognized_walls() {
        let grid = Grid::from_rows(&["X_"]).expect("valid grid");
        let cell = grid.get(0, 0).expect("in bounds");
        assert_eq!(cell, Cell::Wall(WallKind::Unrecognized('X')));
        assert_eq!(cell.symbol(), 'X');
    }

    #[test]
    fn unsupported_light_kind_is_kept_by_name() {
        let level = parse_level(r#"{"grid":["_"],"lights":{"count":2,"type":"Spot"}}"#).expect("valid payload");
        let lights = level.lights.expect("lights present");
        assert_eq!(lights.kind, LightKind::Unsupported("Spot".to_string()));
    }

    #[test]
    fn negative_light_count_is_zero() {
        let level = parse_level(r#"{"grid":["_"],"lights":{"count":-4,"type":"Point"}}"#).expect("valid payload");
        assert_eq!(level.lights.map(|l| l.count), Some(0));
    }

    #[test]
    fn rejects_empty_payload() {
        assert!(parse_level("").is_err());
        assert!(parse_level("  \n").is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_level(r#"{"grid": ["AA""#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse level JSON"));
    }

    #[test]
    fn rejects_missing_or_empty_grid() {
        assert!(parse_level(r#"{"lights":{"count":1,"type":"Point"}}"#).is_err());
        assert!(parse_level(r#"{"grid":[]}"#).is_err());
        assert!(parse_level(r#"{"grid":[""]}"#).is_err());
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_level(r#"{"grid":["AAA","A_","AGA"]}"#).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn iter_walks_row_major() {
        let grid = Grid::from_rows(&["A_", "_G"]).expect("valid grid");
        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(
            cells,
            vec![
                (0, 0, Cell::Wall(WallKind::Absorbing)),
                (0, 1, Cell::Open),
                (1, 0, Cell::Open),
                (1, 1, Cell::Exit),
            ]
        );
    }

    #[test]
    fn first_open_skips_walls() {
        let grid = Grid::from_rows(&["AAA", "AG_"]).expect("valid grid");
        assert_eq!(grid.first_open(), Some((1, 2)));

        let walled = Grid::from_rows(&["AR"]).expect("valid grid");
        assert_eq!(walled.first_open(), None);
    }

    #[test]
    fn is_open_handles_out_of_bounds() {
        let grid = Grid::from_rows(&["__"]).expect("valid grid");
        assert!(grid.is_open(0, 1));
        assert!(!grid.is_open(-1, 0));
        assert!(!grid.is_open(0, 2));
        assert!(!grid.is_open(1, 0));
    }
}
