use bevy_math::Vec3;

use crate::layout::WallPiece;

// ============================================================================
// Box Overlap
// ============================================================================

// Check if two 1D ranges overlap.
#[must_use]
pub fn ranges_overlap_1d(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_max >= b_min && a_min <= b_max
}

// Axis-aligned box overlap, each box given as center and half extents.
#[must_use]
pub fn boxes_overlap(center_a: Vec3, half_a: Vec3, center_b: Vec3, half_b: Vec3) -> bool {
    let (min_a, max_a) = (center_a - half_a, center_a + half_a);
    let (min_b, max_b) = (center_b - half_b, center_b + half_b);

    ranges_overlap_1d(min_a.x, max_a.x, min_b.x, max_b.x)
        && ranges_overlap_1d(min_a.y, max_a.y, min_b.y, max_b.y)
        && ranges_overlap_1d(min_a.z, max_a.z, min_b.z, max_b.z)
}

impl WallPiece {
    // Walls are unit cubes scaled by `scale`, so the half extents are half the scale
    #[must_use]
    pub fn overlaps(&self, center: Vec3, half_extents: Vec3) -> bool {
        boxes_overlap(self.position, self.scale / 2.0, center, half_extents)
    }
}

#[must_use]
pub fn overlaps_any_wall(walls: &[WallPiece], center: Vec3, half_extents: Vec3) -> bool {
    walls.iter().any(|wall| wall.overlaps(center, half_extents))
}

// ============================================================================
// Sliding Movement
// ============================================================================

/// Move a body box by `motion` on the XZ plane without entering any wall. Tries the
/// full move first, then the X-only and Z-only parts, and stays put when all are blocked.
#[must_use]
pub fn slide_body(walls: &[WallPiece], center: Vec3, half_extents: Vec3, motion: Vec3) -> Vec3 {
    let blocked = |candidate: Vec3| overlaps_any_wall(walls, candidate, half_extents);

    // Already stuck inside a wall: let the body move out
    if blocked(center) {
        return center + Vec3::new(motion.x, 0.0, motion.z);
    }

    let diagonal = center + Vec3::new(motion.x, 0.0, motion.z);
    if !blocked(diagonal) {
        return diagonal;
    }

    let x_only = center + Vec3::new(motion.x, 0.0, 0.0);
    let z_only = center + Vec3::new(0.0, 0.0, motion.z);
    if motion.x != 0.0 && !blocked(x_only) {
        x_only
    } else if motion.z != 0.0 && !blocked(z_only) {
        z_only
    } else {
        center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LevelSettings, grid::WallKind, layout::wall_piece};

    const HALF: Vec3 = Vec3::new(0.3, 0.9, 0.3);

    fn wall_at(row: usize, col: usize) -> WallPiece {
        wall_piece(row, col, WallKind::Absorbing, &LevelSettings::default())
    }

    #[test]
    fn ranges_touching_at_an_edge_overlap() {
        assert!(ranges_overlap_1d(0.0, 1.0, 1.0, 2.0));
        assert!(!ranges_overlap_1d(0.0, 1.0, 1.5, 2.0));
    }

    #[test]
    fn wall_box_matches_its_scale() {
        // Pillar at (2, 1, 0) with half thickness 0.125
        let wall = wall_at(0, 1);
        assert!(wall.overlaps(Vec3::new(2.0, 0.9, 0.0), HALF));
        assert!(wall.overlaps(Vec3::new(2.4, 0.9, 0.0), HALF));
        assert!(!wall.overlaps(Vec3::new(2.5, 0.9, 0.0), HALF));
        assert!(!wall.overlaps(Vec3::new(2.0, 3.0, 0.0), HALF));
    }

    #[test]
    fn free_move_is_applied_in_full() {
        let walls = [wall_at(0, 3)];
        let start = Vec3::new(0.0, 0.9, 0.0);
        let end = slide_body(&walls, start, HALF, Vec3::new(0.5, 0.0, 0.5));
        assert_eq!(end, Vec3::new(0.5, 0.9, 0.5));
    }

    #[test]
    fn move_into_wall_is_rejected() {
        let walls = [wall_at(0, 1)];
        let start = Vec3::new(1.4, 0.9, 0.0);
        let end = slide_body(&walls, start, HALF, Vec3::new(0.3, 0.0, 0.0));
        assert_eq!(end, start);
    }

    #[test]
    fn diagonal_move_slides_along_wall() {
        let walls = [wall_at(0, 1)];
        let start = Vec3::new(1.4, 0.9, 0.0);
        let end = slide_body(&walls, start, HALF, Vec3::new(0.3, 0.0, 0.2));
        assert_eq!(end, Vec3::new(1.4, 0.9, 0.2));
    }

    #[test]
    fn vertical_motion_is_ignored() {
        let end = slide_body(&[], Vec3::new(0.0, 0.9, 0.0), HALF, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(end, Vec3::new(0.0, 0.9, 0.0));
    }

    #[test]
    fn body_inside_a_wall_can_leave() {
        let walls = [wall_at(0, 0)];
        let start = Vec3::new(0.0, 0.9, 0.0);
        let end = slide_body(&walls, start, HALF, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(end, Vec3::new(1.0, 0.9, 0.0));
    }
}
