// Actor-versus-grid collision

use glam::IVec2;

use crate::core::clamp_index;
use crate::game::map::{PassabilityGrid, CELL_SIZE};

/// Actor hitbox side in pixels (2x2 cells)
pub const HITBOX_SIZE: i32 = 16;

/// Shifts the sampled rows down to line the hitbox up with the sprite's feet
pub const HITBOX_Y_OFFSET: i32 = 3;

/// Cell span between the first and last sampled row/column
const HITBOX_CELL_SPAN: i32 = HITBOX_SIZE / CELL_SIZE;

/// Grid cells sampled for an actor at a given position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitboxCells {
    pub start_row: usize,
    pub end_row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl HitboxCells {
    /// Cells for an actor anchored at `pos`, clamped into the grid
    ///
    /// Returns `None` for an empty grid.
    pub fn at(pos: IVec2, grid: &PassabilityGrid) -> Option<Self> {
        if grid.is_empty() {
            return None;
        }

        let start_row = clamp_index((pos.y + HITBOX_Y_OFFSET).div_euclid(CELL_SIZE) - 1, grid.rows());
        let end_row = clamp_index(start_row as i32 + HITBOX_CELL_SPAN, grid.rows());
        let start_col = clamp_index(pos.x.div_euclid(CELL_SIZE) - 1, grid.cols());
        let end_col = clamp_index(start_col as i32 + HITBOX_CELL_SPAN, grid.cols());

        Some(Self {
            start_row,
            end_row,
            start_col,
            end_col,
        })
    }

    /// The four sampled corners as (row, col)
    pub fn corners(&self) -> [(usize, usize); 4] {
        [
            (self.start_row, self.start_col),
            (self.start_row, self.end_col),
            (self.end_row, self.start_col),
            (self.end_row, self.end_col),
        ]
    }
}

/// Whether an actor at `pos` overlaps a blocking cell
///
/// Only the four corner cells of the hitbox are sampled, so a one-cell-wide
/// wall between them is not seen.
pub fn collides(pos: IVec2, grid: &PassabilityGrid) -> bool {
    HitboxCells::at(pos, grid)
        .map(|cells| {
            cells
                .corners()
                .iter()
                .any(|&(row, col)| grid.is_blocking(row, col))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_grid_never_collides() {
        let grid = PassabilityGrid::open(2, 2);
        assert!(!collides(IVec2::new(16, 16), &grid));
    }

    #[test]
    fn test_bottom_right_corner_collides() {
        let mut grid = PassabilityGrid::open(2, 2);
        grid.set_blocking(1, 1, true);

        // Everything clamps into the 2x2 grid, so end row/col land on (1, 1)
        let cells = HitboxCells::at(IVec2::new(16, 16), &grid).unwrap();
        assert_eq!((cells.end_row, cells.end_col), (1, 1));
        assert!(collides(IVec2::new(16, 16), &grid));
    }

    #[test]
    fn test_cell_computation() {
        let grid = PassabilityGrid::open(20, 20);
        let cells = HitboxCells::at(IVec2::new(40, 37), &grid).unwrap();

        // (37 + 3) / 8 - 1 = 4, 40 / 8 - 1 = 4
        assert_eq!(
            cells,
            HitboxCells {
                start_row: 4,
                end_row: 6,
                start_col: 4,
                end_col: 6
            }
        );
    }

    #[test]
    fn test_negative_positions_clamp_to_origin() {
        let mut grid = PassabilityGrid::open(10, 10);
        grid.set_blocking(0, 0, true);
        assert!(collides(IVec2::new(-50, -50), &grid));
    }

    #[test]
    fn test_far_positions_clamp_to_edge() {
        let mut grid = PassabilityGrid::open(10, 10);
        grid.set_blocking(9, 9, true);
        assert!(collides(IVec2::new(10_000, 10_000), &grid));
    }

    #[test]
    fn test_moving_off_wall_flips_result() {
        let mut grid = PassabilityGrid::open(20, 20);
        // Column of wall at col 10
        for row in 0..20 {
            grid.set_blocking(row, 10, true);
        }

        // x = 72: start_col 8, end_col 10 -> touches the wall
        assert!(collides(IVec2::new(72, 80), &grid));
        // x = 71: start_col 7, end_col 9 -> clear
        assert!(!collides(IVec2::new(71, 80), &grid));
    }

    #[test]
    fn test_y_offset_shifts_rows() {
        let mut grid = PassabilityGrid::open(20, 20);
        for col in 0..20 {
            grid.set_blocking(8, col, true);
        }

        // y = 45: (45 + 3) / 8 - 1 = 5, end row 7 -> clear
        assert!(!collides(IVec2::new(80, 45), &grid));
        // y = 53: (53 + 3) / 8 - 1 = 6, end row 8 -> blocked
        assert!(collides(IVec2::new(80, 53), &grid));
    }

    #[test]
    fn test_thin_wall_between_corners_is_missed() {
        let mut grid = PassabilityGrid::open(20, 20);
        // Single blocking cell in the middle of the sampled block
        grid.set_blocking(5, 5, true);
        assert!(!collides(IVec2::new(40, 37), &grid));
    }

    #[test]
    fn test_empty_grid() {
        let grid = PassabilityGrid::default();
        assert!(HitboxCells::at(IVec2::ZERO, &grid).is_none());
        assert!(!collides(IVec2::ZERO, &grid));
    }

    #[test]
    fn test_deterministic() {
        let mut grid = PassabilityGrid::open(6, 6);
        grid.set_blocking(2, 3, true);
        let pos = IVec2::new(20, 12);
        let first = collides(pos, &grid);
        for _ in 0..10 {
            assert_eq!(collides(pos, &grid), first);
        }
    }
}
