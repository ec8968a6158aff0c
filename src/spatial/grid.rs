//! Grid - Structure of Arrays (SoA) storage for the cell field.
//!
//! Instead of: Vec<Option<Cell>>  // many allocations, poor cache behavior
//! We have:    types[], colors[], updated[]  // linear memory
//!
//! Out-of-bounds queries return `CellType::Boundary`, which removes bounds
//! checking from the physics code entirely.

use crate::domain::cell::CellType;
use crate::domain::color::BG_COLOR;

mod accessors;
mod brush;
mod indexing;

/// Default screen pixels per cell; read by the ball for aim conversion.
pub const DEFAULT_CELL_SIZE: f64 = 4.0;

/// SoA grid - cell types and colors in separate contiguous arrays.
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    cell_size: f64,

    pub types: Vec<CellType>,
    /// ABGR packed colors, independent of type so shades travel with moves.
    pub colors: Vec<u32>,
    /// 0 = untouched this pass, 1 = already moved/transformed this pass.
    /// This is what makes in-place mutation safe for rising materials.
    pub updated: Vec<u8>,

    /// Advisory counter: bumped on every non-Empty `set_cell` write, never
    /// decremented by moves. Matches the source's approximate semantics; it
    /// is a diagnostic, not a live census.
    active_cell_count: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_cell_size(width, height, DEFAULT_CELL_SIZE)
    }

    pub fn with_cell_size(width: u32, height: u32, cell_size: f64) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            size,
            cell_size,
            types: vec![CellType::Empty; size],
            colors: vec![BG_COLOR; size],
            updated: vec![0; size],
            active_cell_count: 0,
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    #[inline]
    pub fn active_cell_count(&self) -> u32 {
        self.active_cell_count
    }

    /// Reset the per-pass move flags. Called once at the top of each grid pass.
    pub fn reset_updated(&mut self) {
        self.updated.fill(0);
    }

    /// Wipe every cell back to empty.
    pub fn clear(&mut self) {
        self.types.fill(CellType::Empty);
        self.colors.fill(BG_COLOR);
        self.updated.fill(0);
        self.active_cell_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(8, 8);
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 8);
        assert_eq!(grid.size(), 64);
        assert_eq!(grid.active_cell_count(), 0);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(grid.get_cell(x, y), CellType::Empty);
            }
        }
    }

    #[test]
    fn out_of_bounds_is_boundary() {
        let grid = Grid::new(8, 8);
        assert_eq!(grid.get_cell(-1, 0), CellType::Boundary);
        assert_eq!(grid.get_cell(0, -1), CellType::Boundary);
        assert_eq!(grid.get_cell(8, 0), CellType::Boundary);
        assert_eq!(grid.get_cell(0, 8), CellType::Boundary);
        assert_eq!(grid.get_cell(i32::MIN, i32::MAX), CellType::Boundary);
    }

    #[test]
    fn set_cell_uses_default_color_when_omitted() {
        let mut grid = Grid::new(8, 8);
        grid.set_cell(2, 3, CellType::Sand, None);
        assert_eq!(grid.get_cell(2, 3), CellType::Sand);
        assert_eq!(grid.get_color(2, 3), CellType::Sand.default_color());
    }

    #[test]
    fn set_cell_out_of_bounds_is_a_noop() {
        let mut grid = Grid::new(8, 8);
        grid.set_cell(-1, 0, CellType::Stone, None);
        grid.set_cell(0, 99, CellType::Stone, None);
        assert_eq!(grid.active_cell_count(), 0);
    }

    #[test]
    fn boundary_is_never_stored() {
        let mut grid = Grid::new(8, 8);
        grid.set_cell(1, 1, CellType::Boundary, None);
        assert_eq!(grid.get_cell(1, 1), CellType::Empty);
    }

    #[test]
    fn move_preserves_color() {
        let mut grid = Grid::new(8, 8);
        let shade = crate::domain::color::pack(1, 2, 3, 255);
        grid.set_cell(4, 4, CellType::Sand, Some(shade));
        grid.move_cell(4, 4, 4, 5);
        assert_eq!(grid.get_cell(4, 4), CellType::Empty);
        assert_eq!(grid.get_cell(4, 5), CellType::Sand);
        assert_eq!(grid.get_color(4, 5), shade);
    }

    #[test]
    fn swap_exchanges_type_and_color() {
        let mut grid = Grid::new(8, 8);
        grid.set_cell(1, 1, CellType::Sand, None);
        grid.set_cell(1, 2, CellType::Water, None);
        grid.swap_cells(1, 1, 1, 2);
        assert_eq!(grid.get_cell(1, 1), CellType::Water);
        assert_eq!(grid.get_cell(1, 2), CellType::Sand);
        assert_eq!(grid.get_color(1, 2), CellType::Sand.default_color());
    }

    #[test]
    fn active_cell_count_is_monotonic_under_writes() {
        let mut grid = Grid::new(8, 8);
        grid.set_cell(0, 0, CellType::Stone, None);
        grid.set_cell(0, 0, CellType::Stone, None);
        assert_eq!(grid.active_cell_count(), 2);
        grid.set_cell(0, 1, CellType::Empty, None);
        assert_eq!(grid.active_cell_count(), 2);
    }
}
