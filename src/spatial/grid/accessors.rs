use crate::domain::color::BG_COLOR;

use super::*;

impl Grid {
    // === Type access ===

    /// Stored type, or `Boundary` for any coordinate outside the grid.
    #[inline]
    pub fn get_cell(&self, x: i32, y: i32) -> CellType {
        if !self.in_bounds(x, y) {
            return CellType::Boundary;
        }
        self.types[self.index(x as u32, y as u32)]
    }

    /// Type access without bounds check.
    ///
    /// # Safety
    /// Caller must guarantee `x < width && y < height`.
    #[inline]
    pub unsafe fn get_type_unchecked(&self, x: u32, y: u32) -> CellType {
        *self.types.get_unchecked(self.index_unchecked(x, y))
    }

    /// Write a cell. No-op outside the grid; `Boundary` is a query sentinel
    /// and is never stored. The provided color wins, else the type default.
    #[inline]
    pub fn set_cell(&mut self, x: i32, y: i32, t: CellType, color: Option<u32>) {
        if !self.in_bounds(x, y) || t == CellType::Boundary {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        self.types[idx] = t;
        self.colors[idx] = if t == CellType::Empty {
            BG_COLOR
        } else {
            color.unwrap_or_else(|| t.default_color())
        };
        if t != CellType::Empty {
            self.active_cell_count = self.active_cell_count.saturating_add(1);
        }
    }

    /// Clear a cell back to empty.
    #[inline]
    pub fn clear_cell(&mut self, x: i32, y: i32) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        self.types[idx] = CellType::Empty;
        self.colors[idx] = BG_COLOR;
    }

    // === Color access ===
    #[inline]
    pub fn get_color(&self, x: i32, y: i32) -> u32 {
        if !self.in_bounds(x, y) {
            return BG_COLOR;
        }
        self.colors[self.index(x as u32, y as u32)]
    }

    #[inline]
    pub fn set_color(&mut self, x: i32, y: i32, c: u32) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        self.colors[idx] = c;
    }

    // === Per-pass move tracking ===
    #[inline]
    pub fn is_updated(&self, x: u32, y: u32) -> bool {
        self.updated[self.index(x, y)] != 0
    }

    #[inline]
    pub fn mark_updated(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.updated[idx] = 1;
    }

    // === Moves ===

    /// Move a cell: read old, write new, clear old. Color travels with the
    /// cell; the destination is flagged so the pass cannot move it twice.
    #[inline]
    pub fn move_cell(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) {
        if !self.in_bounds(from_x, from_y) || !self.in_bounds(to_x, to_y) {
            return;
        }
        let from = self.index(from_x as u32, from_y as u32);
        let to = self.index(to_x as u32, to_y as u32);
        self.types[to] = self.types[from];
        self.colors[to] = self.colors[from];
        self.types[from] = CellType::Empty;
        self.colors[from] = BG_COLOR;
        self.updated[to] = 1;
    }

    /// Swap two cells (density displacement). Both are flagged as moved.
    #[inline]
    pub fn swap_cells(&mut self, ax: i32, ay: i32, bx: i32, by: i32) {
        if !self.in_bounds(ax, ay) || !self.in_bounds(bx, by) {
            return;
        }
        let a = self.index(ax as u32, ay as u32);
        let b = self.index(bx as u32, by as u32);
        self.types.swap(a, b);
        self.colors.swap(a, b);
        self.updated[a] = 1;
        self.updated[b] = 1;
    }

    // === Predicates ===
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.get_cell(x, y) == CellType::Empty
    }

    #[inline]
    pub fn is_boundary(&self, x: i32, y: i32) -> bool {
        self.get_cell(x, y) == CellType::Boundary
    }

    #[inline]
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.get_cell(x, y).is_solid()
    }

    #[inline]
    pub fn is_liquid(&self, x: i32, y: i32) -> bool {
        self.get_cell(x, y).is_liquid()
    }

    #[inline]
    pub fn is_particle(&self, x: i32, y: i32) -> bool {
        self.get_cell(x, y).is_particle()
    }
}
