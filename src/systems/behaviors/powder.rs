//! PowderBehavior - granular particles (sand, gravel, ash).
//!
//! Falls straight down, sinks through lighter liquids, otherwise rolls
//! diagonally when blocked below.

use super::{xorshift32, Behavior, UpdateContext};
use crate::domain::cell::CellType;

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }

    /// "Corner cutting" guard for diagonal moves.
    ///
    /// A 1-cell-thick diagonal wall is not watertight unless particles are
    /// stopped from slipping through a corner formed by two solids touching
    /// diagonally. The diagonal (dx, +1) is blocked when BOTH orthogonal
    /// side cells are solid.
    #[inline]
    fn corner_blocked(&self, ctx: &UpdateContext, xi: i32, yi: i32, dx: i32) -> bool {
        ctx.grid.get_cell(xi + dx, yi).is_solid() && ctx.grid.get_cell(xi, yi + 1).is_solid()
    }

    #[inline]
    fn diagonal_open(&self, ctx: &UpdateContext, xi: i32, yi: i32, dx: i32) -> bool {
        ctx.grid.get_cell(xi + dx, yi + 1) == CellType::Empty
            && !self.corner_blocked(ctx, xi, yi, dx)
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let xi = ctx.x as i32;
        let yi = ctx.y as i32;

        // SAFETY: the pass only dispatches in-bounds coordinates
        let cell = unsafe { ctx.grid.get_type_unchecked(ctx.x, ctx.y) };
        if cell == CellType::Empty {
            return;
        }
        let my_density = cell.density();

        // 1. Fall straight down.
        let below = ctx.grid.get_cell(xi, yi + 1);
        if below == CellType::Empty {
            ctx.grid.move_cell(xi, yi, xi, yi + 1);
            return;
        }

        // 2. Sink through a lighter liquid: swap so the liquid rises into
        //    the particle's old cell. Checked before diagonals so a particle
        //    directly above liquid always displaces it.
        if below.is_liquid() && my_density > below.density() {
            ctx.grid.swap_cells(xi, yi, xi, yi + 1);
            return;
        }

        // 3. Roll diagonally. Uniform random tie-break when both sides open.
        let left_open = self.diagonal_open(ctx, xi, yi, -1);
        let right_open = self.diagonal_open(ctx, xi, yi, 1);
        let dx = match (left_open, right_open) {
            (true, true) => {
                if xorshift32(ctx.rng) & 1 == 0 {
                    -1
                } else {
                    1
                }
            }
            (true, false) => -1,
            (false, true) => 1,
            (false, false) => return,
        };
        ctx.grid.move_cell(xi, yi, xi + dx, yi + 1);
    }
}
