//! LiquidBehavior - water, oil, lava.
//!
//! Philosophy:
//! - No mass, no pressure formulas - just discrete cell movement
//! - Liquids scan outward 1..=4 cells in a random preferred direction,
//!   stop at the first obstacle, and move to the farthest reachable empty
//!   cell in that run (the randomized-distance flow model; the fixed 3-cell
//!   variant was dropped, see DESIGN.md)
//! - Denser liquid directly above a lighter one swaps (sinks)
//! - Lava ignites flammable neighbors via the deferred ignition queue

use super::{chance, rand_range, random_dir_pair, Behavior, UpdateContext};
use crate::domain::cell::CellType;

/// Maximum horizontal flow distance per tick.
const FLOW_DISTANCE_MAX: u32 = 4;

/// Per-tick probability that lava ignites one flammable neighbor.
const LAVA_IGNITE_CHANCE: f32 = 0.05;

const NEIGHBORS_4: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Walk outward from (xi, yi) along `dir`, through empty cells only,
    /// stopping at the first obstacle. Returns the farthest empty x reached
    /// within `dist` cells, if any.
    #[inline]
    fn scan_run(&self, ctx: &UpdateContext, xi: i32, yi: i32, dir: i32, dist: i32) -> Option<i32> {
        let mut farthest = None;
        for i in 1..=dist {
            let tx = xi + dir * i;
            if ctx.grid.get_cell(tx, yi) != CellType::Empty {
                break;
            }
            farthest = Some(tx);
        }
        farthest
    }

    fn queue_ignitions(&self, ctx: &mut UpdateContext, xi: i32, yi: i32) {
        for (dx, dy) in NEIGHBORS_4 {
            let nx = xi + dx;
            let ny = yi + dy;
            if ctx.grid.get_cell(nx, ny).is_flammable() && chance(ctx.rng, LAVA_IGNITE_CHANCE) {
                ctx.ignitions.push((nx, ny));
            }
        }
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let xi = ctx.x as i32;
        let yi = ctx.y as i32;

        // SAFETY: the pass only dispatches in-bounds coordinates
        let cell = unsafe { ctx.grid.get_type_unchecked(ctx.x, ctx.y) };
        if cell == CellType::Empty {
            return;
        }
        let my_density = cell.density();

        // Lava scorches neighbors whether or not it moves this tick.
        // Conversions are queued and applied after the sweep so a cell ahead
        // of the cursor is never rewritten mid-scan.
        if cell == CellType::Lava {
            self.queue_ignitions(ctx, xi, yi);
        }

        // 1. Fall straight down.
        let below = ctx.grid.get_cell(xi, yi + 1);
        if below == CellType::Empty {
            ctx.grid.move_cell(xi, yi, xi, yi + 1);
            return;
        }

        // 2. Sink below a lighter liquid.
        if below.is_liquid() && my_density > below.density() {
            ctx.grid.swap_cells(xi, yi, xi, yi + 1);
            return;
        }

        // 3. Horizontal flow: random preferred side, random distance.
        let (first, second) = random_dir_pair(ctx.rng);
        let dist = rand_range(ctx.rng, FLOW_DISTANCE_MAX);
        if let Some(tx) = self.scan_run(ctx, xi, yi, first, dist) {
            ctx.grid.move_cell(xi, yi, tx, yi);
            return;
        }
        if let Some(tx) = self.scan_run(ctx, xi, yi, second, dist) {
            ctx.grid.move_cell(xi, yi, tx, yi);
            return;
        }

        // 4. Blocked both ways: try diagonal-down.
        for dx in [first, second] {
            if ctx.grid.get_cell(xi + dx, yi + 1) == CellType::Empty {
                ctx.grid.move_cell(xi, yi, xi + dx, yi + 1);
                return;
            }
        }
    }
}
