//! FireBehavior - rises erratically, burns out, extinguishes on water.

use super::{chance, xorshift32, Behavior, UpdateContext};
use crate::domain::cell::CellType;
use crate::domain::color;

/// Per-tick probability of burning out.
const BURNOUT_CHANCE: f32 = 0.03;

/// Chance that a rising flame leaves smoke in its old cell.
const SMOKE_RESIDUE_CHANCE: f32 = 0.2;

const NEIGHBORS_4: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

pub struct FireBehavior;

impl FireBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Adjacent water always wins: the water cell is consumed and the flame
    /// becomes steam. Checked first so the conversion lands within one tick
    /// of contact.
    fn try_extinguish(&self, ctx: &mut UpdateContext, xi: i32, yi: i32) -> bool {
        for (dx, dy) in NEIGHBORS_4 {
            let nx = xi + dx;
            let ny = yi + dy;
            if ctx.grid.get_cell(nx, ny) == CellType::Water {
                ctx.grid.clear_cell(nx, ny);
                ctx.grid.set_cell(xi, yi, CellType::Steam, None);
                ctx.grid.mark_updated(ctx.x, ctx.y);
                return true;
            }
        }
        false
    }
}

impl Behavior for FireBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let xi = ctx.x as i32;
        let yi = ctx.y as i32;

        // SAFETY: the pass only dispatches in-bounds coordinates
        let cell = unsafe { ctx.grid.get_type_unchecked(ctx.x, ctx.y) };
        if cell != CellType::Fire {
            return;
        }

        if self.try_extinguish(ctx, xi, yi) {
            return;
        }

        // Flicker every tick.
        let rand = xorshift32(ctx.rng);
        let flicker = color::jitter(ctx.grid.get_color(xi, yi), rand);
        ctx.grid.set_color(xi, yi, flicker);

        // Burn out: half smoke, half nothing.
        if chance(ctx.rng, BURNOUT_CHANCE) {
            if xorshift32(ctx.rng) & 1 == 0 {
                ctx.grid.set_cell(xi, yi, CellType::Smoke, None);
                ctx.grid.mark_updated(ctx.x, ctx.y);
            } else {
                ctx.grid.clear_cell(xi, yi);
            }
            return;
        }

        // Rise, randomizing the attempt order to avoid straight pillars.
        let side = if rand & 2 == 0 { -1 } else { 1 };
        let attempts = [(0, -1), (side, -1), (-side, -1)];
        for (dx, dy) in attempts {
            let tx = xi + dx;
            let ty = yi + dy;
            if ctx.grid.get_cell(tx, ty) == CellType::Empty {
                ctx.grid.move_cell(xi, yi, tx, ty);
                if chance(ctx.rng, SMOKE_RESIDUE_CHANCE) {
                    ctx.grid.set_cell(xi, yi, CellType::Smoke, None);
                    ctx.grid.mark_updated(ctx.x, ctx.y);
                }
                return;
            }
        }
    }
}
