//! GasBehavior - steam and smoke.
//!
//! Gases are "inverted powders": rise straight up, then diagonally, then
//! spread sideways. Alpha fades every tick; a faded or dissipated cell
//! clears itself.

use super::{chance, random_dir_pair, Behavior, UpdateContext};
use crate::domain::cell::CellType;
use crate::domain::color;

/// Per-tick dissipation probabilities.
const STEAM_DISSIPATE_CHANCE: f32 = 0.02;
const SMOKE_DISSIPATE_CHANCE: f32 = 0.015;

/// Alpha fade per tick, and the floor below which the cell clears.
const ALPHA_DECAY: u8 = 2;
const ALPHA_FLOOR: u8 = 40;

pub struct GasBehavior;

impl GasBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let xi = ctx.x as i32;
        let yi = ctx.y as i32;

        // SAFETY: the pass only dispatches in-bounds coordinates
        let cell = unsafe { ctx.grid.get_type_unchecked(ctx.x, ctx.y) };
        let dissipate = match cell {
            CellType::Steam => STEAM_DISSIPATE_CHANCE,
            CellType::Smoke => SMOKE_DISSIPATE_CHANCE,
            _ => return,
        };

        if chance(ctx.rng, dissipate) {
            ctx.grid.clear_cell(xi, yi);
            return;
        }

        // Fade toward transparent; clear once below the floor.
        let c = ctx.grid.get_color(xi, yi);
        let a = color::alpha(c).saturating_sub(ALPHA_DECAY);
        if a < ALPHA_FLOOR {
            ctx.grid.clear_cell(xi, yi);
            return;
        }
        ctx.grid.set_color(xi, yi, color::with_alpha(c, a));

        // Rise straight up.
        if ctx.grid.get_cell(xi, yi - 1) == CellType::Empty {
            ctx.grid.move_cell(xi, yi, xi, yi - 1);
            return;
        }

        // Diagonal-up, then sideways, random side first.
        let (first, second) = random_dir_pair(ctx.rng);
        for dx in [first, second] {
            if ctx.grid.get_cell(xi + dx, yi - 1) == CellType::Empty {
                ctx.grid.move_cell(xi, yi, xi + dx, yi - 1);
                return;
            }
        }
        for dx in [first, second] {
            if ctx.grid.get_cell(xi + dx, yi) == CellType::Empty {
                ctx.grid.move_cell(xi, yi, xi + dx, yi);
                return;
            }
        }
    }
}
