//! The simulation tick.
//!
//! Cell pass order matters: bottom-to-top so falling material lands before
//! the row above is visited, horizontal direction alternating by row parity
//! so flow shows no left/right bias. The `updated` flags keep rising cells
//! (fire, gas) from being re-processed by rows visited later in the same
//! pass.

use super::World;
use crate::domain::cell::CellType;
use crate::spatial::regions::REGION_REFRESH_INTERVAL;
use crate::systems::behaviors::UpdateContext;

pub(super) fn step(world: &mut World, dt: f64) {
    step_grid(world, dt);
    step_ball(world, dt);
}

pub(super) fn step_grid(world: &mut World, dt: f64) {
    if world.frame % REGION_REFRESH_INTERVAL == 0 {
        world.regions.refresh(&world.grid);
        world.grass.rescan(&world.grid);
    }
    world.grass.advance(&mut world.grid, dt);
    world.grid.reset_updated();

    let height = world.grid.height();
    let width = world.grid.width();

    // Split borrows: the context needs the grid mutably while the registry
    // and region grid are read alongside it.
    let World {
        grid,
        regions,
        behaviors,
        frame,
        rng_state,
        ignition_queue,
        ..
    } = world;
    let frame = *frame;

    for y in (0..height).rev() {
        let go_right = (frame + y as u64) & 1 == 0;
        if go_right {
            for x in 0..width {
                if regions.is_active_cell(x, y) {
                    process_cell(grid, behaviors, frame, rng_state, ignition_queue, x, y);
                }
            }
        } else {
            for x in (0..width).rev() {
                if regions.is_active_cell(x, y) {
                    process_cell(grid, behaviors, frame, rng_state, ignition_queue, x, y);
                }
            }
        }
    }

    apply_ignitions(world);
    world.frame += 1;
}

pub(super) fn step_ball(world: &mut World, dt: f64) {
    world
        .ball
        .update(&mut world.grid, world.gravity, dt, &mut world.rng_state);
    // The ball disturbs cells wherever it is; keep its blocks simulating.
    if world.ball.is_active() {
        let (x, y) = world.ball.get_position();
        world.regions.activate_cell(x.floor() as i32, y.floor() as i32);
    }
}

#[inline]
fn process_cell(
    grid: &mut crate::spatial::grid::Grid,
    behaviors: &crate::systems::behaviors::BehaviorRegistry,
    frame: u64,
    rng: &mut u32,
    ignitions: &mut Vec<(i32, i32)>,
    x: u32,
    y: u32,
) {
    // SAFETY: x < width and y < height by the loop bounds
    let cell = unsafe { grid.get_type_unchecked(x, y) };
    if !cell.is_dynamic() || grid.is_updated(x, y) {
        return;
    }
    let mut ctx = UpdateContext {
        grid,
        x,
        y,
        frame,
        rng,
        ignitions,
    };
    behaviors.update(cell, &mut ctx);
}

/// Conversions deferred by behaviors (lava igniting neighbors) land after
/// the sweep so no cell is rewritten ahead of the cursor.
fn apply_ignitions(world: &mut World) {
    if world.ignition_queue.is_empty() {
        return;
    }
    let queue = std::mem::take(&mut world.ignition_queue);
    for (x, y) in queue {
        if world.grid.get_cell(x, y).is_flammable() {
            world.grid.set_cell(x, y, CellType::Fire, None);
            world.regions.activate_cell(x, y);
        }
    }
}
