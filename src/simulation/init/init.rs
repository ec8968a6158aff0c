//! World construction.

use super::{World, DEFAULT_GRAVITY};
use crate::spatial::grid::Grid;
use crate::spatial::regions::RegionGrid;
use crate::systems::ball::{Ball, Vec2, DEFAULT_RADIUS};
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::grass::GrassTracker;

const DEFAULT_SEED: u32 = 12345;

pub(super) fn create_world(width: u32, height: u32) -> World {
    create_world_seeded(width, height, DEFAULT_SEED)
}

pub(super) fn create_world_seeded(width: u32, height: u32, seed: u32) -> World {
    log::info!("creating {width}x{height} world, seed {seed}");
    World {
        grid: Grid::new(width, height),
        regions: RegionGrid::new(width, height),
        behaviors: BehaviorRegistry::new(),
        grass: GrassTracker::new(),
        ball: Ball::new(
            Vec2::new(width as f64 / 2.0, height as f64 / 2.0),
            DEFAULT_RADIUS,
        ),
        gravity: DEFAULT_GRAVITY,
        frame: 0,
        // Xorshift cannot run from a zero state.
        rng_state: if seed == 0 { DEFAULT_SEED } else { seed },
        ignition_queue: Vec::new(),
    }
}
