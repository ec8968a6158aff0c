//! World - the simulation orchestrator.
//!
//! Single responsibility: `World` only sequences the tick and forwards
//! commands; cell rules live in behaviors, spatial bookkeeping in the
//! region grid, ball physics in the ball module. The grid pass and the
//! ball tick are separate so a paused sand simulation can still aim.

use crate::domain::level::LevelData;
use crate::spatial::grid::Grid;
use crate::spatial::regions::RegionGrid;
use crate::systems::ball::{Ball, BallKind, Vec2};
use crate::systems::behaviors::BehaviorRegistry;
use crate::systems::grass::GrassTracker;

#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;

pub use crate::domain::cell::CellType;

/// Default downward gravity, cells/s^2.
pub const DEFAULT_GRAVITY: f64 = 40.0;

/// The simulation world
pub struct World {
    grid: Grid,
    regions: RegionGrid,
    behaviors: BehaviorRegistry,
    grass: GrassTracker,
    ball: Ball,

    // Settings
    gravity: f64,

    // State
    frame: u64,
    rng_state: u32,
    ignition_queue: Vec<(i32, i32)>,
}

impl World {
    /// Create a new world with given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world(width, height)
    }

    /// Same, with an explicit RNG seed for reproducible runs.
    pub fn with_seed(width: u32, height: u32, seed: u32) -> Self {
        init::create_world_seeded(width, height, seed)
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn cell_size(&self) -> f64 {
        self.grid.cell_size()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active_cell_count(&self) -> u32 {
        self.grid.active_cell_count()
    }

    pub fn active_region_count(&self) -> usize {
        self.regions.active_region_count()
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        self.gravity = gravity;
    }

    // === Cell commands ===

    pub fn get_cell(&self, x: i32, y: i32) -> CellType {
        self.grid.get_cell(x, y)
    }

    pub fn get_color(&self, x: i32, y: i32) -> u32 {
        self.grid.get_color(x, y)
    }

    /// Place a cell and wake its region.
    pub fn set_cell(&mut self, x: i32, y: i32, t: CellType, color: Option<u32>) {
        commands::set_cell(self, x, y, t, color)
    }

    pub fn clear_cell(&mut self, x: i32, y: i32) {
        commands::clear_cell(self, x, y)
    }

    /// Fill a circle with a material (brush).
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, t: CellType, color: Option<u32>) {
        commands::draw_circle(self, cx, cy, radius, t, color)
    }

    /// Blast a circular area: inner destructibles ignite, the outer band of
    /// solids shatters to sand.
    pub fn explode(&mut self, cx: i32, cy: i32, radius: i32) {
        commands::explode(self, cx, cy, radius)
    }

    /// Clear all cells and trackers
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Load level geometry from parsed cell specs.
    pub fn load_from_data(&mut self, data: &LevelData) {
        commands::load_from_data(self, data)
    }

    /// Load level geometry from its JSON form.
    pub fn load_level_json(&mut self, json: &str) -> Result<(), String> {
        commands::load_level_json(self, json)
    }

    // === Ball commands ===

    /// Place the ball for a new attempt.
    pub fn reset_ball(&mut self, x: f64, y: f64, kind: BallKind, velocity: Option<(f64, f64)>) {
        let v = velocity.map(|(vx, vy)| Vec2::new(vx, vy));
        self.ball.reset(Vec2::new(x, y), kind, v);
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_position(&self) -> (f64, f64) {
        self.ball.get_position()
    }

    pub fn is_ball_moving(&self) -> bool {
        self.ball.is_moving()
    }

    pub fn can_shoot(&self) -> bool {
        self.ball.can_shoot()
    }

    pub fn is_ball_in_hole(&self) -> bool {
        self.ball.is_in_hole()
    }

    pub fn start_aiming(&mut self, x: f64, y: f64) -> bool {
        self.ball.start_aiming(x, y)
    }

    pub fn update_aim(&mut self, x: f64, y: f64) {
        self.ball.update_aim(x, y)
    }

    pub fn shoot(&mut self) -> bool {
        let cell_size = self.grid.cell_size();
        let fired = self.ball.shoot(cell_size);
        if fired {
            let (x, y) = self.ball.get_position();
            self.regions.activate_cell(x.floor() as i32, y.floor() as i32);
        }
        fired
    }

    pub fn cancel_shot(&mut self) {
        self.ball.cancel_shot()
    }

    // === Tick ===

    /// Step the whole simulation by `dt` seconds: grid pass, then ball.
    pub fn step(&mut self, dt: f64) {
        step::step(self, dt);
    }

    /// Grid pass only.
    pub fn step_grid(&mut self, dt: f64) {
        step::step_grid(self, dt);
    }

    /// Ball physics only.
    pub fn step_ball(&mut self, dt: f64) {
        step::step_ball(self, dt);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
