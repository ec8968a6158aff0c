//! Ball - the single physics-driven entity colliding with the cell grid.
//!
//! The ball integrates gravity and drag each tick, resolves axis-separated
//! collisions against solid cells, and reacts to the material it sits in:
//! sand damps it, water makes it buoyant and can swallow it outright.

mod aim;
mod collision;
mod vec2;

pub use aim::AimState;
pub use vec2::Vec2;

use crate::domain::cell::CellType;
use crate::spatial::grid::Grid;
use crate::systems::behaviors::xorshift32;

// === Tunables ===
pub const DEFAULT_RADIUS: f64 = 0.5;
pub const MAX_VELOCITY: f64 = 60.0;
pub const REST_THRESHOLD: f64 = 0.6;
pub const POWER_MULTIPLIER: f64 = 1.5;
pub const DEFAULT_BOUNCE: f64 = 0.7;
pub const WATER_GRAVITY_MODIFIER: f64 = 0.3;
/// Below this speed a ball in water starts sinking.
pub const SINK_SPEED_THRESHOLD: f64 = 3.0;
/// Seconds of sinking before the ball deactivates.
pub const SINK_DURATION: f64 = 3.0;
/// Impact force (speed * 0.5) above which sand craters form.
pub const IMPACT_CRATER_THRESHOLD: f64 = 3.0;

const FRICTION_AIR: f64 = 0.999;
const FRICTION_WATER: f64 = 0.95;
const FRICTION_SAND: f64 = 0.85;

/// Cosmetic jitter amplitude at the start of a sink, in cells.
const SINK_JITTER: f64 = 0.05;

/// Ball lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BallPhase {
    /// Idle or in flight; fully simulated.
    Free,
    /// Player is dragging a shot; physics paused.
    Aiming,
    /// Slowly submerging in water; terminal after `SINK_DURATION`.
    Sinking,
    /// Reached the hole; terminal.
    InHole,
}

/// Ball variants: the `type` argument the level hands to `reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BallKind {
    #[default]
    Standard,
    Heavy,
    Feather,
}

impl BallKind {
    #[inline]
    pub fn gravity_scale(self) -> f64 {
        match self {
            BallKind::Standard => 1.0,
            BallKind::Heavy => 1.35,
            BallKind::Feather => 0.75,
        }
    }

    /// Bounce used when the contacted material has no table entry.
    #[inline]
    pub fn default_bounce(self) -> f64 {
        match self {
            BallKind::Standard => DEFAULT_BOUNCE,
            BallKind::Heavy => 0.55,
            BallKind::Feather => 0.8,
        }
    }
}

pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f64,
    pub radius: f64,
    pub kind: BallKind,

    phase: BallPhase,
    active: bool,
    aim: AimState,

    // Material flags derived from the cell under the ball each tick.
    in_sand: bool,
    in_water: bool,
    sink_timer: f64,
    /// Latch: one sand depression per stop.
    crater_created: bool,
}

impl Ball {
    pub fn new(position: Vec2, radius: f64) -> Self {
        Self {
            position,
            velocity: Vec2::zero(),
            rotation: 0.0,
            radius,
            kind: BallKind::Standard,
            phase: BallPhase::Free,
            active: true,
            aim: AimState::default(),
            in_sand: false,
            in_water: false,
            sink_timer: 0.0,
            crater_created: false,
        }
    }

    /// Re-spawn for a new attempt: position, variant, optional initial
    /// velocity. Clears every transient state.
    pub fn reset(&mut self, position: Vec2, kind: BallKind, velocity: Option<Vec2>) {
        self.position = position;
        self.velocity = velocity.unwrap_or_else(Vec2::zero);
        self.rotation = 0.0;
        self.kind = kind;
        self.phase = BallPhase::Free;
        self.active = true;
        self.aim = AimState::default();
        self.in_sand = false;
        self.in_water = false;
        self.sink_timer = 0.0;
        self.crater_created = false;
    }

    // === Predicates for the input/UI layers ===

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn phase(&self) -> BallPhase {
        self.phase
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.active && self.velocity.length_squared() > 1e-6
    }

    #[inline]
    pub fn can_shoot(&self) -> bool {
        self.active && self.phase == BallPhase::Free
    }

    #[inline]
    pub fn is_in_hole(&self) -> bool {
        self.phase == BallPhase::InHole
    }

    #[inline]
    pub fn is_sinking(&self) -> bool {
        self.phase == BallPhase::Sinking
    }

    #[inline]
    pub fn get_position(&self) -> (f64, f64) {
        (self.position.x, self.position.y)
    }

    /// Grid cell under the ball center.
    #[inline]
    fn cell_coords(&self) -> (i32, i32) {
        (self.position.x.floor() as i32, self.position.y.floor() as i32)
    }

    /// One physics tick. Skipped entirely while aiming or terminal.
    pub fn update(&mut self, grid: &mut Grid, gravity: f64, dt: f64, rng: &mut u32) {
        if !self.active || self.phase == BallPhase::Aiming || self.phase == BallPhase::InHole {
            return;
        }

        let (cx, cy) = self.cell_coords();
        let cell = grid.get_cell(cx, cy);
        self.in_sand = cell == CellType::Sand;
        self.in_water = cell == CellType::Water;

        if self.phase == BallPhase::Sinking {
            self.advance_sink(dt, rng);
            return;
        }

        if self.in_water && self.velocity.length() < SINK_SPEED_THRESHOLD {
            log::debug!("ball sinking at ({:.1}, {:.1})", self.position.x, self.position.y);
            self.phase = BallPhase::Sinking;
            self.sink_timer = 0.0;
            return;
        }

        // Gravity, buoyancy-reduced in water.
        let gravity_modifier = if self.in_water { WATER_GRAVITY_MODIFIER } else { 1.0 };
        self.velocity.y += gravity * self.kind.gravity_scale() * gravity_modifier * dt;
        self.velocity = self.velocity.clamp_length(MAX_VELOCITY);

        let old_pos = self.position;
        self.position += self.velocity * dt;
        self.rotation += self.velocity.x * dt / self.radius;

        collision::resolve(self, grid, old_pos, dt, rng);

        let friction = if self.in_sand {
            FRICTION_SAND
        } else if self.in_water {
            FRICTION_WATER
        } else {
            FRICTION_AIR
        };
        self.velocity = self.velocity * friction;

        let speed = self.velocity.length();
        if speed < REST_THRESHOLD {
            // Only settle with solid support underneath; zeroing in free
            // fall would leave a slow ball hanging mid-air.
            if collision::supported(self, grid) {
                self.velocity = Vec2::zero();
                if self.in_sand && !self.crater_created {
                    self.crater_created = true;
                    log::debug!("ball resting in sand at ({cx}, {cy}), marking depression");
                    grid.clear_cell(cx, cy + 1);
                }
            }
        } else if speed > REST_THRESHOLD * 2.0 {
            // Moving again: re-arm the crater latch for the next stop.
            self.crater_created = false;
        }

        let (nx, ny) = self.cell_coords();
        if grid.get_cell(nx, ny) == CellType::Hole {
            log::info!("ball in hole at ({nx}, {ny})");
            self.phase = BallPhase::InHole;
            self.velocity = Vec2::zero();
        }
    }

    /// Cosmetic wobble while submerging; deactivates when the timer runs out.
    fn advance_sink(&mut self, dt: f64, rng: &mut u32) {
        self.sink_timer += dt;
        if self.sink_timer >= SINK_DURATION {
            log::info!("ball sank at ({:.1}, {:.1})", self.position.x, self.position.y);
            self.active = false;
            return;
        }
        let progress = self.sink_timer / SINK_DURATION;
        let amplitude = SINK_JITTER * (1.0 - progress);
        let jx = (xorshift32(rng) as f64 / u32::MAX as f64 - 0.5) * 2.0 * amplitude;
        let jy = (xorshift32(rng) as f64 / u32::MAX as f64 - 0.5) * 2.0 * amplitude;
        self.position += Vec2::new(jx, jy * 0.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ball_is_free_and_active() {
        let ball = Ball::new(Vec2::new(5.0, 5.0), DEFAULT_RADIUS);
        assert!(ball.is_active());
        assert!(ball.can_shoot());
        assert!(!ball.is_moving());
        assert!(!ball.is_in_hole());
    }

    #[test]
    fn reset_clears_transient_state() {
        let mut ball = Ball::new(Vec2::new(5.0, 5.0), DEFAULT_RADIUS);
        ball.phase = BallPhase::Sinking;
        ball.sink_timer = 2.0;
        ball.active = false;
        ball.reset(Vec2::new(1.0, 1.0), BallKind::Heavy, Some(Vec2::new(3.0, 0.0)));
        assert!(ball.is_active());
        assert_eq!(ball.phase(), BallPhase::Free);
        assert_eq!(ball.kind, BallKind::Heavy);
        assert_eq!(ball.velocity, Vec2::new(3.0, 0.0));
        assert_eq!(ball.sink_timer, 0.0);
    }

    #[test]
    fn ball_in_hole_stops_updating() {
        let mut grid = Grid::new(16, 16);
        grid.set_cell(5, 10, CellType::Hole, None);
        let mut ball = Ball::new(Vec2::new(5.5, 10.5), DEFAULT_RADIUS);
        let mut rng = 1u32;
        ball.update(&mut grid, 40.0, 1.0 / 60.0, &mut rng);
        assert!(ball.is_in_hole());
        let pos = ball.position;
        for _ in 0..120 {
            ball.update(&mut grid, 40.0, 1.0 / 60.0, &mut rng);
        }
        assert_eq!(ball.position, pos);
        assert!(!ball.can_shoot());
    }

    #[test]
    fn slow_ball_in_water_sinks_then_deactivates() {
        let mut grid = Grid::new(16, 16);
        grid.draw_circle(5, 10, 3, CellType::Water, None);
        let mut ball = Ball::new(Vec2::new(5.5, 10.5), DEFAULT_RADIUS);
        let mut rng = 1u32;
        ball.update(&mut grid, 40.0, 1.0 / 60.0, &mut rng);
        assert!(ball.is_sinking());
        assert!(!ball.can_shoot());
        let dt = 1.0 / 60.0;
        for _ in 0..((SINK_DURATION / dt) as usize + 5) {
            ball.update(&mut grid, 40.0, dt, &mut rng);
        }
        assert!(!ball.is_active());
    }

    #[test]
    fn fast_ball_in_water_keeps_flying() {
        let mut grid = Grid::new(32, 32);
        grid.draw_circle(16, 16, 4, CellType::Water, None);
        let mut ball = Ball::new(Vec2::new(16.5, 16.5), DEFAULT_RADIUS);
        ball.velocity = Vec2::new(10.0, 0.0);
        let mut rng = 1u32;
        ball.update(&mut grid, 40.0, 1.0 / 60.0, &mut rng);
        assert!(!ball.is_sinking());
        assert!(ball.is_moving());
    }

    #[test]
    fn heavy_kind_falls_faster() {
        assert!(BallKind::Heavy.gravity_scale() > BallKind::Standard.gravity_scale());
        assert!(BallKind::Feather.gravity_scale() < BallKind::Standard.gravity_scale());
    }
}
