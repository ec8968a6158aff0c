//! Collision resolution against the cell grid.
//!
//! Axes resolve independently: the leading edge of the ball probes the cell
//! it is entering, and a blocking cell pushes the ball back flush against
//! the cell face and reflects that velocity component. With velocity capped
//! at `MAX_VELOCITY` and a 60 Hz tick the ball never crosses more than one
//! cell per axis per tick, so a single probe cannot tunnel.

use super::{Ball, BallKind, Vec2, DEFAULT_BOUNCE, IMPACT_CRATER_THRESHOLD};
use crate::domain::cell::CellType;
use crate::spatial::grid::Grid;
use crate::systems::behaviors::chance;

/// Velocity retained each tick while the ball center sits in liquid.
const LIQUID_DAMPING: f64 = 0.95;
/// Upward acceleration in liquid, cells/s^2.
const BUOYANCY: f64 = 2.0;

/// Chance that a crater impact ejects each side neighbor.
const CRATER_SPREAD_CHANCE: f32 = 0.5;

/// Cells the ball cannot pass through. Liquids and gases never block.
#[inline]
fn blocks(cell: CellType) -> bool {
    cell.is_solid() || cell.is_particle() || cell.is_boundary()
}

/// Restitution for a contacted material; materials without an entry fall
/// back to the ball variant's own bounce.
fn bounce_factor(kind: BallKind, cell: CellType) -> f64 {
    match cell {
        CellType::Stone | CellType::Metal => 0.8,
        CellType::Dirt | CellType::Grass | CellType::Mud => 0.5,
        CellType::Boundary => DEFAULT_BOUNCE,
        _ => kind.default_bounce(),
    }
}

pub(super) fn resolve(ball: &mut Ball, grid: &mut Grid, old_pos: Vec2, dt: f64, rng: &mut u32) {
    resolve_x(ball, grid, old_pos);
    resolve_y(ball, grid, rng);

    // Liquids slow the ball down and push it upward instead of blocking.
    let cx = ball.position.x.floor() as i32;
    let cy = ball.position.y.floor() as i32;
    if grid.is_liquid(cx, cy) {
        ball.velocity = ball.velocity * LIQUID_DAMPING;
        ball.velocity.y -= BUOYANCY * dt;
    }

    clamp_to_world(ball, grid);
}

/// Solid footing directly under the ball. Resting velocity is only zeroed
/// when this holds, otherwise a slow ball would hang in the air.
pub(super) fn supported(ball: &Ball, grid: &Grid) -> bool {
    let x = ball.position.x.floor() as i32;
    let y = (ball.position.y + ball.radius + 0.1).floor() as i32;
    blocks(grid.get_cell(x, y))
}

fn resolve_x(ball: &mut Ball, grid: &Grid, old_pos: Vec2) {
    if ball.velocity.x == 0.0 {
        return;
    }
    let dir = ball.velocity.x.signum();
    let edge = ball.position.x + dir * ball.radius;
    let cx = edge.floor() as i32;

    // Probe at the vertical extent the ball occupied before the move so a
    // simultaneous y-collision does not double-report.
    let ys = [
        (old_pos.y - ball.radius * 0.5).floor() as i32,
        (old_pos.y + ball.radius * 0.5).floor() as i32,
    ];
    for y in ys {
        let cell = grid.get_cell(cx, y);
        if blocks(cell) {
            ball.position.x = if dir > 0.0 {
                cx as f64 - ball.radius
            } else {
                (cx + 1) as f64 + ball.radius
            };
            ball.velocity.x = -ball.velocity.x * bounce_factor(ball.kind, cell);
            return;
        }
    }
}

fn resolve_y(ball: &mut Ball, grid: &mut Grid, rng: &mut u32) {
    if ball.velocity.y == 0.0 {
        return;
    }
    let dir = ball.velocity.y.signum();
    let edge = ball.position.y + dir * ball.radius;
    let cy = edge.floor() as i32;

    let xs = [
        (ball.position.x - ball.radius * 0.5).floor() as i32,
        (ball.position.x + ball.radius * 0.5).floor() as i32,
    ];
    for x in xs {
        let cell = grid.get_cell(x, cy);
        if !blocks(cell) {
            continue;
        }

        // Hard landings on loose material knock cells out of the surface.
        let impact = ball.velocity.length() * 0.5;
        if dir > 0.0 && cell.is_particle() && impact > IMPACT_CRATER_THRESHOLD {
            log::debug!("impact crater at ({x}, {cy}), force {impact:.1}");
            carve_crater(grid, x, cy, rng);
        }

        ball.position.y = if dir > 0.0 {
            cy as f64 - ball.radius
        } else {
            (cy + 1) as f64 + ball.radius
        };
        ball.velocity.y = -ball.velocity.y * bounce_factor(ball.kind, cell);
        return;
    }
}

fn carve_crater(grid: &mut Grid, x: i32, y: i32, rng: &mut u32) {
    for dx in -1..=1i32 {
        if grid.is_particle(x + dx, y) && (dx == 0 || chance(rng, CRATER_SPREAD_CHANCE)) {
            grid.clear_cell(x + dx, y);
        }
    }
}

/// Backstop for the grid-edge collision: keep the center inside the world
/// even if a probe was skipped, reflecting any outward velocity.
fn clamp_to_world(ball: &mut Ball, grid: &Grid) {
    let w = grid.width() as f64;
    let h = grid.height() as f64;
    let r = ball.radius;
    if ball.position.x < r {
        ball.position.x = r;
        ball.velocity.x = ball.velocity.x.abs() * DEFAULT_BOUNCE;
    } else if ball.position.x > w - r {
        ball.position.x = w - r;
        ball.velocity.x = -ball.velocity.x.abs() * DEFAULT_BOUNCE;
    }
    if ball.position.y < r {
        ball.position.y = r;
        ball.velocity.y = ball.velocity.y.abs() * DEFAULT_BOUNCE;
    } else if ball.position.y > h - r {
        ball.position.y = h - r;
        ball.velocity.y = -ball.velocity.y.abs() * DEFAULT_BOUNCE;
    }
}

#[cfg(test)]
mod tests {
    use super::super::DEFAULT_RADIUS;
    use super::*;

    fn ball_at(x: f64, y: f64) -> Ball {
        Ball::new(Vec2::new(x, y), DEFAULT_RADIUS)
    }

    fn stone_floor(grid: &mut Grid, y: i32) {
        for x in 0..grid.width() as i32 {
            grid.set_cell(x, y, CellType::Stone, None);
        }
    }

    #[test]
    fn ball_bounces_off_stone_floor() {
        let mut grid = Grid::new(20, 20);
        stone_floor(&mut grid, 10);
        let mut ball = ball_at(5.0, 9.8);
        ball.velocity = Vec2::new(0.0, 6.0);
        let old = ball.position;
        ball.position += ball.velocity * (1.0 / 60.0);
        let mut rng = 1u32;
        resolve(&mut ball, &mut grid, old, 1.0 / 60.0, &mut rng);
        assert!((ball.position.y - 9.5).abs() < 1e-9);
        // Stone restitution is 0.8.
        assert!((ball.velocity.y + 4.8).abs() < 1e-9);
    }

    #[test]
    fn ball_bounces_off_side_wall() {
        let mut grid = Grid::new(20, 20);
        for y in 0..20 {
            grid.set_cell(10, y, CellType::Stone, None);
        }
        let mut ball = ball_at(9.4, 5.0);
        ball.velocity = Vec2::new(12.0, 0.0);
        let old = ball.position;
        ball.position += ball.velocity * (1.0 / 60.0);
        let mut rng = 1u32;
        resolve(&mut ball, &mut grid, old, 1.0 / 60.0, &mut rng);
        assert!((ball.position.x - 9.5).abs() < 1e-9);
        assert!(ball.velocity.x < 0.0);
    }

    #[test]
    fn no_tunneling_through_thin_wall() {
        let mut grid = Grid::new(64, 16);
        for y in 0..16 {
            grid.set_cell(32, y, CellType::Stone, None);
        }
        let mut ball = ball_at(5.0, 8.0);
        ball.velocity = Vec2::new(super::super::MAX_VELOCITY, 0.0);
        let mut rng = 7u32;
        for _ in 0..120 {
            ball.update(&mut grid, 0.0, 1.0 / 60.0, &mut rng);
        }
        assert!(ball.position.x < 32.0);
    }

    #[test]
    fn hard_landing_craters_sand() {
        let mut grid = Grid::new(20, 20);
        stone_floor(&mut grid, 12);
        for x in 0..20 {
            grid.set_cell(x, 11, CellType::Sand, None);
        }
        let mut ball = ball_at(5.0, 10.3);
        // Impact force = 20 * 0.5 = 10, well over the crater threshold.
        ball.velocity = Vec2::new(0.0, 20.0);
        let old = ball.position;
        ball.position += ball.velocity * (1.0 / 60.0);
        let mut rng = 3u32;
        resolve(&mut ball, &mut grid, old, 1.0 / 60.0, &mut rng);
        assert_eq!(grid.get_cell(5, 11), CellType::Empty);
    }

    #[test]
    fn gentle_landing_leaves_sand_intact() {
        let mut grid = Grid::new(20, 20);
        for x in 0..20 {
            grid.set_cell(x, 11, CellType::Sand, None);
        }
        let mut ball = ball_at(5.0, 10.6);
        ball.velocity = Vec2::new(0.0, 2.0);
        let old = ball.position;
        ball.position += ball.velocity * (1.0 / 60.0);
        let mut rng = 3u32;
        resolve(&mut ball, &mut grid, old, 1.0 / 60.0, &mut rng);
        assert_eq!(grid.get_cell(5, 11), CellType::Sand);
        assert!(ball.velocity.y < 0.0);
    }

    #[test]
    fn water_damps_but_does_not_block() {
        let mut grid = Grid::new(20, 20);
        grid.set_cell(5, 5, CellType::Water, None);
        let mut ball = ball_at(5.5, 5.5);
        ball.velocity = Vec2::new(10.0, 0.0);
        let old = ball.position;
        let mut rng = 1u32;
        resolve(&mut ball, &mut grid, old, 1.0 / 60.0, &mut rng);
        assert!((ball.velocity.x - 9.5).abs() < 1e-9);
        assert!(ball.velocity.y < 0.0);
    }

    #[test]
    fn supported_on_stone_but_not_mid_air() {
        let mut grid = Grid::new(20, 20);
        stone_floor(&mut grid, 10);
        let resting = ball_at(5.0, 9.5);
        assert!(supported(&resting, &grid));
        let airborne = ball_at(5.0, 5.0);
        assert!(!supported(&airborne, &grid));
    }

    #[test]
    fn world_edges_are_supported() {
        let grid = Grid::new(20, 20);
        let at_bottom = ball_at(5.0, 19.5);
        assert!(supported(&at_bottom, &grid));
    }
}
