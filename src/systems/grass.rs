//! Grass growth - dirt exposed to open air turns green after a while.
//!
//! Exposure detection rides on the periodic region refresh scan; the timers
//! themselves advance every frame. An entry is dropped the moment its cell
//! stops being dirt-with-empty-above.

use std::collections::HashMap;

use crate::domain::cell::CellType;
use crate::domain::color;
use crate::spatial::grid::Grid;

/// Seconds of continuous exposure before dirt becomes grass.
pub const GRASS_GROW_SECONDS: f64 = 2.0;

#[derive(Default)]
pub struct GrassTracker {
    timers: HashMap<(i32, i32), f64>,
}

impl GrassTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Start tracking an exposed dirt cell. Existing timers are kept.
    pub fn track(&mut self, x: i32, y: i32) {
        self.timers.entry((x, y)).or_insert(0.0);
    }

    /// Scan the grid for exposed dirt. Called on the region refresh cadence,
    /// so fresh exposure can lag a few frames - same as region wake-up.
    pub fn rescan(&mut self, grid: &Grid) {
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                if grid.get_cell(x, y) == CellType::Dirt && grid.get_cell(x, y - 1).is_empty() {
                    self.track(x, y);
                }
            }
        }
    }

    /// Advance all timers by `dt`, converting ripe cells to grass and
    /// dropping entries that no longer qualify.
    pub fn advance(&mut self, grid: &mut Grid, dt: f64) {
        let mut grown: Vec<(i32, i32)> = Vec::new();
        {
            let g = &*grid;
            self.timers.retain(|&(x, y), timer| {
                if g.get_cell(x, y) != CellType::Dirt || !g.get_cell(x, y - 1).is_empty() {
                    return false;
                }
                *timer += dt;
                if *timer >= GRASS_GROW_SECONDS {
                    grown.push((x, y));
                    return false;
                }
                true
            });
        }
        for (x, y) in grown {
            let shade = color::greener(grid.get_color(x, y));
            grid.set_cell(x, y, CellType::Grass, Some(shade));
        }
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposed_dirt_becomes_grass_after_threshold() {
        let mut grid = Grid::new(16, 16);
        grid.set_cell(5, 10, CellType::Dirt, None);
        let mut tracker = GrassTracker::new();
        tracker.rescan(&grid);
        assert_eq!(tracker.len(), 1);

        let dt = 1.0 / 60.0;
        for _ in 0..119 {
            tracker.advance(&mut grid, dt);
        }
        assert_eq!(grid.get_cell(5, 10), CellType::Dirt);
        for _ in 0..3 {
            tracker.advance(&mut grid, dt);
        }
        assert_eq!(grid.get_cell(5, 10), CellType::Grass);
        assert!(tracker.is_empty());
    }

    #[test]
    fn covered_dirt_stops_growing() {
        let mut grid = Grid::new(16, 16);
        grid.set_cell(5, 10, CellType::Dirt, None);
        let mut tracker = GrassTracker::new();
        tracker.rescan(&grid);

        tracker.advance(&mut grid, 1.0);
        // Bury it before the threshold.
        grid.set_cell(5, 9, CellType::Stone, None);
        tracker.advance(&mut grid, 5.0);
        assert_eq!(grid.get_cell(5, 10), CellType::Dirt);
        assert!(tracker.is_empty());
    }

    #[test]
    fn grass_shade_derives_from_dirt_shade() {
        let mut grid = Grid::new(16, 16);
        let dirt_shade = color::pack(120, 90, 60, 255);
        grid.set_cell(3, 3, CellType::Dirt, Some(dirt_shade));
        let mut tracker = GrassTracker::new();
        tracker.track(3, 3);
        tracker.advance(&mut grid, GRASS_GROW_SECONDS + 0.1);
        assert_eq!(grid.get_cell(3, 3), CellType::Grass);
        assert_eq!(grid.get_color(3, 3), color::greener(dirt_shade));
    }

    #[test]
    fn rescan_ignores_buried_dirt() {
        let mut grid = Grid::new(16, 16);
        grid.set_cell(5, 10, CellType::Dirt, None);
        grid.set_cell(5, 9, CellType::Dirt, None);
        let mut tracker = GrassTracker::new();
        tracker.rescan(&grid);
        // Only the top cell is exposed.
        assert_eq!(tracker.len(), 1);
    }
}
