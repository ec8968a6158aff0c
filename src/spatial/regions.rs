//! Active-region tracking - fixed-size block partitioning of the grid.
//!
//! A block is active when it holds at least one dynamic cell; active blocks
//! are dilated to their 8 neighbors so material moving across a block edge
//! keeps simulating. The full recompute runs on a frame modulus (see
//! `REGION_REFRESH_INTERVAL`), so freshly disturbed blocks can lag a few
//! frames before waking - matching the source. Explicit commands wake their
//! blocks immediately via `activate_cell`.

use crate::spatial::grid::Grid;

/// Region block size in cells (16x16).
pub const REGION_SIZE: u32 = 16;

/// Full region recompute runs every Nth frame.
pub const REGION_REFRESH_INTERVAL: u64 = 4;

pub struct RegionGrid {
    regions_x: u32,
    regions_y: u32,
    active: Vec<bool>,
    scratch: Vec<bool>,
}

impl RegionGrid {
    pub fn new(world_width: u32, world_height: u32) -> Self {
        let regions_x = (world_width + REGION_SIZE - 1) / REGION_SIZE;
        let regions_y = (world_height + REGION_SIZE - 1) / REGION_SIZE;
        let count = (regions_x * regions_y) as usize;
        Self {
            regions_x,
            regions_y,
            active: vec![false; count],
            scratch: vec![false; count],
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.regions_x, self.regions_y)
    }

    pub fn total_regions(&self) -> usize {
        self.active.len()
    }

    pub fn active_region_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    #[inline]
    fn region_index(&self, rx: u32, ry: u32) -> usize {
        (ry * self.regions_x + rx) as usize
    }

    /// Is the block containing this cell flagged for simulation?
    #[inline]
    pub fn is_active_cell(&self, x: u32, y: u32) -> bool {
        let rx = x / REGION_SIZE;
        let ry = y / REGION_SIZE;
        if rx >= self.regions_x || ry >= self.regions_y {
            return false;
        }
        self.active[self.region_index(rx, ry)]
    }

    /// Wake the block holding (x, y) and its 8 neighbors immediately.
    /// Used by commands (brush, explosion, ball craters) so user actions
    /// never wait out the refresh interval.
    pub fn activate_cell(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 {
            return;
        }
        let rx = (x as u32 / REGION_SIZE) as i32;
        let ry = (y as u32 / REGION_SIZE) as i32;
        for dy in -1..=1 {
            for dx in -1..=1 {
                let nx = rx + dx;
                let ny = ry + dy;
                if nx >= 0 && ny >= 0 && (nx as u32) < self.regions_x && (ny as u32) < self.regions_y
                {
                    let idx = self.region_index(nx as u32, ny as u32);
                    self.active[idx] = true;
                }
            }
        }
    }

    pub fn activate_all(&mut self) {
        self.active.fill(true);
    }

    pub fn deactivate_all(&mut self) {
        self.active.fill(false);
    }

    /// Full recompute: one O(cells) scan marking blocks with dynamic cells,
    /// then one dilation pass. A one-block dilation (16 cells) covers the
    /// maximum travel of any cell between refreshes with a wide margin.
    pub fn refresh(&mut self, grid: &Grid) {
        self.scratch.fill(false);
        for y in 0..grid.height() {
            let ry = y / REGION_SIZE;
            for x in 0..grid.width() {
                // SAFETY: x,y iterate the grid dimensions exactly
                let cell = unsafe { grid.get_type_unchecked(x, y) };
                if cell.is_dynamic() {
                    let rx = x / REGION_SIZE;
                    let idx = self.region_index(rx, ry);
                    self.scratch[idx] = true;
                }
            }
        }

        for ry in 0..self.regions_y {
            for rx in 0..self.regions_x {
                let idx = self.region_index(rx, ry);
                self.active[idx] = self.any_marked_near(rx as i32, ry as i32);
            }
        }
    }

    fn any_marked_near(&self, rx: i32, ry: i32) -> bool {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let nx = rx + dx;
                let ny = ry + dy;
                if nx >= 0 && ny >= 0 && (nx as u32) < self.regions_x && (ny as u32) < self.regions_y
                {
                    if self.scratch[self.region_index(nx as u32, ny as u32)] {
                        return true;
                    }
                }
            }
        }
        false
    }
}
