//! Brush-style bulk mutations: circles, explosions, level loading.

use crate::domain::cell::CellType;
use crate::domain::color::vary;
use crate::domain::level::CellSpec;

use super::*;

/// Fraction of the explosion radius that burns instead of crumbling.
const EXPLOSION_FIRE_BAND: f64 = 0.3;

impl Grid {
    /// Set every cell within `radius` of the center to `t`. Used by mining
    /// and platform abilities; `Empty` erases. Without an explicit color each
    /// cell gets a position-derived shade of the material default, so brushed
    /// areas do not read as one flat block.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, t: CellType, color: Option<u32>) {
        log::debug!("brush {t:?} at ({cx}, {cy}) radius {radius}");
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let x = cx + dx;
                let y = cy + dy;
                let shade = match color {
                    Some(c) => Some(c),
                    None if t != CellType::Empty => {
                        let seed = ((x.wrapping_mul(31) ^ y.wrapping_mul(17)) & 31) as u8;
                        Some(vary(t.default_color(), seed))
                    }
                    None => None,
                };
                self.set_cell(x, y, t, shade);
            }
        }
    }

    /// One-shot explosion: destructible solids in the blast crumble to Sand
    /// (keeping their shade), anything destructible in the inner band is set
    /// on fire. Boundary and Metal shrug it off.
    pub fn explode(&mut self, cx: i32, cy: i32, radius: i32) {
        log::debug!("explosion at ({cx}, {cy}) radius {radius}");
        let r2 = (radius * radius) as f64;
        let fire_r2 = r2 * EXPLOSION_FIRE_BAND * EXPLOSION_FIRE_BAND;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let d2 = (dx * dx + dy * dy) as f64;
                if d2 > r2 {
                    continue;
                }
                let x = cx + dx;
                let y = cy + dy;
                let cell = self.get_cell(x, y);
                if cell == CellType::Empty || !cell.is_destructible() {
                    continue;
                }
                if d2 <= fire_r2 {
                    self.set_cell(x, y, CellType::Fire, None);
                } else if cell.is_solid() {
                    let shade = self.get_color(x, y);
                    self.set_cell(x, y, CellType::Sand, Some(shade));
                }
            }
        }
    }

    /// Load a level cell list. Existing cells at listed coordinates are
    /// overwritten; everything else is left alone.
    pub fn load_from_data(&mut self, cells: &[CellSpec]) {
        for spec in cells {
            self.set_cell(spec.x, spec.y, spec.cell_type, spec.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_circle_covers_the_disc() {
        let mut grid = Grid::new(32, 32);
        grid.draw_circle(16, 16, 3, CellType::Stone, None);
        assert_eq!(grid.get_cell(16, 16), CellType::Stone);
        assert_eq!(grid.get_cell(16, 19), CellType::Stone);
        assert_eq!(grid.get_cell(16, 20), CellType::Empty);
        assert_eq!(grid.get_cell(19, 19), CellType::Empty);
    }

    #[test]
    fn draw_circle_speckles_the_default_shade() {
        let mut grid = Grid::new(32, 32);
        grid.draw_circle(16, 16, 3, CellType::Sand, None);
        assert_ne!(grid.get_color(16, 16), grid.get_color(17, 16));
    }

    #[test]
    fn draw_circle_with_empty_erases() {
        let mut grid = Grid::new(32, 32);
        grid.draw_circle(16, 16, 4, CellType::Dirt, None);
        grid.draw_circle(16, 16, 2, CellType::Empty, None);
        assert_eq!(grid.get_cell(16, 16), CellType::Empty);
        assert_eq!(grid.get_cell(16, 12), CellType::Dirt);
    }

    #[test]
    fn explosion_inner_band_burns_outer_band_crumbles() {
        let mut grid = Grid::new(32, 32);
        grid.draw_circle(16, 16, 8, CellType::Stone, None);
        grid.explode(16, 16, 6);
        // Inner 30% of radius 6 is 1.8 cells.
        assert_eq!(grid.get_cell(16, 16), CellType::Fire);
        assert_eq!(grid.get_cell(17, 16), CellType::Fire);
        assert_eq!(grid.get_cell(20, 16), CellType::Sand);
        assert_eq!(grid.get_cell(16, 12), CellType::Sand);
        // Outside the blast the stone survives.
        assert_eq!(grid.get_cell(23, 16), CellType::Stone);
    }

    #[test]
    fn explosion_preserves_crumbled_color() {
        let mut grid = Grid::new(32, 32);
        let shade = crate::domain::color::pack(99, 88, 77, 255);
        grid.set_cell(20, 16, CellType::Dirt, Some(shade));
        grid.explode(16, 16, 6);
        assert_eq!(grid.get_cell(20, 16), CellType::Sand);
        assert_eq!(grid.get_color(20, 16), shade);
    }

    #[test]
    fn explosion_spares_metal() {
        let mut grid = Grid::new(32, 32);
        grid.set_cell(18, 16, CellType::Metal, None);
        grid.set_cell(16, 16, CellType::Metal, None);
        grid.explode(16, 16, 6);
        assert_eq!(grid.get_cell(18, 16), CellType::Metal);
        assert_eq!(grid.get_cell(16, 16), CellType::Metal);
    }

    #[test]
    fn load_from_data_places_cells() {
        let mut grid = Grid::new(16, 16);
        let cells = vec![
            CellSpec { x: 1, y: 1, cell_type: CellType::Stone, color: None },
            CellSpec { x: 2, y: 1, cell_type: CellType::Water, color: Some(7) },
            CellSpec { x: 99, y: 99, cell_type: CellType::Stone, color: None },
        ];
        grid.load_from_data(&cells);
        assert_eq!(grid.get_cell(1, 1), CellType::Stone);
        assert_eq!(grid.get_cell(2, 1), CellType::Water);
        assert_eq!(grid.get_color(2, 1), 7);
    }
}
