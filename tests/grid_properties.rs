//! Property tests for the grid invariants.

use proptest::prelude::*;
use sandtrap_engine::{CellType, Grid, World};

proptest! {
    #[test]
    fn out_of_bounds_reads_are_boundary(x in -200i32..200, y in -200i32..200) {
        let grid = Grid::new(64, 64);
        let cell = grid.get_cell(x, y);
        let inside = (0..64).contains(&x) && (0..64).contains(&y);
        if inside {
            prop_assert_eq!(cell, CellType::Empty);
        } else {
            prop_assert_eq!(cell, CellType::Boundary);
        }
    }

    #[test]
    fn out_of_bounds_writes_are_noops(x in -200i32..200, y in -200i32..200) {
        let mut grid = Grid::new(16, 16);
        grid.set_cell(x, y, CellType::Stone, None);
        if !(0..16).contains(&x) || !(0..16).contains(&y) {
            prop_assert_eq!(grid.active_cell_count(), 0);
        }
    }

    #[test]
    fn draw_circle_accepts_any_center_and_radius(
        cx in -100i32..100,
        cy in -100i32..100,
        radius in 0i32..40,
    ) {
        let mut grid = Grid::new(32, 32);
        grid.draw_circle(cx, cy, radius, CellType::Sand, None);
        // Nothing lands outside the grid and nothing panics.
        prop_assert_eq!(grid.get_cell(-1, -1), CellType::Boundary);
    }

    #[test]
    fn water_is_conserved_by_the_grid_pass(
        seed in 1u32..u32::MAX,
        cells in proptest::collection::vec((0i32..32, 0i32..32), 1..60),
    ) {
        // The world edge is an implicit wall, so any world is sealed.
        let mut world = World::with_seed(32, 32, seed);
        for (x, y) in cells {
            world.set_cell(x, y, CellType::Water, None);
        }
        let count = |w: &World| {
            let mut n = 0;
            for y in 0..32 {
                for x in 0..32 {
                    if w.get_cell(x, y) == CellType::Water {
                        n += 1;
                    }
                }
            }
            n
        };
        let initial = count(&world);
        for _ in 0..50 {
            world.step_grid(1.0 / 60.0);
        }
        prop_assert_eq!(count(&world), initial);
    }
}
