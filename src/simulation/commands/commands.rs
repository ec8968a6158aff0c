//! World commands - user-driven mutations.
//!
//! Every command wakes the regions it touches so the effect is visible on
//! the very next tick instead of waiting out the refresh interval.

use super::World;
use crate::domain::cell::CellType;
use crate::domain::level::LevelData;

pub(super) fn set_cell(world: &mut World, x: i32, y: i32, t: CellType, color: Option<u32>) {
    world.grid.set_cell(x, y, t, color);
    world.regions.activate_cell(x, y);
}

pub(super) fn clear_cell(world: &mut World, x: i32, y: i32) {
    world.grid.clear_cell(x, y);
    world.regions.activate_cell(x, y);
}

pub(super) fn draw_circle(
    world: &mut World,
    cx: i32,
    cy: i32,
    radius: i32,
    t: CellType,
    color: Option<u32>,
) {
    world.grid.draw_circle(cx, cy, radius, t, color);
    activate_circle(world, cx, cy, radius);
}

pub(super) fn explode(world: &mut World, cx: i32, cy: i32, radius: i32) {
    world.grid.explode(cx, cy, radius);
    activate_circle(world, cx, cy, radius);
}

pub(super) fn clear(world: &mut World) {
    log::info!("clearing world");
    world.grid.clear();
    world.grass.clear();
    world.ignition_queue.clear();
    world.regions.deactivate_all();
    world.frame = 0;
}

pub(super) fn load_from_data(world: &mut World, data: &LevelData) {
    clear(world);
    world.grid.load_from_data(&data.cells);
    // A freshly loaded level simulates everywhere for one refresh window so
    // any unsupported material starts settling immediately.
    world.regions.activate_all();
    log::info!("level loaded: {} cells", data.cells.len());
}

pub(super) fn load_level_json(world: &mut World, json: &str) -> Result<(), String> {
    let data = LevelData::from_json(json)?;
    load_from_data(world, &data);
    Ok(())
}

/// Wake every region block overlapping the circle's bounding box.
fn activate_circle(world: &mut World, cx: i32, cy: i32, radius: i32) {
    let step = crate::spatial::regions::REGION_SIZE as i32;
    let mut y = cy - radius;
    while y <= cy + radius {
        let mut x = cx - radius;
        while x <= cx + radius {
            world.regions.activate_cell(x, y);
            x += step;
        }
        y += step;
    }
    world.regions.activate_cell(cx + radius, cy + radius);
}
