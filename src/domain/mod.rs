//! Domain logic: cell types, material properties, colors, level data.

pub mod cell;
pub mod color;
pub mod level;
