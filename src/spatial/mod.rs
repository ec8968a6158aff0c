//! Spatial structures: the cell grid and active-region tracking.

pub mod grid;
pub mod regions;
