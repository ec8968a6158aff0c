//! Sandtrap Engine - falling-sand golf simulation core
//!
//! A cellular-automaton sand world (powders, liquids, fire, gas) coupled
//! with a single physics ball the player aims and shoots toward a hole.
//!
//! Architecture:
//! - domain/     - Cell types, materials, colors, level data
//! - spatial/    - Grid storage and active-region tracking
//! - systems/    - Behaviors, grass growth, ball physics
//! - simulation/ - Orchestration only

pub mod domain;
pub mod simulation;
pub mod spatial;
pub mod systems;

pub mod world {
    pub use crate::simulation::*;
}

// Convenience re-exports (the whole public surface in one flat namespace)
pub use domain::cell::{props, CellType, MaterialProps};
pub use domain::level::{CellSpec, LevelData};
pub use simulation::World;
pub use spatial::grid::Grid;
pub use systems::ball::{AimState, Ball, BallKind, BallPhase, Vec2};

/// Initialize the engine's logging. Safe to call more than once.
pub fn init() {
    log::info!("sandtrap engine {} initialized", version());
}

/// Get engine version
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
