//! Per-tick systems: material behaviors, grass growth, and the ball.

pub mod ball;
pub mod behaviors;
pub mod grass;
