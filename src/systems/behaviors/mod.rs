//! Behaviors - per-material cell transition rules.
//!
//! Single responsibility: each behavior handles one material category.
//! New materials slot into an existing category without touching the pass.

mod fire;
mod gas;
mod liquid;
mod powder;

pub use fire::FireBehavior;
pub use gas::GasBehavior;
pub use liquid::LiquidBehavior;
pub use powder::PowderBehavior;

use crate::domain::cell::CellType;
use crate::spatial::grid::Grid;

/// Update context passed to behaviors.
///
/// `ignitions` collects deferred cell conversions (lava setting neighbors on
/// fire) so behaviors never mutate cells ahead of the sweep cursor.
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub x: u32,
    pub y: u32,
    pub frame: u64,
    pub rng: &'a mut u32,
    pub ignitions: &'a mut Vec<(i32, i32)>,
}

/// Behavior trait - each category implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Bernoulli draw from the injected RNG. Uses a 24-bit fraction so the
/// comparison is exact in f32; p = 1.0 always hits, p = 0.0 never does.
#[inline]
pub fn chance(rng: &mut u32, p: f32) -> bool {
    let fraction = (xorshift32(rng) >> 8) as f32 / (1u32 << 24) as f32;
    fraction < p
}

/// Uniform draw in `1..=max`.
#[inline]
pub fn rand_range(rng: &mut u32, max: u32) -> i32 {
    (1 + xorshift32(rng) % max) as i32
}

/// Random left/right pair: returns (first, second) horizontal direction.
#[inline]
pub fn random_dir_pair(rng: &mut u32) -> (i32, i32) {
    if xorshift32(rng) & 1 == 0 {
        (-1, 1)
    } else {
        (1, -1)
    }
}

/// Behavior registry - dispatch by material category
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    fire: FireBehavior,
    gas: GasBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            liquid: LiquidBehavior::new(),
            fire: FireBehavior::new(),
            gas: GasBehavior::new(),
        }
    }

    /// Dispatch update to appropriate behavior based on category
    pub fn update(&self, cell: CellType, ctx: &mut UpdateContext) {
        if cell.is_particle() {
            self.powder.update(ctx);
        } else if cell.is_liquid() {
            self.liquid.update(ctx);
        } else if cell == CellType::Fire {
            self.fire.update(ctx);
        } else if cell.is_gas() {
            self.gas.update(ctx);
        }
        // Solids, Hole, Flag - no behavior
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xorshift_is_deterministic() {
        let mut a = 12345u32;
        let mut b = 12345u32;
        for _ in 0..100 {
            assert_eq!(xorshift32(&mut a), xorshift32(&mut b));
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = 99u32;
        for _ in 0..64 {
            assert!(!chance(&mut rng, 0.0));
        }
        for _ in 0..64 {
            assert!(chance(&mut rng, 1.0));
        }
    }

    #[test]
    fn rand_range_stays_in_bounds() {
        let mut rng = 7u32;
        for _ in 0..256 {
            let v = rand_range(&mut rng, 4);
            assert!((1..=4).contains(&v));
        }
    }
}
