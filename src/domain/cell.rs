//! Cell types and the static material property table.
//!
//! One closed enum instead of loosely-typed numeric codes: the per-type
//! property lookup is a total function, with a fallback entry for level
//! data produced by newer tools.

use serde::{Deserialize, Serialize};

use super::color::pack;

/// Every material a grid cell can hold.
///
/// `Boundary` is a sentinel returned for out-of-bounds queries; it is never
/// stored in the grid itself.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Empty = 0,
    Boundary,
    Stone,
    Dirt,
    Grass,
    Mud,
    Wood,
    Metal,
    Sand,
    Gravel,
    Ash,
    Water,
    Oil,
    Lava,
    Fire,
    Steam,
    Smoke,
    Hole,
    Flag,
}

pub const CELL_TYPE_COUNT: usize = 19;

/// Static per-material properties.
#[derive(Clone, Copy, Debug)]
pub struct MaterialProps {
    pub solid: bool,
    pub liquid: bool,
    pub particle: bool,
    pub flammable: bool,
    pub destructible: bool,
    pub density: f32,
    pub default_color: u32,
}

const fn mat(
    solid: bool,
    liquid: bool,
    particle: bool,
    flammable: bool,
    destructible: bool,
    density: f32,
    default_color: u32,
) -> MaterialProps {
    MaterialProps {
        solid,
        liquid,
        particle,
        flammable,
        destructible,
        density,
        default_color,
    }
}

/// Property table indexed by the `CellType` discriminant.
static MATERIALS: [MaterialProps; CELL_TYPE_COUNT] = [
    // Empty
    mat(false, false, false, false, false, 0.0, pack(10, 10, 10, 255)),
    // Boundary: solid, infinite density, indestructible
    mat(true, false, false, false, false, f32::INFINITY, pack(0, 0, 0, 255)),
    // Stone
    mat(true, false, false, false, true, 10.0, pack(128, 128, 130, 255)),
    // Dirt
    mat(true, false, false, false, true, 8.0, pack(110, 80, 50, 255)),
    // Grass
    mat(true, false, false, true, true, 8.0, pack(70, 150, 40, 255)),
    // Mud
    mat(true, false, false, false, true, 7.0, pack(90, 65, 45, 255)),
    // Wood
    mat(true, false, false, true, true, 5.0, pack(140, 100, 60, 255)),
    // Metal: indestructible
    mat(true, false, false, false, false, 12.0, pack(170, 175, 185, 255)),
    // Sand
    mat(false, false, true, false, true, 4.0, pack(220, 195, 120, 255)),
    // Gravel
    mat(false, false, true, false, true, 5.0, pack(150, 145, 140, 255)),
    // Ash
    mat(false, false, true, false, true, 2.0, pack(100, 100, 100, 255)),
    // Water
    mat(false, true, false, false, true, 3.0, pack(50, 110, 220, 200)),
    // Oil
    mat(false, true, false, true, true, 2.0, pack(60, 50, 30, 220)),
    // Lava
    mat(false, true, false, false, true, 6.0, pack(230, 90, 20, 255)),
    // Fire
    mat(false, false, false, false, true, 0.2, pack(255, 140, 30, 255)),
    // Steam
    mat(false, false, false, false, true, 0.1, pack(200, 210, 220, 200)),
    // Smoke
    mat(false, false, false, false, true, 0.15, pack(70, 70, 70, 200)),
    // Hole
    mat(false, false, false, false, false, 0.0, pack(20, 20, 25, 255)),
    // Flag
    mat(false, false, false, false, false, 0.0, pack(220, 40, 40, 255)),
];

/// Fallback for unrecognized lookups: density 0, non-solid, white.
static DEFAULT_PROPS: MaterialProps = mat(false, false, false, false, false, 0.0, pack(255, 255, 255, 255));

/// Total property lookup: never fails, unknown discriminants get the default.
#[inline]
pub fn props(t: CellType) -> &'static MaterialProps {
    MATERIALS.get(t as usize).unwrap_or(&DEFAULT_PROPS)
}

impl CellType {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == CellType::Empty
    }

    #[inline]
    pub fn is_boundary(self) -> bool {
        self == CellType::Boundary
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        props(self).solid
    }

    #[inline]
    pub fn is_liquid(self) -> bool {
        props(self).liquid
    }

    #[inline]
    pub fn is_particle(self) -> bool {
        props(self).particle
    }

    #[inline]
    pub fn is_gas(self) -> bool {
        matches!(self, CellType::Steam | CellType::Smoke)
    }

    #[inline]
    pub fn is_flammable(self) -> bool {
        props(self).flammable
    }

    #[inline]
    pub fn is_destructible(self) -> bool {
        props(self).destructible
    }

    /// Dynamic cells drive the active-region computation: anything that can
    /// move or transform on its own.
    #[inline]
    pub fn is_dynamic(self) -> bool {
        self.is_particle() || self.is_liquid() || self.is_gas() || self == CellType::Fire
    }

    #[inline]
    pub fn density(self) -> f32 {
        props(self).density
    }

    #[inline]
    pub fn default_color(self) -> u32 {
        props(self).default_color
    }
}
