//! Packed ABGR color helpers.
//!
//! Colors are stored as u32 in ABGR format (little-endian bytes [R,G,B,A])
//! so the color buffer can be blitted straight into a canvas-style surface.

/// Background color for empty cells: RGB(10,10,10), alpha 255.
pub const BG_COLOR: u32 = 0xFF0A0A0A;

#[inline]
pub const fn pack(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

#[inline]
pub const fn red(c: u32) -> u8 {
    (c & 0xFF) as u8
}

#[inline]
pub const fn green(c: u32) -> u8 {
    ((c >> 8) & 0xFF) as u8
}

#[inline]
pub const fn blue(c: u32) -> u8 {
    ((c >> 16) & 0xFF) as u8
}

#[inline]
pub const fn alpha(c: u32) -> u8 {
    ((c >> 24) & 0xFF) as u8
}

#[inline]
pub const fn with_alpha(c: u32, a: u8) -> u32 {
    (c & 0x00FF_FFFF) | ((a as u32) << 24)
}

/// Per-instance shade variation from a small seed (0..32).
/// Keeps hue, nudges brightness so adjacent cells of one material differ.
#[inline]
pub fn vary(c: u32, seed: u8) -> u32 {
    let delta = (seed & 31) as i32 - 16;
    let adj = |ch: u8| (ch as i32 + delta).clamp(0, 255) as u8;
    pack(adj(red(c)), adj(green(c)), adj(blue(c)), alpha(c))
}

/// Random brightness flicker used by fire animation. `rand` is a draw from
/// the injected RNG; only the low bits are used.
#[inline]
pub fn jitter(c: u32, rand: u32) -> u32 {
    let delta = (rand & 31) as i32 - 16;
    let adj = |ch: u8| (ch as i32 + delta).clamp(0, 255) as u8;
    pack(adj(red(c)), adj(green(c)), blue(c), alpha(c))
}

/// Derive a grass shade from a dirt color: push green up, pull red/blue down.
#[inline]
pub fn greener(c: u32) -> u32 {
    let r = (red(c) as i32 - 40).clamp(0, 255) as u8;
    let g = (green(c) as i32 + 70).clamp(0, 255) as u8;
    let b = (blue(c) as i32 - 30).clamp(0, 255) as u8;
    pack(r, g, b, alpha(c))
}
