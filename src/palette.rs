//! Fixed color palettes that color fields step through.

use std::ops::Index;

/// Direction of a single value change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

impl Step {
    pub fn delta(self) -> i32 {
        match self {
            Self::Next => 1,
            Self::Prev => -1,
        }
    }

    /// Move a 1-based id within `1..=count`, wrapping at both ends. Values
    /// outside the range re-enter it, including the extremes of `i32`.
    pub fn cycle(self, value: i32, count: i32) -> i32 {
        if count <= 0 {
            return value;
        }
        let zero_based = i64::from(value) - 1 + i64::from(self.delta());
        // the remainder is below `count`, so it fits back into i32
        zero_based.rem_euclid(i64::from(count)) as i32 + 1
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Palette(&'static [u32]);

impl Palette {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn position(&self, color: u32) -> Option<usize> {
        self.0.iter().position(|&c| c == color)
    }

    /// Neighbour of `current`. A color outside the palette steps onto the
    /// first entry going forward and the last going back.
    pub fn step(&self, current: u32, step: Step) -> u32 {
        let n = self.len();
        let next = match (self.position(current), step) {
            (Some(i), Step::Next) => (i + 1) % n,
            (Some(i), Step::Prev) => (i + n - 1) % n,
            (None, Step::Next) => 0,
            (None, Step::Prev) => n - 1,
        };
        self.0[next]
    }
}

impl Index<usize> for Palette {
    type Output = u32;

    fn index(&self, i: usize) -> &u32 {
        &self.0[i]
    }
}

pub fn rgb(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Palettes
// ═══════════════════════════════════════════════════════════════════════════════

/// Launcher theme colors: 9 families, 12 shades each, dark to pale.
pub const THEME: Palette = Palette(&[
    // Blues
    0x000022, 0x000044, 0x000066, 0x000088, 0x0000AA, 0x0000CC, 0x3366FF, 0x4D7AFF, 0x6699FF,
    0x80B3FF, 0x99CCFF, 0xB3D9FF, //
    // Cyan
    0x002222, 0x004444, 0x006666, 0x008888, 0x00AAAA, 0x00CCCC, 0x33FFFF, 0x4DFFFF, 0x66FFFF,
    0x80FFFF, 0x99FFFF, 0xB3FFFF, //
    // Green
    0x002200, 0x004400, 0x006600, 0x008800, 0x00AA00, 0x00CC00, 0x33FF33, 0x4DFF4D, 0x66FF66,
    0x80FF80, 0x99FF99, 0xB3FFB3, //
    // Magenta
    0x220022, 0x440044, 0x660066, 0x880088, 0xAA00AA, 0xCC00CC, 0xFF33FF, 0xFF4DFF, 0xFF66FF,
    0xFF80FF, 0xFF99FF, 0xFFB3FF, //
    // Purple
    0x110022, 0x220044, 0x330066, 0x440088, 0x5500AA, 0x6600CC, 0x8833FF, 0x994DFF, 0xAA66FF,
    0xBB80FF, 0xCC99FF, 0xDDB3FF, //
    // Red
    0x220000, 0x440000, 0x660000, 0x880000, 0xAA0000, 0xCC0000, 0xFF3333, 0xFF4D4D, 0xFF6666,
    0xFF8080, 0xFF9999, 0xFFB3B3, //
    // Yellow
    0x222200, 0x444400, 0x666600, 0x888800, 0xAAAA00, 0xCCCC00, 0xFFFF33, 0xFFFF4D, 0xFFFF66,
    0xFFFF80, 0xFFFF99, 0xFFFFB3, //
    // Orange
    0x221100, 0x442200, 0x663300, 0x884400, 0xAA5500, 0xCC6600, 0xFF8833, 0xFF994D, 0xFFAA66,
    0xFFBB80, 0xFFCC99, 0xFFDDB3, //
    // Grey ramp
    0x000000, 0x141414, 0x282828, 0x3C3C3C, 0x505050, 0x646464, 0x8C8C8C, 0xA0A0A0, 0xB4B4B4,
    0xC8C8C8, 0xDCDCDC, 0xFFFFFF,
]);

/// LED colors. Same families as [`THEME`] without the two palest shades,
/// which wash out to white on the diffusers. The grey ramp keeps white.
pub const LED: Palette = Palette(&[
    // Blues
    0x000022, 0x000044, 0x000066, 0x000088, 0x0000AA, 0x0000CC, 0x3366FF, 0x4D7AFF, 0x6699FF,
    0x80B3FF, //
    // Cyan
    0x002222, 0x004444, 0x006666, 0x008888, 0x00AAAA, 0x00CCCC, 0x33FFFF, 0x4DFFFF, 0x66FFFF,
    0x80FFFF, //
    // Green
    0x002200, 0x004400, 0x006600, 0x008800, 0x00AA00, 0x00CC00, 0x33FF33, 0x4DFF4D, 0x66FF66,
    0x80FF80, //
    // Magenta
    0x220022, 0x440044, 0x660066, 0x880088, 0xAA00AA, 0xCC00CC, 0xFF33FF, 0xFF4DFF, 0xFF66FF,
    0xFF80FF, //
    // Purple
    0x110022, 0x220044, 0x330066, 0x440088, 0x5500AA, 0x6600CC, 0x8833FF, 0x994DFF, 0xAA66FF,
    0xBB80FF, //
    // Red
    0x220000, 0x440000, 0x660000, 0x880000, 0xAA0000, 0xCC0000, 0xFF3333, 0xFF4D4D, 0xFF6666,
    0xFF8080, //
    // Yellow
    0x222200, 0x444400, 0x666600, 0x888800, 0xAAAA00, 0xCCCC00, 0xFFFF33, 0xFFFF4D, 0xFFFF66,
    0xFFFF80, //
    // Orange
    0x221100, 0x442200, 0x663300, 0x884400, 0xAA5500, 0xCC6600, 0xFF8833, 0xFF994D, 0xFFAA66,
    0xFFBB80, //
    // Grey ramp
    0x000000, 0x141414, 0x282828, 0x3C3C3C, 0x505050, 0x646464, 0x8C8C8C, 0xA0A0A0, 0xC8C8C8,
    0xFFFFFF,
]);
