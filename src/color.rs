//! Shape colours.
//!
//! A shape only carries a colour tag; nothing in this crate blends or
//! paints pixels. [`Rgba8`] keeps the 8-bit-per-channel layout and the
//! fixed-point interpolation used by 2D renderers so templates can be
//! handed to one unchanged.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShapeError};

// ============================================================================
// Rgba8 (8-bit per channel)
// ============================================================================

/// RGBA color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_SHIFT: u32 = 8;
    pub const BASE_MASK: u32 = (1 << Self::BASE_SHIFT) - 1;
    pub const BASE_MSB: u32 = 1 << (Self::BASE_SHIFT - 1);

    pub const WHITE: Rgba8 = Rgba8::new_opaque(255, 255, 255);
    pub const BLACK: Rgba8 = Rgba8::new_opaque(0, 0, 0);
    pub const RED: Rgba8 = Rgba8::new_opaque(255, 0, 0);
    pub const GREEN: Rgba8 = Rgba8::new_opaque(0, 255, 0);
    pub const YELLOW: Rgba8 = Rgba8::new_opaque(255, 255, 0);
    pub const ORANGE: Rgba8 = Rgba8::new_opaque(255, 165, 0);
    pub const PURPLE: Rgba8 = Rgba8::new_opaque(160, 32, 240);
    /// Dark teal, `#1b5e5a`.
    pub const TEAL: Rgba8 = Rgba8::new_opaque(0x1b, 0x5e, 0x5a);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        let invalid = || ShapeError::InvalidHexColor(s.to_string());
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    pub fn is_opaque(&self) -> bool {
        self.a == Self::BASE_MASK as u8
    }

    /// Interpolate p to q by a, exact over u8.
    #[inline]
    pub fn lerp(p: u8, q: u8, a: u8) -> u8 {
        let t = (q as i32 - p as i32) * a as i32 + Self::BASE_MSB as i32 - (p > q) as i32;
        (p as i32 + (((t >> Self::BASE_SHIFT) + t) >> Self::BASE_SHIFT)) as u8
    }

    /// Blend towards `c` by `k` in `[0, 1]`; values outside are clamped.
    pub fn gradient(&self, c: &Rgba8, k: f32) -> Rgba8 {
        let ik = (k.clamp(0.0, 1.0) * Self::BASE_MASK as f32).round() as u8;
        Rgba8 {
            r: Self::lerp(self.r, c.r, ik),
            g: Self::lerp(self.g, c.g, ik),
            b: Self::lerp(self.b, c.b, ik),
            a: Self::lerp(self.a, c.a, ik),
        }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Rgba8 {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

// ============================================================================
// Tests
// ============================================================================
