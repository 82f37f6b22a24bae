//! Terminal color types.
//!
//! Colors are stored as 24-bit RGB regardless of the configured
//! [`ColorMode`]; the compositor that paints cells to a physical terminal
//! is responsible for quantizing to whatever the terminal supports.
//! This module provides the standard 16-entry and 256-entry palettes used
//! when decoding inline SGR escapes.

use std::fmt;

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The standard 16-color terminal palette (VGA values).
const ANSI_PALETTE: [Color; 16] = [
    Color::rgb(0x00, 0x00, 0x00),
    Color::rgb(0xaa, 0x00, 0x00),
    Color::rgb(0x00, 0xaa, 0x00),
    Color::rgb(0xaa, 0x55, 0x00),
    Color::rgb(0x00, 0x00, 0xaa),
    Color::rgb(0xaa, 0x00, 0xaa),
    Color::rgb(0x00, 0xaa, 0xaa),
    Color::rgb(0xaa, 0xaa, 0xaa),
    Color::rgb(0x55, 0x55, 0x55),
    Color::rgb(0xff, 0x55, 0x55),
    Color::rgb(0x55, 0xff, 0x55),
    Color::rgb(0xff, 0xff, 0x55),
    Color::rgb(0x55, 0x55, 0xff),
    Color::rgb(0xff, 0x55, 0xff),
    Color::rgb(0x55, 0xff, 0xff),
    Color::rgb(0xff, 0xff, 0xff),
];

impl Color {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const GRAY: Self = Self::rgb(0xaa, 0xaa, 0xaa);
    pub const RED: Self = Self::rgb(0xaa, 0x00, 0x00);
    pub const GREEN: Self = Self::rgb(0x00, 0xaa, 0x00);
    pub const BLUE: Self = Self::rgb(0x00, 0x00, 0xff);
    pub const YELLOW: Self = Self::rgb(0xff, 0xff, 0x00);
    pub const MAGENTA: Self = Self::rgb(0xff, 0x00, 0xff);

    /// Create a color from RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Pack into a `0xRRGGBB` value.
    #[must_use]
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Look up an entry of the standard 16-color palette.
    ///
    /// Indices above 15 wrap around.
    #[must_use]
    pub const fn ansi(index: u8) -> Self {
        ANSI_PALETTE[(index & 0x0f) as usize]
    }

    /// Look up an entry of the xterm 256-color palette.
    ///
    /// Entries 0-15 are the standard palette, 16-231 the 6x6x6 color
    /// cube, 232-255 the grayscale ramp.
    #[must_use]
    pub fn ansi256(index: u8) -> Self {
        match index {
            0..=15 => Self::ansi(index),
            16..=231 => {
                let n = index - 16;
                let scale = |v: u8| if v == 0 { 0 } else { 55 + 40 * v };
                Self::rgb(scale(n / 36), scale(n / 6 % 6), scale(n % 6))
            }
            232..=255 => {
                let v = 8 + 10 * (index - 232);
                Self::rgb(v, v, v)
            }
        }
    }

    /// Nearest 16-color palette index for this color.
    #[must_use]
    pub fn to_ansi16(self) -> u8 {
        let mut best = 0u8;
        let mut best_dist = u32::MAX;
        for (i, entry) in ANSI_PALETTE.iter().enumerate() {
            let dr = i32::from(self.r) - i32::from(entry.r);
            let dg = i32::from(self.g) - i32::from(entry.g);
            let db = i32::from(self.b) - i32::from(entry.b);
            let dist = (dr * dr + dg * dg + db * db) as u32;
            if dist < best_dist {
                best_dist = dist;
                best = i as u8;
            }
        }
        best
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A foreground/background color pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Color,
}

impl ColorPair {
    #[must_use]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}

/// Color depth the consuming compositor renders at.
///
/// The engine always stores cells as 24-bit RGB; this is configuration
/// passed through to the compositor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    Mono,
    #[default]
    Ansi16,
    Ansi256,
    TrueColor,
}
