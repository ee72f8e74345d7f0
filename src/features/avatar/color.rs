//! ARGB color value used by avatar drawables
//!
//! Colors are stored as packed 8-bit channels so shading stays exact.
//! Settings persist them as `#RRGGBB` or `#AARRGGBB` strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Multiplier applied to each RGB channel for the border shade
pub const SHADE_FACTOR: f32 = 0.9;

/// 32-bit ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    pub const WHITE: Argb = Argb::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Argb = Argb::rgb(0x00, 0x00, 0x00);
    pub const GRAY: Argb = Argb::rgb(0x88, 0x88, 0x88);
    pub const BLUE: Argb = Argb::rgb(0x00, 0x00, 0xff);

    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Opaque color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(0xff, r, g, b)
    }

    /// Unpack from `0xAARRGGBB`
    pub const fn from_u32(value: u32) -> Self {
        Self::new(
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        )
    }

    pub const fn to_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Darker variant used for borders.
    ///
    /// Each RGB channel is scaled by [`SHADE_FACTOR`] and truncated. The
    /// result is always opaque.
    pub fn darker_shade(self) -> Self {
        let shade = |channel: u8| (channel as f32 * SHADE_FACTOR) as u8;
        Self::rgb(shade(self.r), shade(self.g), shade(self.b))
    }
}

impl Default for Argb {
    fn default() -> Self {
        Self::GRAY
    }
}

impl From<Argb> for iced::Color {
    fn from(color: Argb) -> Self {
        iced::Color::from_rgba8(color.r, color.g, color.b, color.a as f32 / 255.0)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xff {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:08X}", self.to_u32())
        }
    }
}

/// Error returned for malformed hex colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color '{}': expected #RRGGBB or #AARRGGBB", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Argb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| err())?;
        match hex.len() {
            6 => Ok(Self::from_u32(0xff00_0000 | value)),
            8 => Ok(Self::from_u32(value)),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Argb {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Argb> for String {
    fn from(color: Argb) -> Self {
        color.to_string()
    }
}
