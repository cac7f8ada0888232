// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, styles, font caps).

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

/// Default chart width in pixels.
pub const WIDTH: f64 = 700.0;
/// Default chart height in pixels.
pub const HEIGHT: f64 = 500.0;
/// Default margin fraction reserved on each side of the plot area.
pub const PADDING: f64 = 0.1;

/// Largest title font, in pixels.
pub const MAX_TITLE_FONT: f64 = 32.0;
/// Largest axis/legend label font, in pixels.
pub const MAX_LABEL_FONT: f64 = 18.0;
/// Tick label font, in pixels.
pub const TICK_FONT: f64 = 12.0;

/// 24-bit RGB color, parsed from and displayed as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);
    /// Grid line gray.
    pub const GRID: Color = Color::new(0xCC, 0xCC, 0xCC);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string.
    pub fn from_hex(s: &str) -> Result<Self, ChartError> {
        let bad = || ChartError::InvalidColor(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(bad)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(bad());
        }
        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| bad())?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| bad())?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| bad())?;
        Ok(Self { r, g, b })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

/// Stroke dash pattern for lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Horizontal text anchoring relative to the text position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical text anchoring relative to the text position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}
