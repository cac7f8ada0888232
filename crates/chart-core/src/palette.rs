// File: crates/chart-core/src/palette.rs
// Summary: Chart-owned color palette with first-unused assignment and overflow colors.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::types::Color;

/// Base palette, scanned in order for the first color not already in use.
pub const PALETTE: [Color; 9] = [
    Color::new(0xF1, 0x58, 0x54), // red
    Color::new(0x60, 0xBD, 0x68), // green
    Color::new(0x5D, 0xA5, 0xDA), // blue
    Color::new(0xFA, 0xA4, 0x3A), // orange
    Color::new(0xF1, 0x7C, 0xB0), // pink
    Color::new(0xB2, 0x91, 0x2F), // brown
    Color::new(0xB2, 0x76, 0xB2), // purple
    Color::new(0xDE, 0xCF, 0x3F), // yellow
    Color::new(0x4D, 0x4D, 0x4D), // gray
];

/// Per-chart color source. Every chart owns one, so assignment order in one
/// chart never leaks into another.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: PALETTE.to_vec() }
    }
}

impl Palette {
    /// First base color not present in `in_use`; once the palette is
    /// exhausted, a color derived from `slot` (the would-be series position)
    /// so repeated renders stay deterministic.
    pub fn assign(&self, in_use: &[Color], slot: usize) -> Color {
        self.colors
            .iter()
            .copied()
            .find(|c| !in_use.contains(c))
            .unwrap_or_else(|| overflow_color(slot))
    }
}

fn overflow_color(slot: usize) -> Color {
    let mut hasher = DefaultHasher::new();
    slot.hash(&mut hasher);
    let bits = hasher.finish();
    Color::new((bits >> 16) as u8, (bits >> 8) as u8, bits as u8)
}
