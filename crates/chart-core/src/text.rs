// File: crates/chart-core/src/text.rs
// Summary: Text-sizing oracle trait with a font-free heuristic default.

/// Sizing oracle for fitting labels into boxes. Rendering backends may
/// substitute an implementation backed by real font metrics.
pub trait TextSizer {
    /// Largest font size at which `text` fits a `max_width` x `max_height` box.
    fn fit_font_size(&self, text: &str, max_width: f64, max_height: f64) -> f64;
}

/// Average advance width per font-size unit for proportional faces.
pub const GLYPH_ASPECT: f64 = 0.6;

/// Width-per-glyph approximation, good enough for layout when no font stack
/// is loaded (headless renders, the SVG path).
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextSizer;

impl TextSizer for HeuristicTextSizer {
    fn fit_font_size(&self, text: &str, max_width: f64, max_height: f64) -> f64 {
        let glyphs = text.chars().count().max(1) as f64;
        let by_width = max_width / (glyphs * GLYPH_ASPECT);
        by_width.min(max_height).max(1.0)
    }
}
