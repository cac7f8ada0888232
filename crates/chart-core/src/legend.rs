// File: crates/chart-core/src/legend.rs
// Summary: Legend band geometry and row emission shared by chart kinds.

use crate::scene::{Line, Oval, Rect, Scene, Text};
use crate::text::TextSizer;
use crate::types::{Color, HAlign, LineStyle, VAlign, MAX_LABEL_FONT};

/// Fraction of the canvas width reserved for the legend band.
pub const LEGEND_FRACTION: f64 = 0.25;
/// Tallest allowed legend row, in pixels.
pub const MAX_ROW_HEIGHT: f64 = 30.0;

/// What a legend row draws as its key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LegendSymbol {
    /// Short sample of the series stroke.
    LineSample { width: f64, style: LineStyle },
    /// Oval marker, as drawn by scatter series.
    Marker { size: f64 },
    /// Filled square, for bars and pie slices.
    Swatch,
}

/// One legend row: display label plus the symbol describing the entry.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub symbol: LegendSymbol,
}

/// Emit legend rows into the right-hand band of a `width` x `height` canvas.
/// Rows start a tenth of the canvas down and are numbered from 1 in the
/// primitive names (`legend-symbol-N`, `legend-text-N`).
pub fn write_legend(
    scene: &mut Scene,
    entries: &[LegendEntry],
    width: f64,
    height: f64,
    sizer: &dyn TextSizer,
) {
    if entries.is_empty() {
        return;
    }
    let band_width = width * LEGEND_FRACTION;
    let band_x = width - band_width;
    let y_margin = height / 10.0;
    let row_height = ((height - 2.0 * y_margin) / entries.len() as f64).min(MAX_ROW_HEIGHT);
    let inner_x = band_x + band_width / 10.0;
    let inner_width = band_width * 0.8;
    let symbol_width = inner_width * 0.25;
    let gap = band_width * 0.05;

    for (i, entry) in entries.iter().enumerate() {
        let n = i + 1;
        let cy = y_margin + row_height * (i as f64 + 0.5);
        match entry.symbol {
            LegendSymbol::LineSample { width: stroke, style } => scene.push(Line {
                start: (inner_x, cy),
                end: (inner_x + symbol_width, cy),
                width: stroke,
                style,
                color: entry.color,
                name: Some(format!("legend-symbol-{n}")),
            }),
            LegendSymbol::Marker { size } => scene.push(Oval {
                cx: inner_x + symbol_width / 2.0,
                cy,
                width: size,
                height: size,
                line_width: 1.0,
                line_color: Color::BLACK,
                fill: entry.color,
                name: Some(format!("legend-symbol-{n}")),
            }),
            LegendSymbol::Swatch => {
                let side = (row_height * 0.6).min(symbol_width);
                scene.push(Rect {
                    x: inner_x + (symbol_width - side) / 2.0,
                    y: cy - side / 2.0,
                    width: side,
                    height: side,
                    line_width: 1.0,
                    line_color: Color::BLACK,
                    fill: entry.color,
                    opacity: 1.0,
                    name: Some(format!("legend-symbol-{n}")),
                });
            }
        }
        let text_width = inner_width - symbol_width - gap;
        let font = sizer
            .fit_font_size(&entry.label, text_width, row_height * 0.8)
            .min(MAX_LABEL_FONT);
        scene.push(Text {
            x: inner_x + symbol_width + gap,
            y: cy,
            h_align: HAlign::Left,
            v_align: VAlign::Center,
            content: entry.label.clone(),
            font_size: font,
            color: Color::BLACK,
            rotation: None,
            name: Some(format!("legend-text-{n}")),
        });
    }
}
