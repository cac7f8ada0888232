// File: crates/chart-core/src/pie.rs
// Summary: Pie chart: validated share data rendered as arc slices plus legend.

use crate::chart::Chart;
use crate::error::ChartError;
use crate::legend::{self, LegendEntry, LegendSymbol};
use crate::palette::Palette;
use crate::scene::{Arc, Scene, Text};
use crate::text::{HeuristicTextSizer, TextSizer};
use crate::types::{Color, HAlign, VAlign, HEIGHT, MAX_TITLE_FONT, PADDING, WIDTH};

/// A chart of proportional shares. Slices start at 12 o'clock and sweep
/// clockwise in data order.
#[derive(Clone, Debug, PartialEq)]
pub struct PieChart {
    title: String,
    width: f64,
    height: f64,
    horizontal_padding: f64,
    vertical_padding: f64,
    data: Vec<f64>,
    labels: Option<Vec<String>>,
    colors: Vec<Color>,
    legend: bool,
}

impl PieChart {
    /// Pie from positive share values; each slice's sweep is proportional to
    /// its value's share of the total.
    pub fn new(data: Vec<f64>) -> Result<Self, ChartError> {
        if data.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        for &v in &data {
            if !v.is_finite() || v <= 0.0 {
                return Err(ChartError::InvalidSliceValue(v));
            }
        }
        let palette = Palette::default();
        let mut colors = Vec::with_capacity(data.len());
        for slot in 0..data.len() {
            let next = palette.assign(&colors, slot);
            colors.push(next);
        }
        Ok(Self {
            title: String::new(),
            width: WIDTH,
            height: HEIGHT,
            horizontal_padding: PADDING,
            vertical_padding: PADDING,
            data,
            labels: None,
            colors,
            legend: false,
        })
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Attach one label per slice.
    pub fn set_labels(&mut self, labels: Vec<String>) -> Result<(), ChartError> {
        if labels.len() != self.data.len() {
            return Err(ChartError::LabelCount { labels: labels.len(), data: self.data.len() });
        }
        self.labels = Some(labels);
        Ok(())
    }

    /// Replace the palette-assigned slice colors, one per slice.
    pub fn set_colors(&mut self, colors: Vec<Color>) -> Result<(), ChartError> {
        if colors.len() != self.data.len() {
            return Err(ChartError::ColorCount { colors: colors.len(), data: self.data.len() });
        }
        self.colors = colors;
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_size(&mut self, width: f64, height: f64) -> Result<(), ChartError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ChartError::InvalidDimensions { width, height });
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn horizontal_padding(&self) -> f64 {
        self.horizontal_padding
    }

    pub fn vertical_padding(&self) -> f64 {
        self.vertical_padding
    }

    /// Margin fraction on the left and right; rejected outside (0, 0.5).
    pub fn set_horizontal_padding(&mut self, padding: f64) -> Result<(), ChartError> {
        if !(padding > 0.0 && padding < 0.5) {
            return Err(ChartError::InvalidPadding(padding));
        }
        self.horizontal_padding = padding;
        Ok(())
    }

    /// Margin fraction on the top and bottom; rejected outside (0, 0.5).
    pub fn set_vertical_padding(&mut self, padding: f64) -> Result<(), ChartError> {
        if !(padding > 0.0 && padding < 0.5) {
            return Err(ChartError::InvalidPadding(padding));
        }
        self.vertical_padding = padding;
        Ok(())
    }

    pub fn legend(&self) -> bool {
        self.legend
    }

    pub fn set_legend(&mut self, on: bool) {
        self.legend = on;
    }

    /// Render with a caller-supplied text-sizing oracle.
    pub fn render_with(
        &self,
        width: f64,
        height: f64,
        sizer: &dyn TextSizer,
    ) -> Result<Scene, ChartError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ChartError::InvalidDimensions { width, height });
        }
        let mut scene = Scene::new(width, height);
        let cw = if self.legend { width * (1.0 - legend::LEGEND_FRACTION) } else { width };
        let plot_width = cw - 2.0 * self.horizontal_padding * cw;
        let plot_height = height - 2.0 * self.vertical_padding * height;
        let radius = plot_width.min(plot_height) / 2.0;
        let cx = cw / 2.0;
        let cy = self.vertical_padding * height + plot_height / 2.0;

        let total: f64 = self.data.iter().sum();
        let mut start = 0.0;
        for (i, &value) in self.data.iter().enumerate() {
            let sweep = value / total * 360.0;
            scene.push(Arc {
                cx,
                cy,
                radius,
                start_angle: start,
                sweep_angle: sweep,
                fill: self.colors[i],
                name: Some(format!("slice-{}", i + 1)),
            });
            start += sweep;
        }

        let band = self.vertical_padding * height;
        let font = sizer.fit_font_size(&self.title, plot_width, band).min(MAX_TITLE_FONT);
        scene.push(Text {
            x: cw / 2.0,
            y: band / 2.0,
            h_align: HAlign::Center,
            v_align: VAlign::Center,
            content: self.title.clone(),
            font_size: font,
            color: Color::BLACK,
            rotation: None,
            name: Some("title".to_string()),
        });

        if self.legend {
            if let Some(labels) = &self.labels {
                let entries: Vec<LegendEntry> = labels
                    .iter()
                    .zip(&self.colors)
                    .map(|(label, &color)| LegendEntry {
                        label: label.clone(),
                        color,
                        symbol: LegendSymbol::Swatch,
                    })
                    .collect();
                legend::write_legend(&mut scene, &entries, width, height, sizer);
            }
        }

        Ok(scene)
    }
}

impl Chart for PieChart {
    fn title(&self) -> &str {
        &self.title
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn render(&self, width: f64, height: f64) -> Result<Scene, ChartError> {
        self.render_with(width, height, &HeuristicTextSizer)
    }
}
