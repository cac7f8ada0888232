// File: crates/chart-core/src/chart.rs
// Summary: Axis chart state and the ordered scene-emission pipeline.

use crate::axis::{self, Frame};
use crate::error::ChartError;
use crate::geometry::RectF;
use crate::legend::{self, LegendEntry, LegendSymbol};
use crate::palette::Palette;
use crate::scene::{Line, Rect, Scene, Text};
use crate::series::{Series, SeriesKind};
use crate::text::{HeuristicTextSizer, TextSizer};
use crate::types::{
    Color, HAlign, LineStyle, VAlign, HEIGHT, MAX_LABEL_FONT, MAX_TITLE_FONT, PADDING, TICK_FONT,
    WIDTH,
};

/// Common surface over chart kinds: each renders its current state into a
/// fresh [`Scene`]. Nothing is cached between calls.
pub trait Chart {
    fn title(&self) -> &str;
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Build the scene at the given pixel dimensions.
    fn render(&self, width: f64, height: f64) -> Result<Scene, ChartError>;

    /// Render at the chart's own default size.
    fn create(&self) -> Result<Scene, ChartError> {
        self.render(self.width(), self.height())
    }
}

/// A chart with x/y axes and one or more data series.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisChart {
    title: String,
    width: f64,
    height: f64,
    horizontal_padding: f64,
    vertical_padding: f64,
    series: Vec<Series>,
    x_label: String,
    y_label: String,
    x_lower: Option<f64>,
    x_upper: Option<f64>,
    y_lower: Option<f64>,
    y_upper: Option<f64>,
    x_tick_override: Option<Vec<f64>>,
    y_tick_override: Option<Vec<f64>>,
    x_grid: bool,
    y_grid: bool,
    legend: bool,
    palette: Palette,
}

impl AxisChart {
    /// Chart with a single initial series; attach more with [`add_series`].
    ///
    /// [`add_series`]: AxisChart::add_series
    pub fn new(series: Series) -> Self {
        let mut chart = Self {
            title: String::new(),
            width: WIDTH,
            height: HEIGHT,
            horizontal_padding: PADDING,
            vertical_padding: PADDING,
            series: Vec::new(),
            x_label: String::new(),
            y_label: String::new(),
            x_lower: None,
            x_upper: None,
            y_lower: None,
            y_upper: None,
            x_tick_override: None,
            y_tick_override: None,
            x_grid: true,
            y_grid: true,
            legend: false,
            palette: Palette::default(),
        };
        chart.attach(series);
        chart
    }

    /// Chart from several series; at least one is required.
    pub fn from_series(series: Vec<Series>) -> Result<Self, ChartError> {
        let mut iter = series.into_iter();
        let first = iter.next().ok_or(ChartError::EmptyChart)?;
        let mut chart = Self::new(first);
        for s in iter {
            chart.add_series(s)?;
        }
        Ok(chart)
    }

    // ---- series -------------------------------------------------------------

    /// Attach a series, assigning the first free palette color when it has
    /// none. Non-empty names must be unique within the chart.
    pub fn add_series(&mut self, series: Series) -> Result<(), ChartError> {
        if let Some(name) = series.name() {
            if self.series.iter().any(|s| s.name() == Some(name)) {
                return Err(ChartError::DuplicateSeriesName(name.to_string()));
            }
        }
        self.attach(series);
        Ok(())
    }

    fn attach(&mut self, mut series: Series) {
        if series.color().is_none() {
            let in_use: Vec<Color> = self.series.iter().filter_map(|s| s.color()).collect();
            series.set_color(self.palette.assign(&in_use, self.series.len()));
        }
        self.series.push(series);
    }

    /// Detach and return the named series; the last series cannot be removed.
    pub fn remove_series(&mut self, name: &str) -> Result<Series, ChartError> {
        let index = self
            .series
            .iter()
            .position(|s| s.name() == Some(name))
            .ok_or_else(|| ChartError::NoSuchSeries(name.to_string()))?;
        if self.series.len() == 1 {
            return Err(ChartError::RemoveLastSeries);
        }
        Ok(self.series.remove(index))
    }

    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name() == Some(name))
    }

    pub fn series_named_mut(&mut self, name: &str) -> Option<&mut Series> {
        self.series.iter_mut().find(|s| s.name() == Some(name))
    }

    pub fn all_series(&self) -> &[Series] {
        &self.series
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    // ---- appearance ---------------------------------------------------------

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Default render size used by [`Chart::create`].
    pub fn set_size(&mut self, width: f64, height: f64) -> Result<(), ChartError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ChartError::InvalidDimensions { width, height });
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn set_x_label(&mut self, label: impl Into<String>) {
        self.x_label = label.into();
    }

    pub fn set_y_label(&mut self, label: impl Into<String>) {
        self.y_label = label.into();
    }

    pub fn legend(&self) -> bool {
        self.legend
    }

    pub fn set_legend(&mut self, on: bool) {
        self.legend = on;
    }

    pub fn grid(&self) -> (bool, bool) {
        (self.x_grid, self.y_grid)
    }

    pub fn set_grid(&mut self, x: bool, y: bool) {
        self.x_grid = x;
        self.y_grid = y;
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

    // ---- limits and ticks ---------------------------------------------------

    /// Effective x lower bound: the explicit override, else the derived default.
    pub fn x_lower_limit(&self) -> f64 {
        self.x_lower.unwrap_or_else(|| self.derived_x_limits().0)
    }

    pub fn x_upper_limit(&self) -> f64 {
        self.x_upper.unwrap_or_else(|| self.derived_x_limits().1)
    }

    pub fn y_lower_limit(&self) -> f64 {
        self.y_lower.unwrap_or_else(|| self.derived_y_limits().0)
    }

    pub fn y_upper_limit(&self) -> f64 {
        self.y_upper.unwrap_or_else(|| self.derived_y_limits().1)
    }

    fn derived_x_limits(&self) -> (f64, f64) {
        axis::derive_default_limits(self.series.iter().flat_map(|s| s.x_values()))
    }

    fn derived_y_limits(&self) -> (f64, f64) {
        axis::derive_default_limits(self.series.iter().flat_map(|s| s.y_values()))
    }

    /// Set the x lower bound. Validated against the upper bound as it stands
    /// right now; later mutations are not re-checked, so an inconsistent pair
    /// surfaces as a degenerate-range error at render time.
    pub fn set_x_lower_limit(&mut self, value: f64) -> Result<(), ChartError> {
        let upper = self.x_upper_limit();
        Self::check_limit_pair(value, upper)?;
        self.x_lower = Some(value);
        Ok(())
    }

    pub fn set_x_upper_limit(&mut self, value: f64) -> Result<(), ChartError> {
        let lower = self.x_lower_limit();
        Self::check_limit_pair(lower, value)?;
        self.x_upper = Some(value);
        Ok(())
    }

    pub fn set_y_lower_limit(&mut self, value: f64) -> Result<(), ChartError> {
        let upper = self.y_upper_limit();
        Self::check_limit_pair(value, upper)?;
        self.y_lower = Some(value);
        Ok(())
    }

    pub fn set_y_upper_limit(&mut self, value: f64) -> Result<(), ChartError> {
        let lower = self.y_lower_limit();
        Self::check_limit_pair(lower, value)?;
        self.y_upper = Some(value);
        Ok(())
    }

    fn check_limit_pair(lower: f64, upper: f64) -> Result<(), ChartError> {
        if !lower.is_finite() {
            return Err(ChartError::NonFiniteLimit(lower));
        }
        if !upper.is_finite() {
            return Err(ChartError::NonFiniteLimit(upper));
        }
        if lower >= upper {
            return Err(ChartError::InvalidLimit { lower, upper });
        }
        Ok(())
    }

    /// Drop explicit x bounds, returning the axis to derived defaults.
    pub fn clear_x_limits(&mut self) {
        self.x_lower = None;
        self.x_upper = None;
    }

    pub fn clear_y_limits(&mut self) {
        self.y_lower = None;
        self.y_upper = None;
    }

    /// X tick positions: the override if set, else derived from the limits.
    pub fn x_ticks(&self) -> Result<Vec<f64>, ChartError> {
        match &self.x_tick_override {
            Some(ticks) => Ok(ticks.clone()),
            None => axis::derive_ticks(self.x_lower_limit(), self.x_upper_limit()),
        }
    }

    pub fn y_ticks(&self) -> Result<Vec<f64>, ChartError> {
        match &self.y_tick_override {
            Some(ticks) => Ok(ticks.clone()),
            None => axis::derive_ticks(self.y_lower_limit(), self.y_upper_limit()),
        }
    }

    /// Override the derived x ticks. Values must be finite; stored sorted.
    pub fn set_x_ticks(&mut self, mut ticks: Vec<f64>) -> Result<(), ChartError> {
        if let Some(&bad) = ticks.iter().find(|t| !t.is_finite()) {
            return Err(ChartError::NonFiniteTick(bad));
        }
        ticks.sort_by(f64::total_cmp);
        self.x_tick_override = Some(ticks);
        Ok(())
    }

    pub fn set_y_ticks(&mut self, mut ticks: Vec<f64>) -> Result<(), ChartError> {
        if let Some(&bad) = ticks.iter().find(|t| !t.is_finite()) {
            return Err(ChartError::NonFiniteTick(bad));
        }
        ticks.sort_by(f64::total_cmp);
        self.y_tick_override = Some(ticks);
        Ok(())
    }

    pub fn clear_x_ticks(&mut self) {
        self.x_tick_override = None;
    }

    pub fn clear_y_ticks(&mut self) {
        self.y_tick_override = None;
    }

    // ---- geometry -----------------------------------------------------------

    /// Width left for the plot once the legend band, if shown, takes the
    /// right quarter of the canvas.
    fn chart_area_width(&self, width: f64) -> f64 {
        if self.legend {
            width * (1.0 - legend::LEGEND_FRACTION)
        } else {
            width
        }
    }

    /// Resolve the mapping geometry for a render at `width` x `height`.
    pub fn frame(&self, width: f64, height: f64) -> Result<Frame, ChartError> {
        let cw = self.chart_area_width(width);
        let area = RectF::from_xywh(
            self.horizontal_padding * cw,
            self.vertical_padding * height,
            cw - 2.0 * self.horizontal_padding * cw,
            height - 2.0 * self.vertical_padding * height,
        );
        Frame::new(
            width,
            height,
            area,
            self.x_lower_limit(),
            self.x_upper_limit(),
            self.y_lower_limit(),
            self.y_upper_limit(),
        )
    }

    // ---- rendering ----------------------------------------------------------

    /// Render with a caller-supplied text-sizing oracle.
    pub fn render_with(
        &self,
        width: f64,
        height: f64,
        sizer: &dyn TextSizer,
    ) -> Result<Scene, ChartError> {
        let frame = self.frame(width, height)?;
        let mut scene = Scene::new(width, height);

        // 1. Series bodies, in insertion order.
        for (i, series) in self.series.iter().enumerate() {
            series.write_to_scene(&mut scene, &frame, &format!("series{}", i + 1));
        }

        // 2. Blocking rectangles over the margins; stand-in for clipping.
        self.write_blocks(&mut scene, &frame);

        // 3. Title, above the blocks, centered in the top margin.
        self.write_title(&mut scene, &frame, sizer);

        // 4. Axes rectangle, outline only.
        scene.push(Rect {
            x: frame.area.x,
            y: frame.area.y,
            width: frame.area.width,
            height: frame.area.height,
            line_width: 1.0,
            line_color: Color::BLACK,
            fill: Color::WHITE,
            opacity: 0.0,
            name: Some("axes".to_string()),
        });

        // 5. Axis labels, half a margin from the canvas edges.
        self.write_axis_labels(&mut scene, &frame, sizer);

        // 6. Tick labels, with grid lines pushed underneath everything.
        self.write_ticks(&mut scene, &frame)?;

        // 7. Legend rows on the right.
        if self.legend {
            self.write_legend_rows(&mut scene, width, height, sizer);
        }

        Ok(scene)
    }

    fn write_blocks(&self, scene: &mut Scene, frame: &Frame) {
        let (w, h) = (frame.width, frame.height);
        let area = frame.area;
        let bg = scene.background;
        let blocks = [
            ("block-west", 0.0, 0.0, area.x, h),
            ("block-north", 0.0, 0.0, w, area.y),
            ("block-east", area.right(), 0.0, w - area.right(), h),
            ("block-south", 0.0, area.bottom(), w, h - area.bottom()),
        ];
        for (name, x, y, bw, bh) in blocks {
            scene.push(Rect {
                x,
                y,
                width: bw,
                height: bh,
                line_width: 0.0,
                line_color: bg,
                fill: bg,
                opacity: 1.0,
                name: Some(name.to_string()),
            });
        }
    }

    fn write_title(&self, scene: &mut Scene, frame: &Frame, sizer: &dyn TextSizer) {
        let cw = self.chart_area_width(frame.width);
        let band = frame.area.y;
        let font = sizer
            .fit_font_size(&self.title, frame.area.width, band)
            .min(MAX_TITLE_FONT);
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
    }

    fn write_axis_labels(&self, scene: &mut Scene, frame: &Frame, sizer: &dyn TextSizer) {
        let area = frame.area;
        if !self.x_label.is_empty() {
            let margin = frame.height - area.bottom();
            let font = sizer
                .fit_font_size(&self.x_label, area.width, margin / 2.0)
                .min(MAX_LABEL_FONT);
            scene.push(Text {
                x: area.x + area.width / 2.0,
                y: frame.height - margin / 2.0,
                h_align: HAlign::Center,
                v_align: VAlign::Center,
                content: self.x_label.clone(),
                font_size: font,
                color: Color::BLACK,
                rotation: None,
                name: Some("x-label".to_string()),
            });
        }
        if !self.y_label.is_empty() {
            // Rotated 270 degrees, so the run of the text is vertical.
            let font = sizer
                .fit_font_size(&self.y_label, area.height, area.x / 2.0)
                .min(MAX_LABEL_FONT);
            scene.push(Text {
                x: area.x / 2.0,
                y: area.y + area.height / 2.0,
                h_align: HAlign::Center,
                v_align: VAlign::Center,
                content: self.y_label.clone(),
                font_size: font,
                color: Color::BLACK,
                rotation: Some(270.0),
                name: Some("y-label".to_string()),
            });
        }
    }

    fn write_ticks(&self, scene: &mut Scene, frame: &Frame) -> Result<(), ChartError> {
        let area = frame.area;
        for tick in self.x_ticks()? {
            let px = frame.x_to_pixel(tick);
            scene.push(Text {
                x: px,
                y: area.bottom() + (frame.height - area.bottom()) * 0.25,
                h_align: HAlign::Center,
                v_align: VAlign::Center,
                content: format_tick(tick),
                font_size: TICK_FONT,
                color: Color::BLACK,
                rotation: None,
                name: None,
            });
            if self.x_grid {
                scene.push_front(Line {
                    start: (px, area.y),
                    end: (px, area.bottom()),
                    width: 1.0,
                    style: LineStyle::Dashed,
                    color: Color::GRID,
                    name: Some("x-gridline".to_string()),
                });
            }
        }
        for tick in self.y_ticks()? {
            let py = frame.y_to_pixel(tick);
            scene.push(Text {
                x: area.x * 0.9,
                y: py,
                h_align: HAlign::Right,
                v_align: VAlign::Center,
                content: format_tick(tick),
                font_size: TICK_FONT,
                color: Color::BLACK,
                rotation: None,
                name: None,
            });
            if self.y_grid {
                scene.push_front(Line {
                    start: (area.x, py),
                    end: (area.right(), py),
                    width: 1.0,
                    style: LineStyle::Dashed,
                    color: Color::GRID,
                    name: Some("y-gridline".to_string()),
                });
            }
        }
        Ok(())
    }

    fn write_legend_rows(&self, scene: &mut Scene, width: f64, height: f64, sizer: &dyn TextSizer) {
        let entries: Vec<LegendEntry> = self
            .series
            .iter()
            .filter_map(|s| {
                let label = s.name()?.to_string();
                let symbol = match s.kind() {
                    SeriesKind::Line => LegendSymbol::LineSample {
                        width: s.line_width(),
                        style: s.line_style(),
                    },
                    SeriesKind::Scatter => LegendSymbol::Marker { size: s.marker_size() },
                    SeriesKind::Bar => LegendSymbol::Swatch,
                };
                Some(LegendEntry { label, color: s.color().unwrap_or(Color::BLACK), symbol })
            })
            .collect();
        legend::write_legend(scene, &entries, width, height, sizer);
    }
}

impl Chart for AxisChart {
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

fn format_tick(tick: f64) -> String {
    // Collapse negative zero so labels never read "-0".
    let tick = if tick == 0.0 { 0.0 } else { tick };
    format!("{tick}")
}
