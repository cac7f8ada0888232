// File: crates/chart-core/src/series.rs
// Summary: Validated, x-sorted data series with per-kind scene emission.

use std::cmp::Ordering;

use crate::axis::Frame;
use crate::datum::Datum;
use crate::error::ChartError;
use crate::scene::{Line, Oval, Rect, Scene};
use crate::types::{Color, LineStyle};

/// How a series draws its points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Scatter,
    Bar,
}

/// One data point; both coordinates are finite by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: Datum,
    pub y: Datum,
}

/// An ordered run of points plus its display attributes. Points stay sorted
/// ascending by x; ties keep insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    kind: SeriesKind,
    points: Vec<Point>,
    name: Option<String>,
    color: Option<Color>,
    line_width: f64,
    line_style: LineStyle,
    marker_size: f64,
    bar_width: f64,
    resorts: usize,
}

impl Series {
    /// Line series from (x, y) pairs. Stroke width defaults to 2, solid.
    pub fn line<I, X, Y>(points: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = (X, Y)>,
        X: Into<Datum>,
        Y: Into<Datum>,
    {
        Self::with_kind(SeriesKind::Line, points)
    }

    /// Scatter series from (x, y) pairs. Markers default to size 5 with a
    /// width-1 outline.
    pub fn scatter<I, X, Y>(points: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = (X, Y)>,
        X: Into<Datum>,
        Y: Into<Datum>,
    {
        Self::with_kind(SeriesKind::Scatter, points)
    }

    /// Bar series from (x, y) pairs. Bars are one data unit wide by default
    /// and rise from the x axis.
    pub fn bar<I, X, Y>(points: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = (X, Y)>,
        X: Into<Datum>,
        Y: Into<Datum>,
    {
        Self::with_kind(SeriesKind::Bar, points)
    }

    pub fn with_kind<I, X, Y>(kind: SeriesKind, points: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = (X, Y)>,
        X: Into<Datum>,
        Y: Into<Datum>,
    {
        let points = points
            .into_iter()
            .map(|(x, y)| Point { x: x.into(), y: y.into() })
            .collect();
        Self::from_points(kind, points)
    }

    /// Series from two parallel columns; lengths must match.
    pub fn from_columns<X, Y>(kind: SeriesKind, xs: Vec<X>, ys: Vec<Y>) -> Result<Self, ChartError>
    where
        X: Into<Datum>,
        Y: Into<Datum>,
    {
        if xs.len() != ys.len() {
            return Err(ChartError::UnequalLengths { xs: xs.len(), ys: ys.len() });
        }
        let points = xs
            .into_iter()
            .zip(ys)
            .map(|(x, y)| Point { x: x.into(), y: y.into() })
            .collect();
        Self::from_points(kind, points)
    }

    fn from_points(kind: SeriesKind, mut points: Vec<Point>) -> Result<Self, ChartError> {
        if points.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        for p in &points {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(ChartError::NonFinitePoint { x: p.x.value(), y: p.y.value() });
            }
        }
        sort_points(&mut points);
        let line_width = match kind {
            SeriesKind::Line => 2.0,
            SeriesKind::Scatter | SeriesKind::Bar => 1.0,
        };
        Ok(Self {
            kind,
            points,
            name: None,
            color: None,
            line_width,
            line_style: LineStyle::Solid,
            marker_size: 5.0,
            bar_width: 1.0,
            resorts: 0,
        })
    }

    // ---- builders -----------------------------------------------------------

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    pub fn with_marker_size(mut self, size: f64) -> Self {
        self.marker_size = size;
        self
    }

    pub fn with_bar_width(mut self, width: f64) -> Self {
        self.bar_width = width;
        self
    }

    // ---- accessors ----------------------------------------------------------

    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    pub fn marker_size(&self) -> f64 {
        self.marker_size
    }

    pub fn bar_width(&self) -> f64 {
        self.bar_width
    }

    /// How many appends have forced a re-sort so far.
    pub fn resorts(&self) -> usize {
        self.resorts
    }

    pub fn x_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x.value())
    }

    pub fn y_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y.value())
    }

    // ---- mutation -----------------------------------------------------------

    /// Append one point, re-sorting only when it lands out of order.
    pub fn add_point(&mut self, x: impl Into<Datum>, y: impl Into<Datum>) -> Result<(), ChartError> {
        let p = Point { x: x.into(), y: y.into() };
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(ChartError::NonFinitePoint { x: p.x.value(), y: p.y.value() });
        }
        let in_order = self
            .points
            .last()
            .map_or(true, |last| last.x.cmp_value(&p.x) != Ordering::Greater);
        self.points.push(p);
        if !in_order {
            sort_points(&mut self.points);
            self.resorts += 1;
        }
        Ok(())
    }

    /// Remove the first point equal to (x, y). A series never becomes empty.
    pub fn remove_point(&mut self, x: impl Into<Datum>, y: impl Into<Datum>) -> Result<(), ChartError> {
        let x = x.into();
        let y = y.into();
        let index = self
            .points
            .iter()
            .position(|p| p.x == x && p.y == y)
            .ok_or(ChartError::NoSuchPoint { x: x.value(), y: y.value() })?;
        if self.points.len() == 1 {
            return Err(ChartError::RemoveLastPoint);
        }
        self.points.remove(index);
        Ok(())
    }

    // ---- derived data -------------------------------------------------------

    /// Pixel position of every point under `frame`, in point order.
    pub fn canvas_points(&self, frame: &Frame) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (frame.x_to_pixel(p.x.value()), frame.y_to_pixel(p.y.value())))
            .collect()
    }

    /// Trailing moving average of the y values as a new black line series.
    /// The result starts `window - 1` points into this series.
    pub fn moving_average(&self, window: usize) -> Result<Series, ChartError> {
        if window < 2 || window > self.points.len() {
            return Err(ChartError::InvalidWindow { window, len: self.points.len() });
        }
        let mut points = Vec::with_capacity(self.points.len() - window + 1);
        for i in (window - 1)..self.points.len() {
            let sum: f64 = self.points[i + 1 - window..=i].iter().map(|p| p.y.value()).sum();
            points.push(Point { x: self.points[i].x, y: Datum::Number(sum / window as f64) });
        }
        let name = match &self.name {
            Some(n) => format!("{n} moving average"),
            None => "moving average".to_string(),
        };
        Ok(Series {
            kind: SeriesKind::Line,
            points,
            name: Some(name),
            color: Some(Color::BLACK),
            line_width: 2.0,
            line_style: LineStyle::Solid,
            marker_size: 5.0,
            bar_width: 1.0,
            resorts: 0,
        })
    }

    // ---- emission -----------------------------------------------------------

    /// Emit this series' primitives into the scene under the chart-assigned
    /// identity (`series1`, `series2`, ...).
    pub(crate) fn write_to_scene(&self, scene: &mut Scene, frame: &Frame, name: &str) {
        let color = self.color.unwrap_or(Color::BLACK);
        let pixels = self.canvas_points(frame);
        match self.kind {
            SeriesKind::Line => {
                for pair in pixels.windows(2) {
                    scene.push(Line {
                        start: pair[0],
                        end: pair[1],
                        width: self.line_width,
                        style: self.line_style,
                        color,
                        name: Some(name.to_string()),
                    });
                }
            }
            SeriesKind::Scatter => {
                for (cx, cy) in pixels {
                    scene.push(Oval {
                        cx,
                        cy,
                        width: self.marker_size,
                        height: self.marker_size,
                        line_width: self.line_width,
                        line_color: Color::BLACK,
                        fill: color,
                        name: Some(name.to_string()),
                    });
                }
            }
            SeriesKind::Bar => {
                // Bars rise from the x axis, or from the nearest plot edge
                // when zero is outside the y range.
                let base = frame.y_to_pixel(0.0f64.clamp(frame.y_low, frame.y_high));
                let half = self.bar_width / 2.0;
                for p in &self.points {
                    let left = frame.x_to_pixel(p.x.value() - half);
                    let right = frame.x_to_pixel(p.x.value() + half);
                    let py = frame.y_to_pixel(p.y.value());
                    scene.push(Rect {
                        x: left,
                        y: py.min(base),
                        width: right - left,
                        height: (py - base).abs(),
                        line_width: self.line_width,
                        line_color: Color::BLACK,
                        fill: color,
                        opacity: 1.0,
                        name: Some(name.to_string()),
                    });
                }
            }
        }
    }
}

fn sort_points(points: &mut [Point]) {
    points.sort_by(|a, b| a.x.cmp_value(&b.x));
}
