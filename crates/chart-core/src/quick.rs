// File: crates/chart-core/src/quick.rs
// Summary: One-call chart builders splitting an options bag between series and chart.

use crate::chart::AxisChart;
use crate::datum::Datum;
use crate::error::ChartError;
use crate::series::Series;
use crate::types::{Color, LineStyle};

/// Options for the quick constructors. The first group configures the
/// generated series, the rest the surrounding chart; every field is
/// independently optional.
#[derive(Clone, Debug, Default)]
pub struct QuickOptions {
    pub name: Option<String>,
    pub color: Option<Color>,
    pub line_style: Option<LineStyle>,
    pub line_width: Option<f64>,
    pub marker_size: Option<f64>,

    pub title: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

/// Line chart from raw points in one call.
pub fn line<I, X, Y>(points: I, options: QuickOptions) -> Result<AxisChart, ChartError>
where
    I: IntoIterator<Item = (X, Y)>,
    X: Into<Datum>,
    Y: Into<Datum>,
{
    let series = apply_series_options(Series::line(points)?, &options);
    apply_chart_options(AxisChart::new(series), options)
}

/// Scatter chart from raw points in one call.
pub fn scatter<I, X, Y>(points: I, options: QuickOptions) -> Result<AxisChart, ChartError>
where
    I: IntoIterator<Item = (X, Y)>,
    X: Into<Datum>,
    Y: Into<Datum>,
{
    let series = apply_series_options(Series::scatter(points)?, &options);
    apply_chart_options(AxisChart::new(series), options)
}

fn apply_series_options(mut series: Series, options: &QuickOptions) -> Series {
    if let Some(name) = &options.name {
        series = series.with_name(name.clone());
    }
    if let Some(color) = options.color {
        series = series.with_color(color);
    }
    if let Some(style) = options.line_style {
        series = series.with_line_style(style);
    }
    if let Some(width) = options.line_width {
        series = series.with_line_width(width);
    }
    if let Some(size) = options.marker_size {
        series = series.with_marker_size(size);
    }
    series
}

fn apply_chart_options(
    mut chart: AxisChart,
    options: QuickOptions,
) -> Result<AxisChart, ChartError> {
    if let Some(title) = options.title {
        chart.set_title(title);
    }
    if options.width.is_some() || options.height.is_some() {
        use crate::chart::Chart;
        let width = options.width.unwrap_or_else(|| chart.width());
        let height = options.height.unwrap_or_else(|| chart.height());
        chart.set_size(width, height)?;
    }
    if let Some(label) = options.x_label {
        chart.set_x_label(label);
    }
    if let Some(label) = options.y_label {
        chart.set_y_label(label);
    }
    Ok(chart)
}
