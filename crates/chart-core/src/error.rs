// File: crates/chart-core/src/error.rs
// Summary: Typed error taxonomy for construction, mutation, and geometry failures.

use thiserror::Error;

/// Every failure the core can report. All variants are recoverable and
/// deterministic for the same inputs; mutating calls that return an error
/// leave prior state unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("empty series")]
    EmptySeries,

    #[error("unequal length sequences ({xs} x values, {ys} y values)")]
    UnequalLengths { xs: usize, ys: usize },

    #[error("non-numeric data point ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },

    #[error("cannot remove last point")]
    RemoveLastPoint,

    #[error("no such data point ({x}, {y})")]
    NoSuchPoint { x: f64, y: f64 },

    #[error("axis charts require at least one series")]
    EmptyChart,

    #[error("cannot remove last series")]
    RemoveLastSeries,

    #[error("no such series '{0}'")]
    NoSuchSeries(String),

    #[error("duplicate series name '{0}'")]
    DuplicateSeriesName(String),

    #[error("padding {0} outside the open interval (0, 0.5)")]
    InvalidPadding(f64),

    #[error("lower limit {lower} must be strictly below upper limit {upper}")]
    InvalidLimit { lower: f64, upper: f64 },

    #[error("axis limit {0} is not finite")]
    NonFiniteLimit(f64),

    #[error("tick value {0} is not finite")]
    NonFiniteTick(f64),

    #[error("degenerate axis range [{low}, {high}]")]
    DegenerateRange { low: f64, high: f64 },

    #[error("chart dimensions {width}x{height} must be positive")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("invalid color '{0}' (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("pie slice value {0} must be positive and finite")]
    InvalidSliceValue(f64),

    #[error("number of labels ({labels}) does not match number of data points ({data})")]
    LabelCount { labels: usize, data: usize },

    #[error("number of colors ({colors}) does not match number of data points ({data})")]
    ColorCount { colors: usize, data: usize },

    #[error("moving average window {window} invalid for a series of {len} points")]
    InvalidWindow { window: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ChartError>;
