// File: crates/chart-core/src/axis.rs
// Summary: Data-to-pixel mapping, default limit derivation, and power-of-ten ticks.

use crate::error::ChartError;
use crate::geometry::RectF;

/// Linear interpolation of `value` over `pixel_extent` pixels starting at
/// `pixel_low`. With `invert` the result is mirrored for screen-space y,
/// where pixels grow downward while values grow upward.
pub fn value_to_pixel(
    value: f64,
    value_low: f64,
    value_high: f64,
    pixel_low: f64,
    pixel_extent: f64,
    invert: bool,
) -> Result<f64, ChartError> {
    if value_high == value_low {
        return Err(ChartError::DegenerateRange { low: value_low, high: value_high });
    }
    Ok(project(value, value_low, value_high, pixel_low, pixel_extent, invert))
}

/// Exact inverse of [`value_to_pixel`]; used for cursor read-back.
pub fn pixel_to_value(
    pixel: f64,
    pixel_low: f64,
    pixel_extent: f64,
    value_low: f64,
    value_high: f64,
    invert: bool,
) -> Result<f64, ChartError> {
    if value_high == value_low {
        return Err(ChartError::DegenerateRange { low: value_low, high: value_high });
    }
    if pixel_extent == 0.0 {
        return Err(ChartError::DegenerateRange { low: pixel_low, high: pixel_low });
    }
    Ok(unproject(pixel, pixel_low, pixel_extent, value_low, value_high, invert))
}

#[inline]
fn project(value: f64, lo: f64, hi: f64, px_lo: f64, px_extent: f64, invert: bool) -> f64 {
    let frac = (value - lo) / (hi - lo);
    if invert {
        px_lo + px_extent - frac * px_extent
    } else {
        px_lo + frac * px_extent
    }
}

#[inline]
fn unproject(pixel: f64, px_lo: f64, px_extent: f64, lo: f64, hi: f64, invert: bool) -> f64 {
    let offset = if invert { px_lo + px_extent - pixel } else { pixel - px_lo };
    lo + (offset / px_extent) * (hi - lo)
}

/// Default axis limits from a collection of values: lower bound 0 unless the
/// minimum is negative, upper bound at the maximum. A single distinct value
/// is spread to the neighboring integers so the range never degenerates.
/// An empty collection falls back to the unit range.
pub fn derive_default_limits<I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = f64>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        let lower = if min.floor() < min { min.floor() } else { min - 1.0 };
        let upper = if max.ceil() > max { max.ceil() } else { max + 1.0 };
        return (lower, upper);
    }
    let lower = if min < 0.0 { min } else { 0.0 };
    (lower, max)
}

/// Tick positions between `low` and `high` at a power-of-ten step:
/// `step = 10^floor(log10((high - low) / 1.25))`, first tick aligned to the
/// step at or above `low`, last at or below `high`. The range must be
/// non-degenerate.
pub fn derive_ticks(low: f64, high: f64) -> Result<Vec<f64>, ChartError> {
    let spread = high - low;
    if !spread.is_finite() || spread <= 0.0 {
        return Err(ChartError::DegenerateRange { low, high });
    }
    let step = 10f64.powf((spread / 1.25).log10().floor());
    let mut first = (low / step).floor() * step;
    if first < low {
        first += step;
    }
    let mut ticks = Vec::new();
    for i in 0.. {
        let tick = first + step * i as f64;
        if tick > high {
            break;
        }
        ticks.push(tick);
    }
    Ok(ticks)
}

/// Resolved mapping for one render pass: canvas size, plot area, and both
/// value ranges. Construction rejects degenerate ranges up front so the
/// per-point mapping methods stay infallible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub area: RectF,
    pub x_low: f64,
    pub x_high: f64,
    pub y_low: f64,
    pub y_high: f64,
}

impl Frame {
    pub fn new(
        width: f64,
        height: f64,
        area: RectF,
        x_low: f64,
        x_high: f64,
        y_low: f64,
        y_high: f64,
    ) -> Result<Self, ChartError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ChartError::InvalidDimensions { width, height });
        }
        if !(x_high > x_low) {
            return Err(ChartError::DegenerateRange { low: x_low, high: x_high });
        }
        if !(y_high > y_low) {
            return Err(ChartError::DegenerateRange { low: y_low, high: y_high });
        }
        Ok(Self { width, height, area, x_low, x_high, y_low, y_high })
    }

    #[inline]
    pub fn x_to_pixel(&self, x: f64) -> f64 {
        project(x, self.x_low, self.x_high, self.area.x, self.area.width, false)
    }

    #[inline]
    pub fn y_to_pixel(&self, y: f64) -> f64 {
        project(y, self.y_low, self.y_high, self.area.y, self.area.height, true)
    }

    #[inline]
    pub fn x_from_pixel(&self, px: f64) -> f64 {
        unproject(px, self.area.x, self.area.width, self.x_low, self.x_high, false)
    }

    #[inline]
    pub fn y_from_pixel(&self, py: f64) -> f64 {
        unproject(py, self.area.y, self.area.height, self.y_low, self.y_high, true)
    }
}
