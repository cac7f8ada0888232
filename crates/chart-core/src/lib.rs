// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart, series, axis, and scene API.

pub mod chart;
pub mod pie;
pub mod series;
pub mod axis;
pub mod quick;
pub mod scene;
pub mod palette;
pub mod legend;
pub mod datum;
pub mod text;
pub mod types;
pub mod geometry;
pub mod error;

pub use axis::{derive_default_limits, derive_ticks, pixel_to_value, value_to_pixel, Frame};
pub use chart::{AxisChart, Chart};
pub use datum::Datum;
pub use error::{ChartError, Result};
pub use geometry::RectF;
pub use legend::{LegendEntry, LegendSymbol};
pub use palette::{Palette, PALETTE};
pub use pie::PieChart;
pub use quick::QuickOptions;
pub use scene::{Arc, Graphic, Line, Oval, Rect, Scene, Text};
pub use series::{Point, Series, SeriesKind};
pub use text::{HeuristicTextSizer, TextSizer};
pub use types::{Color, HAlign, LineStyle, VAlign, HEIGHT, PADDING, WIDTH};
