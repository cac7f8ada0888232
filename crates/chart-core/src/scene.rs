// File: crates/chart-core/src/scene.rs
// Summary: Backend-neutral graphics model: an ordered list of named drawing primitives.

use crate::types::{Color, HAlign, LineStyle, VAlign};

/// Straight stroke between two pixel positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub width: f64,
    pub style: LineStyle,
    pub color: Color,
    pub name: Option<String>,
}

/// Axis-aligned rectangle. `opacity` applies to the fill only; 0.0 leaves
/// just the outline.
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub line_width: f64,
    pub line_color: Color,
    pub fill: Color,
    pub opacity: f64,
    pub name: Option<String>,
}

/// Anchored text. `rotation` is in degrees, clockwise about (x, y).
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub content: String,
    pub font_size: f64,
    pub color: Color,
    pub rotation: Option<f64>,
    pub name: Option<String>,
}

/// Ellipse centered on (cx, cy). Scatter markers are circular ovals.
#[derive(Clone, Debug, PartialEq)]
pub struct Oval {
    pub cx: f64,
    pub cy: f64,
    pub width: f64,
    pub height: f64,
    pub line_width: f64,
    pub line_color: Color,
    pub fill: Color,
    pub name: Option<String>,
}

/// Filled circular sector (pie slice). Angles are in degrees with 0 at
/// 12 o'clock; positive sweeps run clockwise.
#[derive(Clone, Debug, PartialEq)]
pub struct Arc {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub fill: Color,
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Graphic {
    Line(Line),
    Rect(Rect),
    Text(Text),
    Oval(Oval),
    Arc(Arc),
}

impl Graphic {
    pub fn name(&self) -> Option<&str> {
        match self {
            Graphic::Line(g) => g.name.as_deref(),
            Graphic::Rect(g) => g.name.as_deref(),
            Graphic::Text(g) => g.name.as_deref(),
            Graphic::Oval(g) => g.name.as_deref(),
            Graphic::Arc(g) => g.name.as_deref(),
        }
    }
}

impl From<Line> for Graphic {
    fn from(g: Line) -> Self {
        Graphic::Line(g)
    }
}
impl From<Rect> for Graphic {
    fn from(g: Rect) -> Self {
        Graphic::Rect(g)
    }
}
impl From<Text> for Graphic {
    fn from(g: Text) -> Self {
        Graphic::Text(g)
    }
}
impl From<Oval> for Graphic {
    fn from(g: Oval) -> Self {
        Graphic::Oval(g)
    }
}
impl From<Arc> for Graphic {
    fn from(g: Arc) -> Self {
        Graphic::Arc(g)
    }
}

/// One render pass' output: canvas size, background, and primitives in
/// paint order. Earlier entries are visually underneath later ones.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    graphics: Vec<Graphic>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, background: Color::WHITE, graphics: Vec::new() }
    }

    /// Append a primitive on top of everything emitted so far.
    pub fn push(&mut self, graphic: impl Into<Graphic>) {
        self.graphics.push(graphic.into());
    }

    /// Insert a primitive underneath everything emitted so far.
    pub fn push_front(&mut self, graphic: impl Into<Graphic>) {
        self.graphics.insert(0, graphic.into());
    }

    pub fn graphics(&self) -> &[Graphic] {
        &self.graphics
    }

    pub fn len(&self) -> usize {
        self.graphics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphics.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Graphic> {
        self.graphics.get(index)
    }

    /// First primitive carrying `name`.
    pub fn get_by_name(&self, name: &str) -> Option<&Graphic> {
        self.graphics.iter().find(|g| g.name() == Some(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Graphic> {
        self.graphics.iter()
    }
}
