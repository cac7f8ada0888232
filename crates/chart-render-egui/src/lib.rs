// File: crates/chart-render-egui/src/lib.rs
// Summary: Paint scenes through an egui painter, plus an interactive chart widget.

use chart_core::{AxisChart, Chart, Graphic, HAlign, LineStyle, Scene, TextSizer, VAlign};
use egui::epaint::{EllipseShape, TextShape};
use egui::{
    pos2, vec2, Align, Align2, Color32, FontId, Mesh, Painter, Pos2, Rect, Response, Sense, Shape,
    Stroke, Ui, Vec2, Widget,
};

/// Paint every primitive of `scene` onto `painter`, offset by `origin`.
/// The background fills the scene's own width and height.
pub fn paint_scene(painter: &Painter, scene: &Scene, origin: Pos2) {
    let at = |x: f64, y: f64| pos2(origin.x + x as f32, origin.y + y as f32);
    painter.rect_filled(
        Rect::from_min_size(origin, vec2(scene.width as f32, scene.height as f32)),
        0.0,
        color32(scene.background),
    );
    for graphic in scene.iter() {
        match graphic {
            Graphic::Line(line) => {
                let points = [at(line.start.0, line.start.1), at(line.end.0, line.end.1)];
                let stroke = Stroke::new(line.width as f32, color32(line.color));
                match line.style {
                    LineStyle::Solid => {
                        painter.line_segment(points, stroke);
                    }
                    LineStyle::Dashed => painter.extend(Shape::dashed_line(&points, stroke, 6.0, 4.0)),
                    LineStyle::Dotted => painter.extend(Shape::dashed_line(&points, stroke, 2.0, 4.0)),
                }
            }
            Graphic::Rect(rect) => {
                let bounds =
                    Rect::from_min_size(at(rect.x, rect.y), vec2(rect.width as f32, rect.height as f32));
                painter.rect(
                    bounds,
                    0.0,
                    fill32(rect.fill, rect.opacity),
                    stroke_of(rect.line_width, rect.line_color),
                );
            }
            Graphic::Text(text) => paint_text(painter, text, origin),
            Graphic::Oval(oval) => {
                painter.add(EllipseShape {
                    center: at(oval.cx, oval.cy),
                    radius: vec2((oval.width / 2.0) as f32, (oval.height / 2.0) as f32),
                    fill: color32(oval.fill),
                    stroke: stroke_of(oval.line_width, oval.line_color),
                });
            }
            Graphic::Arc(arc) => {
                painter.add(slice_mesh(arc, origin));
            }
        }
    }
    log::trace!("painted {} primitives", scene.len());
}

fn paint_text(painter: &Painter, text: &chart_core::Text, origin: Pos2) {
    if text.content.is_empty() {
        return;
    }
    let pos = pos2(origin.x + text.x as f32, origin.y + text.y as f32);
    let font = FontId::proportional(text.font_size as f32);
    let color = color32(text.color);
    match text.rotation {
        None => {
            painter.text(pos, anchor2(text.h_align, text.v_align), &text.content, font, color);
        }
        Some(degrees) => {
            let galley = painter.layout_no_wrap(text.content.clone(), font, color);
            let size = galley.size();
            // The galley rotates about its own top-left corner. Place that
            // corner so the rotated anchor point lands on the target.
            let anchor =
                vec2(align_fraction_h(text.h_align) * size.x, align_fraction_v(text.v_align) * size.y);
            let radians = degrees.to_radians() as f32;
            let (sin, cos) = radians.sin_cos();
            let rotated = vec2(cos * anchor.x - sin * anchor.y, sin * anchor.x + cos * anchor.y);
            painter.add(TextShape::new(pos - rotated, galley, color).with_angle(radians));
        }
    }
}

/// Triangle fan approximating a filled circular sector.
fn slice_mesh(arc: &chart_core::Arc, origin: Pos2) -> Shape {
    let center = pos2(origin.x + arc.cx as f32, origin.y + arc.cy as f32);
    let fill = color32(arc.fill);
    let steps = (arc.sweep_angle.abs() / 5.0).ceil().max(1.0) as u32;
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, fill);
    for i in 0..=steps {
        let angle = (arc.start_angle + arc.sweep_angle * f64::from(i) / f64::from(steps)).to_radians();
        mesh.colored_vertex(
            pos2(
                center.x + arc.radius as f32 * angle.sin() as f32,
                center.y - arc.radius as f32 * angle.cos() as f32,
            ),
            fill,
        );
    }
    for i in 1..=steps {
        mesh.add_triangle(0, i, i + 1);
    }
    Shape::mesh(mesh)
}

// ---- conversions ------------------------------------------------------------

fn color32(c: chart_core::Color) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

fn fill32(c: chart_core::Color, opacity: f64) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, alpha)
}

fn stroke_of(width: f64, color: chart_core::Color) -> Stroke {
    if width > 0.0 {
        Stroke::new(width as f32, color32(color))
    } else {
        Stroke::NONE
    }
}

fn anchor2(h: HAlign, v: VAlign) -> Align2 {
    let h = match h {
        HAlign::Left => Align::Min,
        HAlign::Center => Align::Center,
        HAlign::Right => Align::Max,
    };
    let v = match v {
        VAlign::Top => Align::Min,
        VAlign::Center => Align::Center,
        VAlign::Bottom => Align::Max,
    };
    Align2([h, v])
}

fn align_fraction_h(h: HAlign) -> f32 {
    match h {
        HAlign::Left => 0.0,
        HAlign::Center => 0.5,
        HAlign::Right => 1.0,
    }
}

fn align_fraction_v(v: VAlign) -> f32 {
    match v {
        VAlign::Top => 0.0,
        VAlign::Center => 0.5,
        VAlign::Bottom => 1.0,
    }
}

// ---- text sizing ------------------------------------------------------------

/// Sizing oracle backed by egui's font atlas, for metric-true label fitting.
pub struct EguiTextSizer {
    ctx: egui::Context,
}

impl EguiTextSizer {
    pub fn new(ctx: &egui::Context) -> Self {
        Self { ctx: ctx.clone() }
    }
}

impl TextSizer for EguiTextSizer {
    fn fit_font_size(&self, text: &str, max_width: f64, max_height: f64) -> f64 {
        const PROBE: f32 = 16.0;
        let size = self.ctx.fonts(|fonts| {
            fonts
                .layout_no_wrap(text.to_owned(), FontId::proportional(PROBE), Color32::PLACEHOLDER)
                .size()
        });
        if !(size.x > 0.0 && size.y > 0.0) {
            return max_height.max(1.0);
        }
        let scale = (max_width / f64::from(size.x)).min(max_height / f64::from(size.y));
        (f64::from(PROBE) * scale).max(1.0)
    }
}

// ---- widget -----------------------------------------------------------------

const MIN_SIZE: Vec2 = Vec2 { x: 200.0, y: 150.0 };

/// Chart widget filling the available space. Axis charts built through
/// [`ChartView::with_hover`] report the data-space cursor position as a
/// hover tooltip.
pub struct ChartView<'a> {
    chart: &'a dyn Chart,
    axis: Option<&'a AxisChart>,
}

impl<'a> ChartView<'a> {
    /// View over any chart kind.
    pub fn new(chart: &'a dyn Chart) -> Self {
        Self { chart, axis: None }
    }

    /// View over an axis chart with cursor read-back.
    pub fn with_hover(chart: &'a AxisChart) -> Self {
        Self { chart, axis: Some(chart) }
    }
}

impl Widget for ChartView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired = ui.available_size().max(MIN_SIZE);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::hover());
        if !ui.is_rect_visible(rect) {
            return response;
        }
        let (width, height) = (f64::from(rect.width()), f64::from(rect.height()));
        let scene = match self.axis {
            Some(axis) => axis.render_with(width, height, &EguiTextSizer::new(ui.ctx())),
            None => self.chart.render(width, height),
        };
        let scene = match scene {
            Ok(scene) => scene,
            Err(err) => {
                log::warn!("chart render failed: {err}");
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    err.to_string(),
                    FontId::proportional(14.0),
                    ui.visuals().error_fg_color,
                );
                return response;
            }
        };
        paint_scene(&ui.painter_at(rect), &scene, rect.min);

        if let (Some(axis), Some(pointer)) = (self.axis, response.hover_pos()) {
            if let Ok(frame) = axis.frame(width, height) {
                let px = f64::from(pointer.x - rect.min.x);
                let py = f64::from(pointer.y - rect.min.y);
                if frame.area.contains(px, py) {
                    let x = frame.x_from_pixel(px);
                    let y = frame.y_from_pixel(py);
                    return response.on_hover_text(format!("x = {x:.3}\ny = {y:.3}"));
                }
            }
        }
        response
    }
}
