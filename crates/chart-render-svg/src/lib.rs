// File: crates/chart-render-svg/src/lib.rs
// Summary: Serialize a scene into a standalone SVG document, one tag per primitive.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chart_core::{Arc, Color, Graphic, HAlign, LineStyle, Scene, VAlign};

/// Serialize `scene` into a complete SVG document. The background rectangle
/// comes first, then one tag per primitive in paint order, so the string is
/// byte-identical for equal scenes.
pub fn scene_to_svg(scene: &Scene) -> String {
    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.2} {:.2}" font-family="sans-serif">"#,
        scene.width, scene.height, scene.width, scene.height
    )
    .unwrap();
    writeln!(
        svg,
        r#"  <rect x="0.00" y="0.00" width="{:.2}" height="{:.2}" fill="{}"/>"#,
        scene.width,
        scene.height,
        scene.background.to_hex()
    )
    .unwrap();
    for graphic in scene.iter() {
        write_graphic(&mut svg, graphic);
    }
    writeln!(svg, "</svg>").unwrap();
    svg
}

/// Serialize and write the scene to `path`.
pub fn save(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, scene_to_svg(scene))
        .with_context(|| format!("writing SVG to {}", path.display()))
}

fn write_graphic(svg: &mut String, graphic: &Graphic) {
    match graphic {
        Graphic::Line(line) => {
            writeln!(
                svg,
                r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"{}/>"#,
                line.start.0,
                line.start.1,
                line.end.0,
                line.end.1,
                stroke_attrs(line.width, line.color, line.style)
            )
            .unwrap();
        }
        Graphic::Rect(rect) => {
            writeln!(
                svg,
                r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" fill-opacity="{:.2}"{}/>"#,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                rect.fill.to_hex(),
                rect.opacity,
                stroke_attrs(rect.line_width, rect.line_color, LineStyle::Solid)
            )
            .unwrap();
        }
        Graphic::Text(text) => {
            if text.content.is_empty() {
                return;
            }
            let anchor = match text.h_align {
                HAlign::Left => "start",
                HAlign::Center => "middle",
                HAlign::Right => "end",
            };
            let baseline = match text.v_align {
                VAlign::Top => "hanging",
                VAlign::Center => "middle",
                VAlign::Bottom => "alphabetic",
            };
            let transform = match text.rotation {
                Some(angle) => format!(r#" transform="rotate({} {:.2} {:.2})""#, angle, text.x, text.y),
                None => String::new(),
            };
            writeln!(
                svg,
                r#"  <text x="{:.2}" y="{:.2}" text-anchor="{}" dominant-baseline="{}" font-size="{:.2}" fill="{}"{}>{}</text>"#,
                text.x,
                text.y,
                anchor,
                baseline,
                text.font_size,
                text.color.to_hex(),
                transform,
                escape_xml(&text.content)
            )
            .unwrap();
        }
        Graphic::Oval(oval) => {
            writeln!(
                svg,
                r#"  <ellipse cx="{:.2}" cy="{:.2}" rx="{:.2}" ry="{:.2}" fill="{}"{}/>"#,
                oval.cx,
                oval.cy,
                oval.width / 2.0,
                oval.height / 2.0,
                oval.fill.to_hex(),
                stroke_attrs(oval.line_width, oval.line_color, LineStyle::Solid)
            )
            .unwrap();
        }
        Graphic::Arc(arc) => {
            // A sweep of the full circle has coincident endpoints, which an
            // SVG arc command renders as nothing; use a circle instead.
            if arc.sweep_angle >= 360.0 {
                writeln!(
                    svg,
                    r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="none"/>"#,
                    arc.cx,
                    arc.cy,
                    arc.radius,
                    arc.fill.to_hex()
                )
                .unwrap();
            } else {
                let (x0, y0) = arc_point(arc, arc.start_angle);
                let (x1, y1) = arc_point(arc, arc.start_angle + arc.sweep_angle);
                let large = if arc.sweep_angle > 180.0 { 1 } else { 0 };
                writeln!(
                    svg,
                    r#"  <path d="M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z" fill="{}" stroke="none"/>"#,
                    arc.cx,
                    arc.cy,
                    x0,
                    y0,
                    arc.radius,
                    arc.radius,
                    large,
                    x1,
                    y1,
                    arc.fill.to_hex()
                )
                .unwrap();
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Point on the arc's circle; angle 0 is 12 o'clock, positive clockwise.
fn arc_point(arc: &Arc, angle: f64) -> (f64, f64) {
    let rad = angle.to_radians();
    (arc.cx + arc.radius * rad.sin(), arc.cy - arc.radius * rad.cos())
}

fn stroke_attrs(width: f64, color: Color, style: LineStyle) -> String {
    if width <= 0.0 {
        return r#" stroke="none""#.to_string();
    }
    let mut attrs = format!(r#" stroke="{}" stroke-width="{:.2}""#, color.to_hex(), width);
    if let Some(pattern) = dash_pattern(style) {
        let _ = write!(attrs, r#" stroke-dasharray="{pattern}""#);
    }
    attrs
}

fn dash_pattern(style: LineStyle) -> Option<&'static str> {
    match style {
        LineStyle::Solid => None,
        LineStyle::Dashed => Some("6,4"),
        LineStyle::Dotted => Some("2,4"),
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
