//! Shared text formatting for the markup-producing emitters.
//!
//! Every emitter formats numbers, points and paths through these helpers, so
//! the same compiled geometry renders to the same coordinate text everywhere.

use std::fmt::Write as _;

use kurbo::{BezPath, PathEl, Point};

use crate::{
    animation::AnimationDescriptor,
    compile::Viewport,
    shape::{Primitive, Rotation},
};

/// Logical pixel size of every exported document.
pub const DOC_SIZE_PX: u32 = 250;

/// Shortest-roundtrip float text; integral values print without a fraction.
pub fn num(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Seconds value for CSS/JS timing text.
pub fn seconds(v: f64) -> String {
    format!("{}s", num(v))
}

/// `viewBox` attribute text for the engine's computed extent.
pub fn view_box(viewport: Viewport) -> String {
    let min = num(viewport.min_xy());
    let extent = num(viewport.extent);
    format!("{min} {min} {extent} {extent}")
}

/// `points` attribute text for a polygon.
pub fn points_attr(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", num(p.x), num(p.y));
    }
    out
}

/// SVG path data text for a Bezier path.
pub fn path_data(path: &BezPath) -> String {
    let mut out = String::new();
    for el in path.elements() {
        if !out.is_empty() {
            out.push(' ');
        }
        match el {
            PathEl::MoveTo(p) => {
                let _ = write!(out, "M {} {}", num(p.x), num(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(out, "L {} {}", num(p.x), num(p.y));
            }
            PathEl::QuadTo(p1, p2) => {
                let _ = write!(
                    out,
                    "Q {} {}, {} {}",
                    num(p1.x),
                    num(p1.y),
                    num(p2.x),
                    num(p2.y)
                );
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let _ = write!(
                    out,
                    "C {} {}, {} {}, {} {}",
                    num(p1.x),
                    num(p1.y),
                    num(p2.x),
                    num(p2.y),
                    num(p3.x),
                    num(p3.y)
                );
            }
            PathEl::ClosePath => out.push('Z'),
        }
    }
    out
}

/// One SVG element for a primitive. `attrs` is the pre-built attribute text
/// appended after the geometry attributes (leading space included here).
pub fn primitive_element(primitive: &Primitive, attrs: &str) -> String {
    match primitive {
        Primitive::Circle { cx, cy, r } => {
            format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{attrs} />",
                num(*cx),
                num(*cy),
                num(*r)
            )
        }
        Primitive::Rect {
            x,
            y,
            width,
            height,
            rotate,
        } => {
            let transform = match rotate {
                Some(Rotation { degrees, cx, cy }) => {
                    format!(
                        " transform=\"rotate({} {} {})\"",
                        num(*degrees),
                        num(*cx),
                        num(*cy)
                    )
                }
                None => String::new(),
            };
            format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{transform}{attrs} />",
                num(*x),
                num(*y),
                num(*width),
                num(*height)
            )
        }
        Primitive::Polygon { points } => {
            format!("<polygon points=\"{}\"{attrs} />", points_attr(points))
        }
        Primitive::Path { path } => {
            format!("<path d=\"{}\"{attrs} />", path_data(path))
        }
    }
}

/// Inline `animation-*` declarations for one descriptor. `transform-origin`
/// is appended by the caller where the target format wants it.
pub fn animation_style(desc: &AnimationDescriptor) -> String {
    format!(
        "animation-name: {}; animation-duration: {}; animation-timing-function: {}; animation-iteration-count: {}; animation-direction: {}; animation-delay: {};",
        desc.name,
        seconds(desc.duration_secs),
        desc.easing.css(),
        desc.iteration,
        desc.direction.css(),
        seconds(desc.delay_secs),
    )
}
