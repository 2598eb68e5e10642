use kurbo::{BezPath, Point};

use crate::model::ShapeKind;

/// The six concrete shapes a `random` spinner draws from.
pub const CONCRETE_SHAPES: [ShapeKind; 6] = [
    ShapeKind::Circle,
    ShapeKind::Square,
    ShapeKind::Line,
    ShapeKind::Triangle,
    ShapeKind::Star,
    ShapeKind::Heart,
];

impl ShapeKind {
    /// Stable kebab-case name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Line => "line",
            Self::Triangle => "triangle",
            Self::Star => "star",
            Self::Heart => "heart",
            Self::Random => "random",
        }
    }
}

/// Rotation about a fixed point, in degrees. Only the `line` shape carries
/// one (it tracks its angular slot).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rotation {
    pub degrees: f64,
    pub cx: f64,
    pub cy: f64,
}

/// One drawable primitive, fully positioned and sized. Every emitter
/// consumes these verbatim; none re-derives shape geometry.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Primitive {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotate: Option<Rotation>,
    },
    Polygon {
        points: Vec<Point>,
    },
    Path {
        path: BezPath,
    },
}

/// Build the primitive for a resolved shape at `center` with the given size.
///
/// `angle_rad` is the element's angular slot; only `line` uses it. A
/// still-unresolved `random` renders as a circle, matching the catch-all of
/// the shape dispatch.
pub fn primitive_at(kind: ShapeKind, center: Point, size: f64, angle_rad: f64) -> Primitive {
    let Point { x, y } = center;
    match kind {
        ShapeKind::Square => Primitive::Rect {
            x: x - size / 2.0,
            y: y - size / 2.0,
            width: size,
            height: size,
            rotate: None,
        },
        ShapeKind::Line => Primitive::Rect {
            x: x - size / 8.0,
            y: y - size / 2.0,
            width: size / 4.0,
            height: size,
            rotate: Some(Rotation {
                degrees: angle_rad.to_degrees(),
                cx: x,
                cy: y,
            }),
        },
        ShapeKind::Triangle => Primitive::Polygon {
            points: triangle_points(center, size),
        },
        ShapeKind::Star => Primitive::Polygon {
            points: star_points(center, size),
        },
        ShapeKind::Heart => Primitive::Path {
            path: heart_path(center, size),
        },
        ShapeKind::Circle | ShapeKind::Random => Primitive::Circle {
            cx: x,
            cy: y,
            r: size / 2.0,
        },
    }
}

/// Isosceles triangle of height `size * sqrt(3)/2`, apex pointing outward.
fn triangle_points(center: Point, size: f64) -> Vec<Point> {
    let Point { x, y } = center;
    let h = size * (3.0_f64.sqrt() / 2.0);
    vec![
        Point::new(x, y - 2.0 * h / 3.0),
        Point::new(x - size / 2.0, y + h / 3.0),
        Point::new(x + size / 2.0, y + h / 3.0),
    ]
}

/// 10-point star alternating `size/2` outer and `size/4` inner radii,
/// first point at -90 degrees, 36-degree step.
fn star_points(center: Point, size: f64) -> Vec<Point> {
    let Point { x, y } = center;
    (0..10)
        .map(|k| {
            let r = if k % 2 == 0 { size / 2.0 } else { size / 4.0 };
            let a = (f64::from(k) / 10.0) * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
            Point::new(x + r * a.cos(), y + r * a.sin())
        })
        .collect()
}

/// Closed two-segment cubic Bezier heart built from the unit `s = size * 0.08`.
fn heart_path(center: Point, size: f64) -> BezPath {
    let Point { x, y } = center;
    let s = size * 0.08;

    let mut path = BezPath::new();
    path.move_to((x, y + s * 2.0));
    path.curve_to(
        (x + s * 4.0, y - s * 2.0),
        (x + s * 9.0, y - s * 0.5),
        (x, y - s * 5.0),
    );
    path.curve_to(
        (x - s * 9.0, y - s * 0.5),
        (x - s * 4.0, y - s * 2.0),
        (x, y + s * 2.0),
    );
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(10.0, -20.0);

    #[test]
    fn circle_radius_is_half_size() {
        let Primitive::Circle { cx, cy, r } = primitive_at(ShapeKind::Circle, CENTER, 30.0, 0.0)
        else {
            panic!("expected Circle");
        };
        assert_eq!((cx, cy, r), (10.0, -20.0, 15.0));
    }

    #[test]
    fn square_is_axis_aligned_and_centered() {
        let Primitive::Rect {
            x,
            y,
            width,
            height,
            rotate,
        } = primitive_at(ShapeKind::Square, CENTER, 30.0, 1.0)
        else {
            panic!("expected Rect");
        };
        assert_eq!((x, y), (-5.0, -35.0));
        assert_eq!((width, height), (30.0, 30.0));
        assert!(rotate.is_none());
    }

    #[test]
    fn line_rotates_with_its_slot_angle() {
        let angle = std::f64::consts::FRAC_PI_2;
        let Primitive::Rect {
            width,
            height,
            rotate: Some(rot),
            ..
        } = primitive_at(ShapeKind::Line, CENTER, 40.0, angle)
        else {
            panic!("expected rotated Rect");
        };
        assert_eq!(width, 10.0);
        assert_eq!(height, 40.0);
        assert!((rot.degrees - 90.0).abs() < 1e-9);
        assert_eq!((rot.cx, rot.cy), (10.0, -20.0));
    }

    #[test]
    fn star_has_ten_points_first_pointing_up() {
        let Primitive::Polygon { points } = primitive_at(ShapeKind::Star, CENTER, 20.0, 0.0) else {
            panic!("expected Polygon");
        };
        assert_eq!(points.len(), 10);
        // First point is the outer tip straight up from center.
        assert!((points[0].x - 10.0).abs() < 1e-9);
        assert!((points[0].y - (-30.0)).abs() < 1e-9);
        // Outer and inner radii alternate.
        let r1 = (points[1] - CENTER).hypot();
        assert!((r1 - 5.0).abs() < 1e-9);
    }

    #[test]
    fn triangle_apex_points_outward() {
        let Primitive::Polygon { points } = primitive_at(ShapeKind::Triangle, CENTER, 30.0, 0.0)
        else {
            panic!("expected Polygon");
        };
        assert_eq!(points.len(), 3);
        let h = 30.0 * (3.0_f64.sqrt() / 2.0);
        assert!((points[0].y - (-20.0 - 2.0 * h / 3.0)).abs() < 1e-9);
        assert_eq!(points[1].x, -5.0);
        assert_eq!(points[2].x, 25.0);
    }

    #[test]
    fn heart_is_closed_two_segment_path() {
        let Primitive::Path { path } = primitive_at(ShapeKind::Heart, CENTER, 25.0, 0.0) else {
            panic!("expected Path");
        };
        // MoveTo + 2 CurveTo + ClosePath.
        assert_eq!(path.elements().len(), 4);
    }

    #[test]
    fn unresolved_random_falls_back_to_circle() {
        let p = primitive_at(ShapeKind::Random, CENTER, 30.0, 0.0);
        assert!(matches!(p, Primitive::Circle { .. }));
    }
}
