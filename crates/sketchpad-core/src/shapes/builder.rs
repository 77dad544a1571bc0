//! Per-drawer geometry construction.
//!
//! One pure construction function per drawer kind, selected by a single
//! match on [`DrawerKind`]. Every call returns a fresh [`Geometry`] value;
//! nothing is mutated in place, so a value already committed to history can
//! never alias the one under construction.

use super::Geometry;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// The shape-construction strategy active for the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DrawerKind {
    #[default]
    Pen,
    Line,
    Rectangle,
    Circle,
    Ellipse,
    QuadraticCurve,
    CubicCurve,
    Arrow,
}

impl DrawerKind {
    /// Curve drawers use the two-phase "click, then click-drag" gesture.
    pub fn is_curve(self) -> bool {
        matches!(self, DrawerKind::QuadraticCurve | DrawerKind::CubicCurve)
    }
}

/// Seed geometry committed at pointer-down, before any movement.
///
/// Only the pen seeds visible geometry; every other drawer paints nothing
/// until the first move recomputes the slot (and a tap that never moves is
/// dropped again at pointer-up).
pub fn begin(kind: DrawerKind, start: Point) -> Geometry {
    match kind {
        DrawerKind::Pen => Geometry::Polyline(vec![start]),
        _ => Geometry::Blank,
    }
}

/// Recompute the in-progress geometry for the current pointer position.
///
/// `prev` is the geometry currently in the active history slot; only the Pen
/// drawer reads it (to extend the accumulated point list). `head_size` is
/// the arrow wing size, ignored by every other kind.
pub fn update(
    kind: DrawerKind,
    start: Point,
    control: Option<Point>,
    current: Point,
    prev: Option<&Geometry>,
    head_size: f64,
) -> Geometry {
    match kind {
        DrawerKind::Pen => extend_polyline(start, current, prev),
        DrawerKind::Line => Geometry::Segment {
            start,
            end: current,
        },
        DrawerKind::Rectangle => Geometry::Rectangle { a: start, b: current },
        DrawerKind::Circle => circle(start, current),
        DrawerKind::Ellipse => Geometry::Oval(Rect::from_points(start, current)),
        // The cubic drawer shares the quadratic two-anchor construction; it
        // has no second control point.
        // TODO: decide whether CubicCurve should grow a second control
        // anchor (and a cubic_to path) or be folded into QuadraticCurve.
        DrawerKind::QuadraticCurve | DrawerKind::CubicCurve => Geometry::Curve {
            start,
            control: control.unwrap_or(start),
            end: current,
        },
        DrawerKind::Arrow => Geometry::Arrow {
            start,
            end: current,
            head_size,
        },
    }
}

fn extend_polyline(start: Point, current: Point, prev: Option<&Geometry>) -> Geometry {
    let mut points = match prev {
        Some(Geometry::Polyline(points)) => points.clone(),
        _ => vec![start],
    };
    points.push(current);
    Geometry::Polyline(points)
}

fn circle(start: Point, current: Point) -> Geometry {
    // Both deltas are taken from the anchor's x coordinate, so a diagonal
    // drag yields a radius that is not the Euclidean distance to the pointer.
    // TODO: confirm whether the radius was meant to be hypot(dx, dy) before
    // changing this; tests pin the current behavior.
    let dx = (start.x - current.x).abs();
    let dy = (start.x - current.y).abs();
    Geometry::Circle {
        center: start,
        radius: (dx * dx + dy * dy).sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_accumulates_by_value() {
        let start = Point::new(0.0, 0.0);
        let first = begin(DrawerKind::Pen, start);
        assert_eq!(first, Geometry::Polyline(vec![start]));

        let second = update(
            DrawerKind::Pen,
            start,
            None,
            Point::new(1.0, 1.0),
            Some(&first),
            0.0,
        );
        let third = update(
            DrawerKind::Pen,
            start,
            None,
            Point::new(2.0, 0.0),
            Some(&second),
            0.0,
        );

        // Earlier values are untouched by later extensions.
        assert_eq!(first, Geometry::Polyline(vec![start]));
        assert_eq!(
            third,
            Geometry::Polyline(vec![start, Point::new(1.0, 1.0), Point::new(2.0, 0.0)])
        );
    }

    #[test]
    fn test_line_is_recomputed_not_accumulated() {
        let start = Point::new(0.0, 0.0);
        let mid = update(DrawerKind::Line, start, None, Point::new(5.0, 5.0), None, 0.0);
        let end = update(
            DrawerKind::Line,
            start,
            None,
            Point::new(9.0, 1.0),
            Some(&mid),
            0.0,
        );
        assert_eq!(
            end,
            Geometry::Segment {
                start,
                end: Point::new(9.0, 1.0),
            }
        );
    }

    #[test]
    fn test_circle_radius_axis_quirk() {
        // With the anchor at the origin and the pointer straight down the
        // x axis, both formulas agree.
        let on_axis = update(
            DrawerKind::Circle,
            Point::new(0.0, 0.0),
            None,
            Point::new(3.0, 0.0),
            None,
            0.0,
        );
        assert_eq!(
            on_axis,
            Geometry::Circle {
                center: Point::new(0.0, 0.0),
                radius: 3.0,
            }
        );

        // A diagonal drag exposes the one-axis radius: both deltas come from
        // the anchor's x coordinate, so the radius here is hypot(0-3, 0-4)
        // only by coincidence of the anchor sitting at x = 0. Moving the
        // anchor shows the divergence from Euclidean distance.
        let diagonal = update(
            DrawerKind::Circle,
            Point::new(10.0, 0.0),
            None,
            Point::new(13.0, 4.0),
            None,
            0.0,
        );
        let Geometry::Circle { radius, .. } = diagonal else {
            panic!("expected a circle");
        };
        // dx = |10 - 13| = 3, dy = |10 - 4| = 6 (anchor x reused), not 4.
        assert!((radius - (9.0f64 + 36.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_ellipse_bounding_box_is_normalized() {
        let oval = update(
            DrawerKind::Ellipse,
            Point::new(10.0, 10.0),
            None,
            Point::new(2.0, 4.0),
            None,
            0.0,
        );
        assert_eq!(oval, Geometry::Oval(Rect::new(2.0, 4.0, 10.0, 10.0)));
    }

    #[test]
    fn test_curve_uses_control_anchor() {
        let curve = update(
            DrawerKind::QuadraticCurve,
            Point::new(0.0, 0.0),
            Some(Point::new(5.0, 10.0)),
            Point::new(10.0, 0.0),
            None,
            0.0,
        );
        assert_eq!(
            curve,
            Geometry::Curve {
                start: Point::new(0.0, 0.0),
                control: Point::new(5.0, 10.0),
                end: Point::new(10.0, 0.0),
            }
        );
    }

    #[test]
    fn test_cubic_shares_quadratic_construction() {
        let start = Point::new(0.0, 0.0);
        let control = Some(Point::new(1.0, 2.0));
        let end = Point::new(4.0, 0.0);
        assert_eq!(
            update(DrawerKind::CubicCurve, start, control, end, None, 0.0),
            update(DrawerKind::QuadraticCurve, start, control, end, None, 0.0),
        );
    }

    #[test]
    fn test_only_pen_seeds_visible_geometry() {
        let p = Point::new(5.0, 10.0);
        assert_eq!(begin(DrawerKind::Pen, p), Geometry::Polyline(vec![p]));
        for kind in [
            DrawerKind::Line,
            DrawerKind::Rectangle,
            DrawerKind::Circle,
            DrawerKind::Ellipse,
            DrawerKind::QuadraticCurve,
            DrawerKind::CubicCurve,
            DrawerKind::Arrow,
        ] {
            assert!(begin(kind, p).is_blank(), "{kind:?} should seed blank");
        }
    }

    #[test]
    fn test_arrow_carries_head_size() {
        let arrow = update(
            DrawerKind::Arrow,
            Point::new(0.0, 0.0),
            None,
            Point::new(10.0, 0.0),
            None,
            6.0,
        );
        assert_eq!(
            arrow,
            Geometry::Arrow {
                start: Point::new(0.0, 0.0),
                end: Point::new(10.0, 0.0),
                head_size: 6.0,
            }
        );
    }
}
