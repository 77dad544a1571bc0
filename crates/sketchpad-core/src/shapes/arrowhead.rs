//! Arrowhead wing geometry.

use kurbo::{Point, Vec2};

/// Wing endpoints of an open "V" arrowhead. The chevron is drawn as two
/// segments from the tip to `left` and `right`; nothing is closed or filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrowhead {
    /// Point on the shaft where the wings attach.
    pub anchor: Point,
    pub left: Point,
    pub right: Point,
}

/// Compute arrowhead wing endpoints for a shaft `from -> to`.
///
/// `wing_length` is the distance from the tip back along the shaft to the
/// wing anchor; `wing_width` is the perpendicular offset of each wing. A
/// zero-length shaft has no direction, so the wings collapse onto the tip
/// instead of dividing by zero.
pub fn wings(from: Point, to: Point, wing_length: f64, wing_width: f64) -> Arrowhead {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance < f64::EPSILON {
        return Arrowhead {
            anchor: to,
            left: to,
            right: to,
        };
    }

    let unit = Vec2::new(dx / distance, dy / distance);
    let perpendicular = Vec2::new(-unit.y, unit.x);
    let anchor = Point::new(to.x - wing_length * unit.x, to.y - wing_length * unit.y);

    Arrowhead {
        anchor,
        left: Point::new(
            anchor.x + wing_width * perpendicular.x,
            anchor.y + wing_width * perpendicular.y,
        ),
        right: Point::new(
            anchor.x - wing_width * perpendicular.x,
            anchor.y - wing_width * perpendicular.y,
        ),
    }
}
