//! Shape geometry for the drawing surface.

mod arrowhead;
mod builder;

pub use arrowhead::{Arrowhead, wings};
pub use builder::{DrawerKind, begin, update};

use kurbo::{BezPath, Point, Rect, Shape as _};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Flattening tolerance for circles and ovals.
const CURVE_TOLERANCE: f64 = 0.1;

/// Shape-kind-tagged geometry for one history entry.
///
/// Values are immutable once committed: amendment during a gesture replaces
/// the slot with a freshly built value instead of mutating in place, so an
/// undone slot can never observe a later gesture's edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Draws nothing. Used for the history baseline and for the first-click
    /// placeholder of a curve gesture.
    Blank,
    /// Accumulated pen stroke.
    Polyline(Vec<Point>),
    /// Single line segment.
    Segment { start: Point, end: Point },
    /// Axis-aligned rectangle with the two gesture corners, wound
    /// counter-clockwise (in y-down surface coordinates).
    Rectangle { a: Point, b: Point },
    /// Circle around the gesture start point.
    Circle { center: Point, radius: f64 },
    /// Oval inscribed in the bounding box of the two gesture points.
    Oval(Rect),
    /// Quadratic curve: fixed start and control anchors, live end point.
    Curve {
        start: Point,
        control: Point,
        end: Point,
    },
    /// Line segment with an open "V" arrowhead at the end.
    Arrow {
        start: Point,
        end: Point,
        /// Wing length and width, both in surface units.
        head_size: f64,
    },
    /// Solid rectangle, used by the full-surface clear entry.
    FilledRect(Rect),
    /// Live text block, wrapped at render time; never stored in history.
    Text { anchor: Point, content: String },
}

impl Geometry {
    /// Path representation for rendering. `Blank` and `Text` yield an empty
    /// path; text is laid out by the renderer, not expressed as outlines.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        match self {
            Geometry::Blank | Geometry::Text { .. } => {}
            Geometry::Polyline(points) => {
                if let Some((first, rest)) = points.split_first() {
                    path.move_to(*first);
                    for p in rest {
                        path.line_to(*p);
                    }
                }
            }
            Geometry::Segment { start, end } => {
                path.move_to(*start);
                path.line_to(*end);
            }
            Geometry::Rectangle { a, b } => {
                push_rect_ccw(&mut path, *a, *b);
            }
            Geometry::Circle { center, radius } => {
                let circle = kurbo::Circle::new(*center, *radius);
                for el in circle.path_elements(CURVE_TOLERANCE) {
                    path.push(el);
                }
            }
            Geometry::Oval(rect) => {
                let ellipse = kurbo::Ellipse::from_rect(*rect);
                for el in ellipse.path_elements(CURVE_TOLERANCE) {
                    path.push(el);
                }
            }
            Geometry::Curve {
                start,
                control,
                end,
            } => {
                path.move_to(*start);
                path.quad_to(*control, *end);
            }
            Geometry::Arrow {
                start,
                end,
                head_size,
            } => {
                path.move_to(*start);
                path.line_to(*end);
                let head = wings(*start, *end, *head_size, *head_size);
                path.move_to(*end);
                path.line_to(head.left);
                path.move_to(*end);
                path.line_to(head.right);
            }
            Geometry::FilledRect(rect) => {
                push_rect_ccw(&mut path, Point::new(rect.x0, rect.y0), Point::new(rect.x1, rect.y1));
            }
        }
        path
    }

    /// True for geometry that paints nothing.
    pub fn is_blank(&self) -> bool {
        matches!(self, Geometry::Blank)
    }
}

/// Append a closed rectangle with corners `a` and `b`, wound
/// counter-clockwise in y-down surface coordinates.
fn push_rect_ccw(path: &mut BezPath, a: Point, b: Point) {
    path.move_to(a);
    path.line_to(Point::new(a.x, b.y));
    path.line_to(b);
    path.line_to(Point::new(b.x, a.y));
    path.close_path();
}
