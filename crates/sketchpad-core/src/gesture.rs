//! Pointer gesture interpretation.
//!
//! One gesture is one pointer-down, any number of moves, one pointer-up.
//! The controller commits a history entry at pointer-down and then amends
//! that same slot on every move, so undo granularity stays at one gesture
//! per history step. Curve drawers use a two-phase protocol instead: the
//! first click fixes the start anchor, the second click fixes the control
//! anchor and begins the drag.

use crate::history::{Entry, HistoryStore};
use crate::shapes::{self, DrawerKind};
use crate::style::{Mode, Style};
use kurbo::Point;

/// Phase of the gesture state machine. Anchor points live inside the
/// variants, so a move event with no active gesture has nothing to act on
/// and simply falls through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    /// No gesture in progress.
    Idle,
    /// A curve's start anchor is fixed; waiting for the control-anchor click.
    AwaitingSecondAnchor { start: Point },
    /// Pointer is down and a shape is under construction.
    ActiveStroke {
        start: Point,
        control: Option<Point>,
        has_moved: bool,
    },
}

/// Drawer kind and style captured once at gesture start. Setter calls made
/// mid-drag change the settings, not the shape in flight.
#[derive(Debug, Clone)]
struct GestureSnapshot {
    drawer: DrawerKind,
    style: Style,
}

/// Interprets pointer events and drives the history store.
#[derive(Debug, Clone)]
pub struct GestureController {
    phase: GesturePhase,
    snapshot: Option<GestureSnapshot>,
    /// Anchor for the live text block (Text mode only).
    text_anchor: Point,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureController {
    pub fn new() -> Self {
        Self {
            phase: GesturePhase::Idle,
            snapshot: None,
            text_anchor: Point::ZERO,
        }
    }

    /// Handle pointer-down. `drawer` and `style` are read here, once, and
    /// carried for the rest of the gesture.
    pub fn pointer_down(
        &mut self,
        point: Point,
        mode: Mode,
        drawer: DrawerKind,
        style: Style,
        history: &mut HistoryStore,
    ) {
        if mode == Mode::Text {
            self.text_anchor = point;
            return;
        }

        if drawer.is_curve() {
            if let GesturePhase::AwaitingSecondAnchor { start } = self.phase {
                // Second click: fix the control anchor and begin the drag.
                self.phase = GesturePhase::ActiveStroke {
                    start,
                    control: Some(point),
                    has_moved: false,
                };
                return;
            }
            // First click: commit the placeholder slot and fix the start
            // anchor; no drag begins yet.
            history.commit(Entry::new(shapes::begin(drawer, point), style.clone()));
            self.snapshot = Some(GestureSnapshot { drawer, style });
            self.phase = GesturePhase::AwaitingSecondAnchor { start: point };
            return;
        }

        history.commit(Entry::new(shapes::begin(drawer, point), style.clone()));
        self.snapshot = Some(GestureSnapshot { drawer, style });
        self.phase = GesturePhase::ActiveStroke {
            start: point,
            control: None,
            has_moved: false,
        };
        log::trace!("gesture start: {drawer:?} at {point:?}");
    }

    /// Handle pointer-move. Amends the active slot in place; ignored outside
    /// an active stroke.
    pub fn pointer_move(&mut self, point: Point, mode: Mode, history: &mut HistoryStore) {
        if mode == Mode::Text {
            self.text_anchor = point;
            return;
        }

        let GesturePhase::ActiveStroke {
            start,
            control,
            has_moved,
        } = &mut self.phase
        else {
            return;
        };
        let Some(snapshot) = self.snapshot.as_ref() else {
            return;
        };

        *has_moved = true;
        let geometry = shapes::update(
            snapshot.drawer,
            *start,
            *control,
            point,
            Some(&history.current().geometry),
            snapshot.style.stroke_width * 2.0,
        );
        history.replace_current(Entry::new(geometry, snapshot.style.clone()));
    }

    /// Handle pointer-up. A tap with no movement produced no visible shape,
    /// so its commit is dropped (curve gestures are exempt: their slot was
    /// committed by the first click of the two-phase protocol).
    pub fn pointer_up(&mut self, history: &mut HistoryStore) {
        if let GesturePhase::ActiveStroke { has_moved, .. } = self.phase {
            let is_curve = self
                .snapshot
                .as_ref()
                .map(|s| s.drawer.is_curve())
                .unwrap_or(false);
            if !has_moved && !is_curve {
                history.drop_last();
            }
            self.phase = GesturePhase::Idle;
            self.snapshot = None;
        }
    }

    /// Abandon any gesture state wholesale.
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.snapshot = None;
        self.text_anchor = Point::ZERO;
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, GesturePhase::ActiveStroke { .. })
    }

    /// Anchor recorded for the live text block.
    pub fn text_anchor(&self) -> Point {
        self.text_anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Geometry;
    use crate::style::ToolSettings;

    fn draw_style() -> Style {
        Style::build(&ToolSettings::default(), Mode::Draw)
    }

    #[test]
    fn test_tap_without_drag_is_a_no_op() {
        let mut history = HistoryStore::new();
        let mut gesture = GestureController::new();
        let (len, pointer) = (history.len(), history.pointer());

        gesture.pointer_down(
            Point::new(5.0, 5.0),
            Mode::Draw,
            DrawerKind::Rectangle,
            draw_style(),
            &mut history,
        );
        gesture.pointer_up(&mut history);

        assert_eq!(history.len(), len);
        assert_eq!(history.pointer(), pointer);
        assert_eq!(gesture.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_one_gesture_is_one_history_step() {
        let mut history = HistoryStore::new();
        let mut gesture = GestureController::new();

        gesture.pointer_down(
            Point::new(0.0, 0.0),
            Mode::Draw,
            DrawerKind::Pen,
            draw_style(),
            &mut history,
        );
        for i in 1..20 {
            gesture.pointer_move(Point::new(i as f64, i as f64), Mode::Draw, &mut history);
        }
        gesture.pointer_up(&mut history);

        assert_eq!(history.len(), 2);
        let Geometry::Polyline(points) = &history.current().geometry else {
            panic!("expected a polyline");
        };
        assert_eq!(points.len(), 20);
    }

    #[test]
    fn test_move_without_gesture_is_ignored() {
        let mut history = HistoryStore::new();
        let mut gesture = GestureController::new();

        gesture.pointer_move(Point::new(3.0, 3.0), Mode::Draw, &mut history);
        assert_eq!(history.len(), 1);
        assert_eq!(gesture.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_curve_two_phase_protocol() {
        let mut history = HistoryStore::new();
        let mut gesture = GestureController::new();

        // First click: start anchor, placeholder entry.
        gesture.pointer_down(
            Point::new(0.0, 0.0),
            Mode::Draw,
            DrawerKind::QuadraticCurve,
            draw_style(),
            &mut history,
        );
        gesture.pointer_up(&mut history);
        assert_eq!(history.len(), 2);
        assert!(history.current().geometry.is_blank());
        assert_eq!(
            gesture.phase(),
            GesturePhase::AwaitingSecondAnchor {
                start: Point::new(0.0, 0.0),
            }
        );

        // A move between the clicks does not disturb the placeholder.
        gesture.pointer_move(Point::new(2.0, 2.0), Mode::Draw, &mut history);
        assert!(history.current().geometry.is_blank());

        // Second click plus drag bends the curve in the same slot.
        gesture.pointer_down(
            Point::new(5.0, 10.0),
            Mode::Draw,
            DrawerKind::QuadraticCurve,
            draw_style(),
            &mut history,
        );
        gesture.pointer_move(Point::new(10.0, 0.0), Mode::Draw, &mut history);
        gesture.pointer_up(&mut history);

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.current().geometry,
            Geometry::Curve {
                start: Point::new(0.0, 0.0),
                control: Point::new(5.0, 10.0),
                end: Point::new(10.0, 0.0),
            }
        );
        assert_eq!(gesture.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_arrow_head_size_tracks_stroke_width() {
        let mut history = HistoryStore::new();
        let mut gesture = GestureController::new();
        let mut settings = ToolSettings::default();
        settings.set_stroke_width(5.0);

        gesture.pointer_down(
            Point::new(0.0, 0.0),
            Mode::Draw,
            DrawerKind::Arrow,
            Style::build(&settings, Mode::Draw),
            &mut history,
        );
        gesture.pointer_move(Point::new(10.0, 0.0), Mode::Draw, &mut history);
        gesture.pointer_up(&mut history);

        assert_eq!(
            history.current().geometry,
            Geometry::Arrow {
                start: Point::new(0.0, 0.0),
                end: Point::new(10.0, 0.0),
                head_size: 10.0,
            }
        );
    }

    #[test]
    fn test_eraser_reuses_drawer_geometry() {
        let mut history = HistoryStore::new();
        let mut gesture = GestureController::new();

        gesture.pointer_down(
            Point::new(0.0, 0.0),
            Mode::Eraser,
            DrawerKind::Pen,
            Style::build(&ToolSettings::default(), Mode::Eraser),
            &mut history,
        );
        gesture.pointer_move(Point::new(4.0, 4.0), Mode::Eraser, &mut history);
        gesture.pointer_up(&mut history);

        assert!(matches!(
            history.current().geometry,
            Geometry::Polyline(_)
        ));
        assert_eq!(
            history.current().style.composite,
            crate::style::CompositeMode::Clear
        );
    }

    #[test]
    fn test_text_mode_records_anchor_without_committing() {
        let mut history = HistoryStore::new();
        let mut gesture = GestureController::new();

        gesture.pointer_down(
            Point::new(30.0, 40.0),
            Mode::Text,
            DrawerKind::Pen,
            draw_style(),
            &mut history,
        );
        assert_eq!(history.len(), 1);
        assert_eq!(gesture.text_anchor(), Point::new(30.0, 40.0));

        gesture.pointer_move(Point::new(50.0, 60.0), Mode::Text, &mut history);
        assert_eq!(history.len(), 1);
        assert_eq!(gesture.text_anchor(), Point::new(50.0, 60.0));
    }

    #[test]
    fn test_style_snapshot_survives_mid_gesture_changes() {
        let mut history = HistoryStore::new();
        let mut gesture = GestureController::new();
        let mut settings = ToolSettings::default();
        settings.stroke_color = crate::shapes::Rgba::new(1, 2, 3, 255);

        gesture.pointer_down(
            Point::new(0.0, 0.0),
            Mode::Draw,
            DrawerKind::Line,
            Style::build(&settings, Mode::Draw),
            &mut history,
        );

        // Settings change mid-drag; the in-flight shape keeps its snapshot.
        settings.stroke_color = crate::shapes::Rgba::WHITE;
        settings.set_stroke_width(9.0);

        gesture.pointer_move(Point::new(5.0, 5.0), Mode::Draw, &mut history);
        gesture.pointer_up(&mut history);

        let style = &history.current().style;
        assert_eq!(style.color, crate::shapes::Rgba::new(1, 2, 3, 255));
        assert_eq!(style.stroke_width, crate::style::DEFAULT_STROKE_WIDTH);
    }
}
