//! Recording backend: captures paint operations instead of rasterizing.

use crate::surface::Surface;
use kurbo::{BezPath, PathEl, Size};
use peniko::Color;
use sketchpad_core::{Rgba, Style};

/// One captured paint operation, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedOp {
    Background(Rgba),
    Underlay,
    Path {
        elements: Vec<PathEl>,
        style: Style,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        style: Style,
    },
}

/// A headless [`Surface`] that records every operation it receives.
///
/// Glyph measurement is modelled as a uniform per-character advance, which
/// is all the reflow math consumes.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    char_width: f64,
    pub ops: Vec<RecordedOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64, char_width: f64) -> Self {
        Self {
            size: Size::new(width, height),
            char_width,
            ops: Vec::new(),
        }
    }

    /// The recorded text runs, in issue order.
    pub fn text_runs(&self) -> Vec<&RecordedOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, RecordedOp::Text { .. }))
            .collect()
    }

    /// The number of recorded path paints.
    pub fn path_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, RecordedOp::Path { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn measure_text(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }

    fn fill_background(&mut self, color: Color) {
        self.ops.push(RecordedOp::Background(color.into()));
    }

    fn draw_underlay(&mut self) {
        self.ops.push(RecordedOp::Underlay);
    }

    fn draw_path(&mut self, path: &BezPath, style: &Style) {
        self.ops.push(RecordedOp::Path {
            elements: path.elements().to_vec(),
            style: style.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &Style) {
        self.ops.push(RecordedOp::Text {
            text: text.to_string(),
            x,
            y,
            style: style.clone(),
        });
    }
}
