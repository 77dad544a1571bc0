//! Rasterization backend abstraction.

use kurbo::{BezPath, Size};
use peniko::Color;
use sketchpad_core::Style;

/// A paint target the replay pass draws onto.
///
/// Implementations interpret the [`Style`] attached to each operation:
/// stroke versus fill, cap and join, the compositing mode (eraser entries
/// arrive with [`CompositeMode::Clear`]), and the font for text runs.
/// Text measurement is the backend's job too; the replay pass only needs
/// the total advance width of a string.
///
/// [`CompositeMode::Clear`]: sketchpad_core::CompositeMode::Clear
pub trait Surface {
    /// Surface dimensions in surface units.
    fn size(&self) -> Size;

    /// Rendered width of `text` in surface units.
    fn measure_text(&self, text: &str) -> f64;

    /// Fill the whole surface with `color`, discarding previous contents.
    fn fill_background(&mut self, color: Color);

    /// Paint an underlay bitmap beneath the drawing, if the host has one.
    /// Default is a no-op; the underlay is an external collaborator.
    fn draw_underlay(&mut self) {}

    /// Paint a path with the given style.
    fn draw_path(&mut self, path: &BezPath, style: &Style);

    /// Paint one run of text with its left edge reference at `x` and
    /// baseline at `y`. Alignment is carried in `style.font.align`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &Style);
}
