//! Paint style descriptors and the per-mode style factory.
//!
//! A [`Style`] is an immutable snapshot built once per committed or amended
//! history entry. Mutating a style after it has been committed would change
//! how already-drawn frames replay, so styles are only ever built fresh from
//! the current [`ToolSettings`] and the active [`Mode`].

use crate::shapes::Rgba;
use serde::{Deserialize, Serialize};

/// Stroke width used when a caller hands us a non-positive width.
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;

/// Default font size in surface units.
pub const DEFAULT_FONT_SIZE: f64 = 32.0;

/// Behavioral mode of the surface, orthogonal to the drawer kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Normal shape drawing.
    #[default]
    Draw,
    /// Place and render a live text block; no history entries are created.
    Text,
    /// Same geometry as Draw, but paints clear the surface instead of blending.
    Eraser,
}

/// Whether a shape is stroked, filled, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaintKind {
    #[default]
    Stroke,
    Fill,
    StrokeAndFill,
}

/// Stroke cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Stroke join style. The surface always joins round; the variant exists so
/// the style snapshot is self-describing for backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// How an entry composites over what is already painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompositeMode {
    /// Normal alpha blending.
    #[default]
    SourceOver,
    /// Erase: painted regions are removed rather than blended.
    Clear,
}

/// Horizontal text alignment. The live text block is right-anchored and the
/// alignment is fixed, not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    #[default]
    Right,
}

/// Font face, size, and alignment for text rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font family name as understood by the backend.
    pub family: String,
    /// Font size in surface units; also the line height for reflowed text.
    pub size: f64,
    /// Fixed alignment.
    pub align: TextAlign,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: DEFAULT_FONT_SIZE,
            align: TextAlign::default(),
        }
    }
}

/// Immutable paint descriptor attached to one history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Antialiasing flag; always on.
    pub antialias: bool,
    /// Stroke, fill, or both.
    pub paint_kind: PaintKind,
    /// Stroke width in surface units. Zero for text (fill-only glyphs).
    pub stroke_width: f64,
    /// Stroke cap.
    pub cap: LineCap,
    /// Stroke join; fixed round.
    pub join: LineJoin,
    /// Paint color.
    pub color: Rgba,
    /// Shadow blur radius; 0 disables the shadow.
    pub shadow_blur: f64,
    /// Opacity in `[0, 255]`.
    pub opacity: u8,
    /// Font used when the entry carries text.
    pub font: FontSpec,
    /// Compositing mode; `Clear` for eraser entries.
    pub composite: CompositeMode,
}

impl Style {
    /// Build a style snapshot from the current settings and the active mode.
    ///
    /// Precedence of the mode overrides: Eraser forces a fully transparent
    /// color and the clearing composite; Text forces the font and a zero
    /// stroke width; plain Draw applies stroke color, shadow blur, and
    /// opacity.
    pub fn build(settings: &ToolSettings, mode: Mode) -> Self {
        let mut style = Self {
            antialias: true,
            paint_kind: settings.paint_kind,
            stroke_width: settings.stroke_width,
            cap: settings.cap,
            join: LineJoin::Round,
            color: settings.stroke_color,
            shadow_blur: 0.0,
            opacity: 255,
            font: settings.font.clone(),
            composite: CompositeMode::SourceOver,
        };

        match mode {
            Mode::Eraser => {
                style.color = Rgba::TRANSPARENT;
                style.composite = CompositeMode::Clear;
            }
            Mode::Text => {
                // Glyphs are filled, never stroked.
                style.stroke_width = 0.0;
                style.shadow_blur = settings.shadow_blur;
                style.opacity = settings.opacity;
            }
            Mode::Draw => {
                style.shadow_blur = settings.shadow_blur;
                style.opacity = settings.opacity;
            }
        }

        style
    }

    /// Build a solid-fill style, used for the full-surface clear entry.
    pub fn fill(color: Rgba) -> Self {
        Self {
            antialias: true,
            paint_kind: PaintKind::Fill,
            stroke_width: DEFAULT_STROKE_WIDTH,
            cap: LineCap::default(),
            join: LineJoin::Round,
            color,
            shadow_blur: 0.0,
            opacity: 255,
            font: FontSpec::default(),
            composite: CompositeMode::SourceOver,
        }
    }

    /// Paint color with the style's opacity folded into the alpha channel,
    /// as a backend color.
    pub fn color_with_opacity(&self) -> peniko::Color {
        let color: peniko::Color = self.color.into();
        let rgba = color.to_rgba8();
        let alpha = ((rgba.a as u16 * self.opacity as u16) / 255) as u8;
        peniko::Color::from_rgba8(rgba.r, rgba.g, rgba.b, alpha)
    }
}

/// Mutable drawing configuration owned by the controlling surface.
///
/// Setters may run at any time, including mid-gesture; the gesture controller
/// snapshots a [`Style`] from these settings once at gesture start, so a
/// change mid-drag never alters an in-progress shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Stroke width; kept strictly positive by [`ToolSettings::set_stroke_width`].
    pub stroke_width: f64,
    /// Stroke color.
    pub stroke_color: Rgba,
    /// Stroke, fill, or both.
    pub paint_kind: PaintKind,
    /// Stroke cap.
    pub cap: LineCap,
    /// Shadow blur radius.
    pub shadow_blur: f64,
    /// Opacity in `[0, 255]`.
    pub opacity: u8,
    /// Font for text mode.
    pub font: FontSpec,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_color: Rgba::BLACK,
            paint_kind: PaintKind::default(),
            cap: LineCap::default(),
            shadow_blur: 0.0,
            opacity: 255,
            font: FontSpec::default(),
        }
    }
}

impl ToolSettings {
    /// Set the stroke width. A non-positive width is replaced by
    /// [`DEFAULT_STROKE_WIDTH`] rather than rejected.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = if width > 0.0 {
            width
        } else {
            DEFAULT_STROKE_WIDTH
        };
    }
}
