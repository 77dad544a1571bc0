//! The controlling surface facade.
//!
//! [`Sketchpad`] owns the history store, the gesture controller, and the
//! drawing configuration, and exposes the library API: pointer events in,
//! setters, undo/redo/clear/reset commands, and the read side consumed by a
//! render pass. Single-threaded by design; all mutation funnels through one
//! `&mut self` caller.

use crate::gesture::GestureController;
use crate::history::{Entry, HistoryStore};
use crate::shapes::{DrawerKind, Geometry, Rgba};
use crate::style::{LineCap, Mode, PaintKind, Style, ToolSettings};
use kurbo::{Point, Rect, Size};

/// Observer invoked once per render with `(undo_available, redo_available)`.
pub type StatusCallback = Box<dyn Fn(bool, bool)>;

/// Interactive drawing surface state.
pub struct Sketchpad {
    history: HistoryStore,
    gesture: GestureController,
    settings: ToolSettings,
    mode: Mode,
    drawer: DrawerKind,
    /// Background fill painted before the entries.
    base_color: Rgba,
    /// Pending live text, rendered fresh every frame; never enters history.
    text: String,
    surface_size: Size,
    status_callback: Option<StatusCallback>,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketchpad {
    pub fn new() -> Self {
        Self {
            history: HistoryStore::new(),
            gesture: GestureController::new(),
            settings: ToolSettings::default(),
            mode: Mode::default(),
            drawer: DrawerKind::default(),
            base_color: Rgba::TRANSPARENT,
            text: String::new(),
            surface_size: Size::new(800.0, 600.0),
            status_callback: None,
        }
    }

    // Pointer events. Coordinates are float surface coordinates, already
    // normalized by the platform layer.

    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        let style = Style::build(&self.settings, self.mode);
        self.gesture.pointer_down(
            Point::new(x, y),
            self.mode,
            self.drawer,
            style,
            &mut self.history,
        );
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.gesture
            .pointer_move(Point::new(x, y), self.mode, &mut self.history);
    }

    pub fn on_pointer_up(&mut self, _x: f64, _y: f64) {
        self.gesture.pointer_up(&mut self.history);
    }

    // Configuration setters. Safe to call at any time; an in-progress
    // gesture keeps the snapshot taken at its pointer-down.

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_drawer_kind(&mut self, drawer: DrawerKind) {
        self.drawer = drawer;
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.settings.set_stroke_width(width);
    }

    pub fn set_stroke_color(&mut self, color: Rgba) {
        self.settings.stroke_color = color;
    }

    pub fn set_paint_kind(&mut self, kind: PaintKind) {
        self.settings.paint_kind = kind;
    }

    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.settings.cap = cap;
    }

    pub fn set_shadow_blur(&mut self, blur: f64) {
        self.settings.shadow_blur = blur;
    }

    pub fn set_opacity(&mut self, opacity: u8) {
        self.settings.opacity = opacity;
    }

    pub fn set_base_color(&mut self, color: Rgba) {
        self.base_color = color;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_font(&mut self, family: impl Into<String>, size: f64) {
        self.settings.font.family = family.into();
        self.settings.font.size = size;
    }

    pub fn set_surface_size(&mut self, width: f64, height: f64) {
        self.surface_size = Size::new(width, height);
    }

    /// Register the status observer fired once per render.
    pub fn set_status_callback(&mut self, callback: impl Fn(bool, bool) + 'static) {
        self.status_callback = Some(Box::new(callback));
    }

    // Commands.

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn undo_available(&self) -> bool {
        self.history.undo_available()
    }

    pub fn redo_available(&self) -> bool {
        self.history.redo_available()
    }

    /// Cover the whole surface with a solid fill, as a normal, undoable
    /// history entry. Any pending live text is discarded.
    pub fn clear(&mut self, fill: Rgba) {
        let rect = Rect::new(0.0, 0.0, self.surface_size.width, self.surface_size.height);
        self.history
            .commit(Entry::new(Geometry::FilledRect(rect), Style::fill(fill)));
        self.text.clear();
    }

    /// Full reinitialization: history wiped back to the baseline, gesture
    /// state and pending text discarded. Settings survive.
    pub fn reset(&mut self) {
        self.history.reset();
        self.gesture.reset();
        self.text.clear();
    }

    // Read side, consumed by the render pass.

    /// Entries to replay this frame, in paint order.
    pub fn visible_entries(&self) -> &[Entry] {
        self.history.visible_entries()
    }

    /// The live text block as a transient entry, if there is pending text.
    /// Built fresh from the current settings; it never enters history.
    pub fn live_text_entry(&self) -> Option<Entry> {
        if self.text.is_empty() {
            return None;
        }
        Some(Entry::new(
            Geometry::Text {
                anchor: self.gesture.text_anchor(),
                content: self.text.clone(),
            },
            Style::build(&self.settings, Mode::Text),
        ))
    }

    /// Invoke the status observer with the current undo/redo availability.
    pub fn notify_status(&self) {
        if let Some(callback) = &self.status_callback {
            callback(self.history.undo_available(), self.history.redo_available());
        }
    }

    pub fn base_color(&self) -> Rgba {
        self.base_color
    }

    pub fn surface_size(&self) -> Size {
        self.surface_size
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn drawer_kind(&self) -> DrawerKind {
        self.drawer
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
