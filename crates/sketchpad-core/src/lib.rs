//! Sketchpad Core Library
//!
//! Platform-agnostic gesture-to-geometry pipeline and undo/redo history for
//! an interactive drawing surface. Pointer events come in already reduced to
//! `(x, y)` down/move/up; rasterization, font shaping, and UI chrome live in
//! external collaborators behind the `sketchpad-render` seam.

pub mod board;
pub mod gesture;
pub mod history;
pub mod reflow;
pub mod shapes;
pub mod style;

pub use board::Sketchpad;
pub use gesture::{GestureController, GesturePhase};
pub use history::{Entry, HistoryStore};
pub use shapes::{DrawerKind, Geometry, Rgba};
pub use style::{
    CompositeMode, FontSpec, LineCap, LineJoin, Mode, PaintKind, Style, TextAlign, ToolSettings,
};
