//! Sketchpad render seam.
//!
//! The [`Surface`] trait is the boundary to the rasterization backend; the
//! [`render`] pass replays the visible history onto it every frame. The
//! [`RecordingSurface`] backend captures paint operations instead of
//! painting, for headless hosts and tests.

mod recording;
mod replay;
mod surface;

pub use recording::{RecordedOp, RecordingSurface};
pub use replay::render;
pub use surface::Surface;
