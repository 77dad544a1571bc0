//! Frame replay: walk the visible history onto a surface.

use crate::surface::Surface;
use sketchpad_core::history::Entry;
use sketchpad_core::reflow;
use sketchpad_core::{Geometry, Sketchpad};

/// Render one frame.
///
/// Paint order: background fill from the base color, the optional underlay,
/// every visible entry oldest first (later entries paint over earlier ones),
/// then the live text block. The data model is left untouched; the only
/// side effect beyond painting is the status callback, invoked last with
/// the current undo/redo availability.
pub fn render<S: Surface>(pad: &Sketchpad, surface: &mut S) {
    surface.fill_background(pad.base_color().into());
    surface.draw_underlay();

    for entry in pad.visible_entries() {
        draw_entry(surface, entry);
    }

    if let Some(entry) = pad.live_text_entry() {
        draw_entry(surface, &entry);
    }

    log::trace!("frame: {} visible entries", pad.visible_entries().len());
    pad.notify_status();
}

fn draw_entry<S: Surface>(surface: &mut S, entry: &Entry) {
    match &entry.geometry {
        Geometry::Blank => {}
        Geometry::Text { anchor, content } => {
            let lines = reflow::wrap(
                content,
                *anchor,
                surface.size().width,
                entry.style.font.size,
                |text| surface.measure_text(text),
            );
            for line in lines {
                surface.draw_text(&line.text, anchor.x, line.y, &entry.style);
            }
        }
        geometry => surface.draw_path(&geometry.to_path(), &entry.style),
    }
}
