//! Pointer-indexed drawing history with undo/redo.

use crate::shapes::Geometry;
use crate::style::Style;
use serde::{Deserialize, Serialize};

/// One committed (geometry, style) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub geometry: Geometry,
    pub style: Style,
}

impl Entry {
    pub fn new(geometry: Geometry, style: Style) -> Self {
        Self { geometry, style }
    }

    /// The baseline entry occupying slot 0 of every store.
    fn baseline() -> Self {
        Self::new(Geometry::Blank, Style::fill(crate::shapes::Rgba::TRANSPARENT))
    }
}

/// Ordered entry sequence plus a pointer separating live entries from the
/// discardable redo branch.
///
/// Invariant: `1 <= pointer <= entries.len()`. Slot 0 always holds a blank
/// baseline entry, so an "empty" store still has one entry and a pointer of
/// one. Entries at `[0, pointer)` are live and rendered in order; entries at
/// `[pointer, len)` are redoable until the next commit discards them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryStore {
    entries: Vec<Entry>,
    pointer: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            entries: vec![Entry::baseline()],
            pointer: 1,
        }
    }

    /// Commit an entry at the pointer.
    ///
    /// Drawing at the tip appends; drawing while undone overwrites the slot
    /// at the pointer and then drops the rest of the redo branch, matching
    /// the usual editor rule that a new edit after undo erases redo history.
    pub fn commit(&mut self, entry: Entry) {
        if self.pointer == self.entries.len() {
            self.entries.push(entry);
        } else {
            self.entries[self.pointer] = entry;
            self.entries.truncate(self.pointer + 1);
        }
        self.pointer += 1;
        log::debug!("history commit, pointer {}", self.pointer);
    }

    /// Replace the most recently committed slot with a fresh entry. Used for
    /// in-place amendment while a gesture is in progress, so one gesture
    /// stays one undo step no matter how many move events it produces.
    pub fn replace_current(&mut self, entry: Entry) {
        self.entries[self.pointer - 1] = entry;
    }

    /// The entry in the most recently committed slot.
    pub fn current(&self) -> &Entry {
        &self.entries[self.pointer - 1]
    }

    /// Discard the most recently committed entry.
    ///
    /// Caller contract: only invoke right after a commit that turned out to
    /// be spurious (a tap with no drag). The baseline slot is never dropped.
    pub fn drop_last(&mut self) {
        debug_assert_eq!(self.pointer, self.entries.len());
        if self.pointer > 1 {
            self.entries.pop();
            self.pointer -= 1;
            log::debug!("history drop_last, pointer {}", self.pointer);
        }
    }

    /// Step the pointer back one entry. Saturates at the baseline and
    /// reports whether anything changed.
    pub fn undo(&mut self) -> bool {
        if self.pointer > 1 {
            self.pointer -= 1;
            true
        } else {
            false
        }
    }

    /// Step the pointer forward into the redo branch. Saturates at the tip
    /// and reports whether anything changed.
    pub fn redo(&mut self) -> bool {
        if self.pointer < self.entries.len() {
            self.pointer += 1;
            true
        } else {
            false
        }
    }

    pub fn undo_available(&self) -> bool {
        self.pointer > 1
    }

    pub fn redo_available(&self) -> bool {
        self.pointer < self.entries.len()
    }

    /// Wipe everything back to the baseline.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(Entry::baseline());
        self.pointer = 1;
    }

    /// The live entries, in paint order.
    pub fn visible_entries(&self) -> &[Entry] {
        &self.entries[..self.pointer]
    }

    /// Total entry count, redo branch included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        // The baseline entry does not count as content.
        self.entries.len() == 1
    }

    /// Current pointer position.
    pub fn pointer(&self) -> usize {
        self.pointer
    }
}
