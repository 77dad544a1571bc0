//! Text line wrapping for the live text block.
//!
//! Wrapping is driven by a measured average glyph width rather than by font
//! shaping: the backend measures the whole string once, and the text is cut
//! into fixed-size character chunks that fit the space to the right of the
//! anchor (the block is right-anchored, alignment is fixed).

use kurbo::Point;

/// One wrapped line and the baseline y it is drawn at.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflowLine {
    pub text: String,
    pub y: f64,
}

/// Lazy, finite iterator over wrapped lines. Produced fresh each frame and
/// consumed once.
#[derive(Debug)]
pub struct ReflowLines {
    chars: Vec<char>,
    chars_per_line: usize,
    next_char: usize,
    line_index: usize,
    anchor_y: f64,
    line_height: f64,
}

impl Iterator for ReflowLines {
    type Item = ReflowLine;

    fn next(&mut self) -> Option<ReflowLine> {
        if self.next_char >= self.chars.len() {
            return None;
        }
        let end = (self.next_char + self.chars_per_line).min(self.chars.len());
        let text: String = self.chars[self.next_char..end].iter().collect();
        self.next_char = end;
        self.line_index += 1;
        Some(ReflowLine {
            text,
            // Line height equals the font size; the first line sits one line
            // below the anchor.
            y: self.anchor_y + self.line_index as f64 * self.line_height,
        })
    }
}

/// Wrap `text` into lines fitting between `anchor.x` and `surface_width`.
///
/// `measure` reports the rendered width of a string in surface units. Empty
/// text yields no lines. A non-positive or non-finite average glyph width
/// (or an anchor at or past the right edge) degrades to one character per
/// line; `chars_per_line` is always at least 1, so the iterator terminates.
pub fn wrap(
    text: &str,
    anchor: Point,
    surface_width: f64,
    font_size: f64,
    measure: impl FnOnce(&str) -> f64,
) -> ReflowLines {
    let chars: Vec<char> = text.chars().collect();
    let chars_per_line = if chars.is_empty() {
        1
    } else {
        let avg_char_width = measure(text) / chars.len() as f64;
        let available_width = surface_width - anchor.x;
        if avg_char_width > 0.0 && avg_char_width.is_finite() {
            let per_line = (available_width / avg_char_width).floor();
            // The flipped comparison routes a NaN quotient to the fallback.
            if per_line >= 1.0 { per_line as usize } else { 1 }
        } else {
            1
        }
    };

    ReflowLines {
        chars,
        chars_per_line,
        next_char: 0,
        line_index: 0,
        anchor_y: anchor.y,
        line_height: font_size,
    }
}
