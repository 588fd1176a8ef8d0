//! Word-boundary text wrapping and vertical cursor arithmetic.
//!
//! Width is measured in characters (Unicode scalar values), which keeps the
//! result independent of any font and therefore deterministic. Words are
//! never split: a token longer than the budget gets a line of its own.
//!
//! ```
//! use rechnung_pdf::layout::wrap_text;
//!
//! let lines = wrap_text("Hauptstraße 12\n10115 Berlin Deutschland", 14).into_value();
//! assert_eq!(lines, vec!["Hauptstraße 12", "10115 Berlin", "Deutschland"]);
//! ```

use crate::core::{DegradeReason, Outcome};

/// Fraction of the line height from the slot top to the text baseline.
pub const BASELINE_RATIO: f32 = 0.75;

/// Advance of a figure in em, wider than the text average in common fonts.
pub const FIGURE_EM: f32 = 0.6;

/// Wrapped lines anchored at a vertical cursor position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    /// Top of the first line slot.
    pub start_y: f32,
    pub line_height: f32,
}

impl TextBlock {
    /// Number of vertical line slots consumed.
    pub fn line_slots(&self) -> usize {
        self.lines.len()
    }

    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }

    /// Cursor position after the block.
    pub fn end_y(&self) -> f32 {
        self.start_y + self.height()
    }

    /// Each line with its baseline position.
    pub fn baselines(&self) -> impl Iterator<Item = (f32, &str)> + '_ {
        self.lines.iter().enumerate().map(|(i, line)| {
            (
                self.start_y + (i as f32 + BASELINE_RATIO) * self.line_height,
                line.as_str(),
            )
        })
    }
}

/// No-break space; joins the words on either side.
const NBSP: char = '\u{a0}';

/// Whitespace-separated words of `text`, keeping no-break spaces inside words.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() && c != NBSP)
        .filter(|word| !word.is_empty())
}

fn join_words(text: &str) -> String {
    words(text).collect::<Vec<_>>().join(" ")
}

/// Wrap `text` into lines of at most `max_chars` characters.
///
/// Explicit line breaks start a new line; runs of whitespace collapse to a
/// single space and blank lines are dropped. A zero budget degrades to one
/// line holding the whole text.
pub fn wrap_text(text: &str, max_chars: usize) -> Outcome<Vec<String>> {
    if max_chars == 0 {
        let joined = join_words(text);
        let lines = if joined.is_empty() {
            Vec::new()
        } else {
            vec![joined]
        };
        return Outcome::degraded(lines, DegradeReason::ZeroWidth);
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in words(paragraph) {
            let word_len = word.chars().count();
            if current_len == 0 {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= max_chars {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_len = word_len;
            }
        }

        if current_len > 0 {
            lines.push(current);
        }
    }

    Outcome::Ok(lines)
}

/// Wrap `text` and anchor the lines at `start_y`.
///
/// Invalid geometry degrades to a single line at a sanitized position with
/// a zero advance, so the caller's cursor never jumps.
pub fn layout_text(
    text: &str,
    max_chars: usize,
    start_y: f32,
    line_height: f32,
) -> Outcome<TextBlock> {
    if !line_height.is_finite() || line_height <= 0.0 || !start_y.is_finite() {
        let joined = join_words(text);
        let block = TextBlock {
            lines: if joined.is_empty() { Vec::new() } else { vec![joined] },
            start_y: if start_y.is_finite() { start_y } else { 0.0 },
            line_height: 0.0,
        };
        return Outcome::degraded(
            block,
            DegradeReason::InvalidGeometry {
                line_height,
                start_y,
            },
        );
    }

    wrap_text(text, max_chars).map(|lines| TextBlock {
        lines,
        start_y,
        line_height,
    })
}

/// Width in points of `text` with every character `char_em` wide.
pub fn estimated_width(text: &str, font_size: f32, char_em: f32) -> f32 {
    text.chars().count() as f32 * font_size * char_em
}

/// How many average-width characters fit into `width` points.
pub fn char_budget(width: f32, font_size: f32, avg_char_em: f32) -> usize {
    let glyph = font_size * avg_char_em;
    if !width.is_finite() || !glyph.is_finite() || width <= 0.0 || glyph <= 0.0 {
        return 0;
    }
    (width / glyph).floor() as usize
}
