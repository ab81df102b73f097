//! Greedy word wrap against measured glyph widths.

use crate::layout::font_metrics::FontMetricTable;

/// Wraps `text` into lines no wider than `max_width` points where possible.
///
/// Words are taken left to right; the next word joins the current line only while
/// `measure(current + " " + word) < max_width`. A word is never split, so a word
/// wider than `max_width` becomes a line of its own. Always returns at least one
/// line: text with no words yields a single empty line.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width: f32,
) -> Vec<String> {
    let mut words = text.split_whitespace();
    let mut current = match words.next() {
        Some(first) => first.to_string(),
        None => return vec![String::new()],
    };

    let mut lines = Vec::new();
    for word in words {
        let candidate = format!("{current} {word}");
        if metrics.measure_str(&candidate, size_pt) < max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    lines.push(current);
    lines
}
