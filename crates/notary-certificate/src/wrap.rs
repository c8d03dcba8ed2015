//! Greedy per-character line filling.
//!
//! Text is filled one character at a time: a character joins the current
//! line while the line stays strictly narrower than `max_width`, otherwise
//! the line is emitted and the character starts the next one. Width is
//! accumulated incrementally from per-character advances, so wrapping is
//! linear in the text length.
//!
//! The trailing line is always emitted, even when empty. A character wider
//! than `max_width` on its own is still placed (on its own line) and is the
//! only way a line can exceed the limit.

/// Splits `text` into lines narrower than `max_width`.
///
/// `advance(prev, c)` returns the width `c` adds when it follows `prev` on
/// the same line (`None` at the start of a line).
pub fn wrap_greedy<F>(text: &str, max_width: f32, mut advance: F) -> Vec<String>
where
    F: FnMut(Option<char>, char) -> f32,
{
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut width = 0.0f32;
    let mut prev: Option<char> = None;

    for c in text.chars() {
        let candidate = width + advance(prev, c);
        if candidate < max_width {
            line.push(c);
            width = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push(c);
            width = advance(None, c);
        }
        prev = Some(c);
    }

    lines.push(line);
    lines
}
