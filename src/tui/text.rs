//! Display-width helpers for pre-styled text.
//!
//! Frames are built from strings that may already carry ANSI SGR sequences,
//! so every width computation strips those first and then measures terminal
//! cells with `unicode-width`.

use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

const ESC: char = '\u{1b}';
const BEL: char = '\u{7}';

/// Removes terminal escape sequences (CSI such as SGR colors, and OSC) from `text`.
pub fn strip_styles(text: &str) -> Cow<'_, str> {
    if !text.contains(ESC) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != ESC {
            out.push(c);
            continue;
        }
        match chars.next() {
            // CSI: parameters and intermediates, terminated by a byte in @..=~
            Some('[') => {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            // OSC: terminated by BEL or ST (ESC \)
            Some(']') => {
                while let Some(c) = chars.next() {
                    if c == BEL {
                        break;
                    }
                    if c == ESC && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            // Two-character escape; the second char is swallowed.
            _ => {}
        }
    }
    Cow::Owned(out)
}

/// Number of terminal cells `text` occupies once styling is ignored.
pub fn display_width(text: &str) -> usize {
    strip_styles(text).width()
}

/// Right-pads `text` with spaces up to `width` cells. Text already at or
/// beyond `width` is returned unchanged.
pub fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    let mut out = String::with_capacity(text.len() + padding);
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', padding));
    out
}

/// Cuts unstyled `text` so that it fits in `max_width` cells.
/// A wide character that would straddle the limit is dropped.
///
/// Each prefix is measured as a whole string, so sequences whose width
/// differs from the sum of their chars (emoji presentation selectors,
/// combining marks) are cut where the terminal would actually overflow.
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    for (index, c) in text.char_indices() {
        let end = index + c.len_utf8();
        if text[..end].width() > max_width {
            return &text[..index];
        }
    }
    text
}

/// Collapses `text` onto one line: control characters (newlines, tabs,
/// stray escapes) become spaces and surrounding whitespace is trimmed.
pub fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}
