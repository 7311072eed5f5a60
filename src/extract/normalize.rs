//! Text normalization: raw page text to a canonical line sequence.

use unicode_normalization::UnicodeNormalization;

/// Inline separators that catalogs use instead of line breaks.
const INLINE_SEPARATORS: [char; 2] = ['|', ';'];

/// Normalize raw page text into trimmed, non-empty lines.
///
/// Pure function. Applies Unicode NFC normalization, repairs hyphenation
/// across line wraps, splits inline-separated layouts (`|`, `;`) into one
/// line per segment, and collapses internal runs of whitespace. Empty or
/// whitespace-only input yields an empty Vec.
pub fn normalize_lines(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let text: String = text.nfc().collect();
    let text = fix_hyphenation(&text);

    let mut lines = Vec::new();
    for raw_line in text.lines() {
        for segment in split_inline(raw_line) {
            let collapsed = collapse_whitespace(segment);
            if !collapsed.is_empty() {
                lines.push(collapsed);
            }
        }
    }

    lines
}

/// Re-join words hyphenated across a line wrap ("water-\ncolor" → "watercolor").
///
/// Only rejoins when both sides of the break are lowercase letters, so real
/// hyphenated compounds at line starts and numeric ranges survive.
fn fix_hyphenation(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            // Look past the hyphen for a newline followed by a lowercase letter
            let mut lookahead = chars.clone();
            if lookahead.next_if_eq(&'\n').is_some() {
                let prev_lower = result.chars().last().is_some_and(|p| p.is_lowercase());
                let next_lower = lookahead.peek().is_some_and(|n| n.is_lowercase());
                if prev_lower && next_lower {
                    chars = lookahead;
                    continue;
                }
            }
        }
        result.push(c);
    }

    result
}

/// Split a line on inline separators when it looks like a packed record line.
fn split_inline(line: &str) -> Vec<&str> {
    if INLINE_SEPARATORS.iter().any(|&sep| line.contains(sep)) {
        line.split(|c| INLINE_SEPARATORS.contains(&c)).collect()
    } else {
        vec![line]
    }
}

/// Trim and collapse internal whitespace runs to a single space.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
