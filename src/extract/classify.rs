//! Page classification: artwork entry vs. page to skip.

use super::fields::FieldMap;

/// Section headers that mark a page as non-artwork when they appear as a
/// standalone line.
const SECTION_BLACKLIST: [&str; 8] = [
    "about the artist",
    "biography",
    "artist biography",
    "index",
    "table of contents",
    "contents",
    "exhibition history",
    "curriculum vitae",
];

/// Decide whether a page is an artwork entry.
///
/// Ordered, short-circuiting checks, cheapest first:
/// 1. a page with more lines than `max_lines` is a biography or essay page;
/// 2. a standalone blacklisted section header rejects the page;
/// 3. a page from which no field was extracted has nothing to emit.
///
/// The policy prefers false negatives over false positives: a skipped
/// artwork page costs one record, a bio page emitted as artwork poisons
/// downstream consumers.
pub fn is_artwork_page(lines: &[String], fields: &FieldMap, max_lines: usize) -> bool {
    if lines.len() > max_lines {
        return false;
    }

    if lines.iter().any(|line| {
        let lower = line.trim().to_lowercase();
        SECTION_BLACKLIST.contains(&lower.as_str())
    }) {
        return false;
    }

    if fields.is_empty() {
        return false;
    }

    true
}
