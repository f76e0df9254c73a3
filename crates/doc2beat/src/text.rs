//! Text helpers shared by extraction and generation
//!
//! Lengths are counted in chars, not bytes.

use crate::ELLIPSIS;

/// Cap `text` at `max_chars`, replacing the tail with [`ELLIPSIS`] when cut
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out = take_chars(text, keep).to_string();
    out.push_str(ELLIPSIS);
    out
}

/// Longest prefix of `text` holding at most `n` chars
pub fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Collapse whitespace runs into single spaces and trim
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
