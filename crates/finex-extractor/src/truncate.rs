//! Character-budget truncation

/// Cut `text` to at most `max_chars` characters
///
/// Returns the kept prefix and whether anything was dropped. The cut always
/// lands on a character boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (&text[..byte_idx], true),
        None => (text, false),
    }
}
