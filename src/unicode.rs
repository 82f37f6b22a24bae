//! Codepoint width and UTF-8 decoding helpers.

use unicode_width::UnicodeWidthChar;

/// Number of terminal cells a codepoint occupies (1 or 2).
///
/// Zero-width codepoints (combining marks) are counted as one cell:
/// the engine does no grapheme clustering, so every decoded codepoint
/// lands in its own cell.
#[inline]
#[must_use]
pub fn char_cells(c: char) -> usize {
    // ASCII printable fast path, the overwhelmingly common case
    if (' '..='~').contains(&c) {
        return 1;
    }
    UnicodeWidthChar::width(c).map_or(1, |w| w.clamp(1, 2))
}

/// Decode the first codepoint of a byte slice.
///
/// Returns the codepoint (or `None` for an invalid sequence) and the
/// number of bytes consumed, which is always at least 1 for non-empty
/// input so scanners make progress.
#[must_use]
pub fn decode_prefix(bytes: &[u8]) -> (Option<char>, usize) {
    let take = bytes.len().min(4);
    if take == 0 {
        return (None, 0);
    }
    match std::str::from_utf8(&bytes[..take]) {
        Ok(s) => match s.chars().next() {
            Some(c) => (Some(c), c.len_utf8()),
            None => (None, 1),
        },
        Err(e) => {
            let valid = e.valid_up_to();
            if valid > 0 {
                if let Ok(s) = std::str::from_utf8(&bytes[..valid]) {
                    if let Some(c) = s.chars().next() {
                        return (Some(c), c.len_utf8());
                    }
                }
                (None, 1)
            } else {
                // error_len is None for a truncated sequence at the end
                (None, e.error_len().unwrap_or(take).max(1))
            }
        }
    }
}
