//! Logical-to-visual line splitting.
//!
//! [`LineSplitter`] walks a raw byte buffer and yields one span per
//! visual line: it honors `CR`/`LF`/`CRLF` terminators, wraps at a
//! column boundary (soft wrap at the last whitespace when possible,
//! hard wrap otherwise), strips blank lines to zero bytes, and under
//! empty-line compression suppresses blank lines that follow another
//! blank line or a soft-wrapped continuation.
//!
//! The wrap boundary is a rendering-column boundary, not a byte
//! boundary: tabs count the columns they will expand to and, in UTF-8
//! mode, double-width codepoints count two.

use crate::options::RenderOptions;
use crate::unicode::{char_cells, decode_prefix};

/// Whitespace inside a line. Terminator bytes are handled separately.
const fn is_line_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0b | 0x0c)
}

/// Iterator over the visual-line spans of a byte buffer.
///
/// Yields each span exactly as the cell transducer should consume it;
/// suppressed (compressed) blank lines never appear. Two splitters
/// over the same input and options yield identical spans.
#[derive(Clone, Debug)]
pub struct LineSplitter<'a> {
    source: &'a [u8],
    pos: usize,
    wrap_width: usize,
    compress: bool,
    utf8: bool,
    was_empty: bool,
    was_wrapped: bool,
}

impl<'a> LineSplitter<'a> {
    /// Create a splitter over `source` with the pass's options.
    #[must_use]
    pub fn new(source: &'a [u8], options: &RenderOptions) -> Self {
        Self {
            source,
            pos: 0,
            wrap_width: options.wrap_width.map_or(usize::MAX, |w| w as usize),
            compress: options.compress_empty_lines,
            utf8: options.utf8,
            was_empty: false,
            was_wrapped: false,
        }
    }
}

impl<'a> Iterator for LineSplitter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        loop {
            if self.pos >= self.source.len() {
                return None;
            }
            let rest = &self.source[self.pos..];

            let mut width = 0usize; // bytes scanned
            let mut cells = 0usize; // expanded columns
            let mut step = 0usize; // terminator bytes
            let mut last_space = 0usize;
            let mut only_spaces = true;
            let mut leading_spaces = 0usize;
            let mut trailing_spaces = 0usize;

            while width < rest.len() {
                let b = rest[width];
                if b == b'\r' {
                    step = 1;
                    if width + 1 < rest.len() && rest[width + 1] == b'\n' {
                        step = 2;
                    }
                    break;
                }
                if b == b'\n' {
                    step = 1;
                    break;
                }

                let (advance, columns) = if b == b'\t' {
                    (1, 8 - cells % 8)
                } else if self.utf8 && b >= 0x80 {
                    let (c, len) = decode_prefix(&rest[width..]);
                    (len, c.map_or(0, char_cells))
                } else {
                    (1, 1)
                };
                if width > 0 && cells + columns > self.wrap_width {
                    break;
                }

                if is_line_whitespace(b) {
                    last_space = width;
                    if only_spaces {
                        leading_spaces += 1;
                    } else {
                        trailing_spaces += 1;
                    }
                } else {
                    only_spaces = false;
                    trailing_spaces = 0;
                }
                width += advance;
                cells += columns;
            }

            if only_spaces && step > 0 {
                // An intentionally blank visual line
                if self.compress && (self.was_empty || self.was_wrapped) {
                    self.pos += leading_spaces + step;
                    continue;
                }
                self.was_empty = true;
                self.was_wrapped = false;
                self.pos += width + step;
                return Some(&rest[width..width]);
            }

            self.was_empty = false;
            self.was_wrapped = step == 0;

            if trailing_spaces > 0 && step > 0 {
                // Drop trailing whitespace before the terminator
                width -= trailing_spaces;
                step += trailing_spaces;
            }
            if step == 0 && width < rest.len() && last_space > 0 {
                // Soft wrap at the last whitespace; the remainder is
                // rescanned as the next line
                width = last_space;
                step = 1;
            }

            self.pos += width + step;
            return Some(&rest[..width]);
        }
    }
}
