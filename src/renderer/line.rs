//! Per-line cell transduction.
//!
//! One forward scan over a converted span turns bytes into styled
//! cells: tab expansion, legacy `char BS char` overstrike emulation,
//! inline SGR escapes, byte sanitization, and the hyperlink hook.

use super::PlainRenderer;
use super::escape::decode_sgr;
use super::hyperlink::{detect_link, uri_run_length};
use crate::cell::Cell;
use crate::log::{LogLevel, emit_log};
use crate::style::TextAttributes;
use crate::unicode::{char_cells, decode_prefix};

const BS: u8 = 0x08;
const TAB: u8 = 0x09;
const ESC: u8 = 0x1b;
const DEL: u8 = 0x7f;

/// Printable on a terminal without substitution.
const fn is_screen_safe(b: u8) -> bool {
    b >= b' ' && b != DEL
}

/// How an overstrike pair re-renders the struck cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Overstrike {
    /// No recognized emphasis pattern.
    None,
    /// `_ BS x`: underline the re-rendered glyph.
    Underline,
    /// `x BS x`: embolden the glyph.
    Bold,
    /// `_ BS _`: inherit the preceding cell's emphasis, bold when
    /// there is none (more useful than underlining an underscore).
    Inherit,
}

/// Classify an overstrike from the struck cell's glyph and the raw
/// byte following the backspace.
pub(super) fn classify_overstrike(struck: char, following: u8) -> Overstrike {
    if struck == '_' && following == b'_' {
        Overstrike::Inherit
    } else if struck == '_' {
        Overstrike::Underline
    } else if following != 0 && struck == following as char {
        Overstrike::Bold
    } else {
        Overstrike::None
    }
}

/// Attributes an overstrike adds, given the attributes of the cell
/// before the struck one (for the inherit case).
pub(super) fn overstrike_attributes(
    kind: Overstrike,
    inherited: TextAttributes,
) -> TextAttributes {
    match kind {
        Overstrike::None => TextAttributes::empty(),
        Overstrike::Underline => TextAttributes::UNDERLINE,
        Overstrike::Bold => TextAttributes::BOLD,
        Overstrike::Inherit => {
            if inherited.is_empty() {
                TextAttributes::BOLD
            } else {
                inherited
            }
        }
    }
}

/// Write a cell at the cursor, overwriting after a backspace rewind.
fn put(row: &mut Vec<Cell>, pos: &mut usize, cell: Cell) {
    if *pos < row.len() {
        row[*pos] = cell;
    } else {
        row.push(cell);
    }
    *pos += 1;
}

impl PlainRenderer<'_> {
    /// Render one span into row `lineno` and return the number of
    /// cells committed. Conversion or storage failure degrades the
    /// row to blank and returns 0.
    pub(super) fn render_line(&mut self, span: &[u8]) -> usize {
        let mut line = match self.converter.convert(span) {
            Ok(bytes) => bytes,
            Err(err) => {
                emit_log(
                    LogLevel::Warn,
                    &format!("row {}: {err}; leaving the row blank", self.lineno),
                );
                return 0;
            }
        };
        let width = line.len();

        let mut row: Vec<Cell> = Vec::new();
        if row.try_reserve(width).is_err() {
            emit_log(
                LogLevel::Warn,
                &format!("row {}: cell buffer growth refused", self.lineno),
            );
            return 0;
        }

        let mut style = self.template;
        let mut reversed = false;
        // Cursor into the row; doubles as the current column
        let mut pos = 0usize;
        let mut i = 0usize;

        while i < width {
            let b = line[i];
            let following = if i + 1 < width { line[i + 1] } else { 0 };
            match b {
                ESC => {
                    i += decode_sgr(&line[i..], &mut self.template, &mut reversed);
                    style = self.template;
                }
                TAB if following != BS => {
                    let tab_width = 8 - pos % 8;
                    for _ in 0..tab_width {
                        put(&mut row, &mut pos, Cell::new(' ', style));
                    }
                    style = self.template;
                    i += 1;
                }
                BS => {
                    if pos == 0 {
                        // Backspacing at the start of the line
                        i += 1;
                        continue;
                    }
                    let prev = line[i - 1];
                    pos -= 1;
                    if following == b'_' && prev != b'_' {
                        // x BS _ arrives transposed; rewrite it as
                        // _ BS x and rescan. The prev check keeps two
                        // underscores from swapping forever.
                        line[i - 1] = b'_';
                        if i + 1 < width {
                            line[i + 1] = prev;
                        }
                        i -= 1;
                        continue;
                    }
                    let struck = row[pos];
                    let inherited = if pos > 0 {
                        row[pos - 1].attributes
                    } else {
                        TextAttributes::empty()
                    };
                    let added = overstrike_attributes(
                        classify_overstrike(struck.ch(), following),
                        inherited,
                    );
                    if !added.is_empty() {
                        // Accumulate with the struck cell so
                        // _ BS x BS x ends up bold and underlined
                        style.attributes |= added | struck.attributes;
                    }
                    i += 1;
                }
                _ => {
                    if self.options.detect_links
                        && b.is_ascii_alphabetic()
                        && following.is_ascii_alphabetic()
                    {
                        let run_len = uri_run_length(&line[i..]);
                        if run_len > 0 {
                            if let Some(colors) = detect_link(
                                &mut self.document,
                                self.options,
                                self.history,
                                &line[i..i + run_len],
                                pos as u32,
                                self.lineno as u32,
                            ) {
                                let link_style = style.with_colors(colors);
                                for &rb in &line[i..i + run_len] {
                                    put(&mut row, &mut pos, Cell::new(rb as char, link_style));
                                }
                                i += run_len;
                                style = self.template;
                                continue;
                            }
                        }
                    }
                    if self.options.utf8 && b >= 0x80 {
                        let (decoded, len) = decode_prefix(&line[i..]);
                        i += len;
                        if let Some(c) = decoded {
                            let c = if c < ' ' || c == '\u{7f}' { '.' } else { c };
                            put(&mut row, &mut pos, Cell::new(c, style));
                            if char_cells(c) == 2 {
                                put(&mut row, &mut pos, Cell::continuation(style));
                            }
                            style = self.template;
                        }
                    } else {
                        let c = if is_screen_safe(b) { b as char } else { '.' };
                        put(&mut row, &mut pos, Cell::new(c, style));
                        style = self.template;
                        i += 1;
                    }
                }
            }
        }

        row.truncate(pos);
        let blank = Cell::blank(self.options.default_style);
        match self.document.ensure_line_cells(self.lineno, row.len(), blank) {
            Ok(cells) => cells[..row.len()].copy_from_slice(&row),
            Err(err) => {
                emit_log(
                    LogLevel::Warn,
                    &format!("row {}: {err}; leaving the row blank", self.lineno),
                );
                return 0;
            }
        }
        if let Ok(committed) = self.document.line_mut(self.lineno) {
            committed.trim(row.len());
        }
        pos
    }
}
