//! Terminal cell type representing a single character position.
//!
//! A rendered document is a grid of cells, each holding one codepoint
//! plus styling. A double-width codepoint occupies two cells: the glyph
//! itself followed by a [`CellContent::Continuation`] marker.

use crate::color::Color;
use crate::style::{Style, TextAttributes};
use crate::unicode::char_cells;

/// Content of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellContent {
    /// A codepoint (display width 1 or 2).
    Char(char),
    /// Right half of a double-width glyph in the previous cell.
    Continuation,
    /// Blank cell, renders as a space.
    #[default]
    Empty,
}

impl CellContent {
    /// The codepoint, if this is a `Char` cell.
    #[must_use]
    pub const fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Display width in cells.
    #[must_use]
    pub fn display_width(&self) -> usize {
        match self {
            Self::Char(c) => char_cells(*c),
            Self::Continuation => 0,
            Self::Empty => 1,
        }
    }
}

/// One terminal cell: codepoint, colors, and attributes.
///
/// Cells are written by the rendering pass and read-only afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub content: CellContent,
    pub fg: Color,
    pub bg: Color,
    pub attributes: TextAttributes,
}

impl Cell {
    /// Create a cell holding a codepoint, styled by the template.
    #[must_use]
    pub const fn new(ch: char, style: Style) -> Self {
        Self {
            content: CellContent::Char(ch),
            fg: style.fg,
            bg: style.bg,
            attributes: style.attributes,
        }
    }

    /// A blank cell in the given style, used to fill newly exposed
    /// storage.
    #[must_use]
    pub const fn blank(style: Style) -> Self {
        Self {
            content: CellContent::Empty,
            fg: style.fg,
            bg: style.bg,
            attributes: TextAttributes::empty(),
        }
    }

    /// A continuation marker for the right half of a wide glyph.
    #[must_use]
    pub const fn continuation(style: Style) -> Self {
        Self {
            content: CellContent::Continuation,
            fg: style.fg,
            bg: style.bg,
            attributes: style.attributes,
        }
    }

    /// The codepoint shown in this cell (`' '` for blanks).
    #[must_use]
    pub fn ch(&self) -> char {
        self.content.as_char().unwrap_or(' ')
    }

    /// Display width of this cell.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.content.display_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_new() {
        let style = Style::new(Color::GREEN, Color::BLACK);
        let cell = Cell::new('A', style);
        assert_eq!(cell.content, CellContent::Char('A'));
        assert_eq!(cell.fg, Color::GREEN);
        assert_eq!(cell.ch(), 'A');
        assert_eq!(cell.display_width(), 1);
    }

    #[test]
    fn test_blank_drops_attributes() {
        let style = Style::new(Color::WHITE, Color::BLACK).with_attribute(TextAttributes::BOLD);
        let cell = Cell::blank(style);
        assert_eq!(cell.content, CellContent::Empty);
        assert!(cell.attributes.is_empty());
        assert_eq!(cell.ch(), ' ');
    }

    #[test]
    fn test_wide_char_and_continuation() {
        let style = Style::default();
        assert_eq!(Cell::new('漢', style).display_width(), 2);
        assert_eq!(Cell::continuation(style).display_width(), 0);
    }
}
