//! Rendered document model: cell lines, hyperlinks, and search nodes.
//!
//! All storage grows in fixed-size blocks through `try_reserve`, so an
//! allocator refusal surfaces as a recoverable [`Error::Capacity`]
//! instead of aborting the render.

use crate::cell::Cell;
use crate::color::{Color, ColorPair};
use crate::error::{Error, Result};

/// Row storage grows in blocks of this many rows.
pub const ROW_GRANULARITY: usize = 128;
/// Cell storage grows in blocks of this many cells.
pub const LINE_GRANULARITY: usize = 16;
/// Link storage grows in blocks of this many links.
pub const LINK_GRANULARITY: usize = 8;
/// Point storage grows in blocks of this many points.
pub const POINT_GRANULARITY: usize = 16;

fn round_up(n: usize, granularity: usize) -> usize {
    n.div_ceil(granularity) * granularity
}

fn try_reserve_rounded<T>(vec: &mut Vec<T>, min_len: usize, granularity: usize) -> Result<()> {
    let target = round_up(min_len, granularity);
    if target > vec.capacity() {
        vec.try_reserve(target - vec.len())
            .map_err(|_| Error::Capacity { needed: target })?;
    }
    Ok(())
}

/// A cell coordinate covered by a hyperlink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// A rectangle tagging one rendered visual line for full-text search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A detected hyperlink span.
///
/// Links are immutable once created; all points share one row because
/// detection runs per visual line and never spans a wrap boundary.
#[derive(Clone, Debug)]
pub struct Link {
    number: usize,
    uri: String,
    color: ColorPair,
    points: Vec<Point>,
}

impl Link {
    /// Creation-order index; equals the link's position in
    /// [`Document::links`].
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    /// The normalized target URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The colors the link span was rendered with.
    #[must_use]
    pub fn color(&self) -> ColorPair {
        self.color
    }

    /// The cells the link covers, in increasing column order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// One row of cells.
///
/// The logical length may sit below the allocated capacity; capacity
/// grows in [`LINE_GRANULARITY`] blocks.
#[derive(Clone, Debug, Default)]
pub struct Line {
    cells: Vec<Cell>,
}

impl Line {
    /// Committed cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The row's cells.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Grow the row to at least `min_cells`, filling newly exposed
    /// cells with `fill`, and return a mutable view of the whole row.
    pub fn ensure_cells(&mut self, min_cells: usize, fill: Cell) -> Result<&mut [Cell]> {
        if min_cells > self.cells.len() {
            try_reserve_rounded(&mut self.cells, min_cells, LINE_GRANULARITY)?;
            self.cells.resize(min_cells, fill);
        }
        Ok(&mut self.cells)
    }

    /// Commit the row's final length after rendering finishes.
    pub fn trim(&mut self, len: usize) {
        self.cells.truncate(len);
    }
}

/// A fully rendered plain-text document.
///
/// Produced by one rendering pass and read-only afterwards; a new
/// render replaces the whole document.
#[derive(Clone, Debug, Default)]
pub struct Document {
    lines: Vec<Line>,
    links: Vec<Link>,
    nodes: Vec<Node>,
    width: u32,
    height: u32,
    background: Color,
    links_sorted: bool,
}

impl Document {
    /// Create an empty document with the given background color.
    #[must_use]
    pub fn new(background: Color) -> Self {
        Self {
            background,
            ..Self::default()
        }
    }

    /// Widest committed row, in cells.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of visual rows.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Document background color.
    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Whether the link array is in screen order. Cleared whenever a
    /// link is appended; a separate sort step owns setting it.
    #[must_use]
    pub fn links_sorted(&self) -> bool {
        self.links_sorted
    }

    /// All rendered rows.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// One row, if it was materialized.
    #[must_use]
    pub fn line(&self, y: usize) -> Option<&Line> {
        self.lines.get(y)
    }

    /// Detected links in creation order.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Search nodes in increasing row order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    /// Row `y`, created lazily (along with any earlier missing rows).
    pub fn line_mut(&mut self, y: usize) -> Result<&mut Line> {
        if y >= self.lines.len() {
            try_reserve_rounded(&mut self.lines, y + 1, ROW_GRANULARITY)?;
            self.lines.resize_with(y + 1, Line::default);
        }
        Ok(&mut self.lines[y])
    }

    /// Grow row `y` to at least `min_cells` and return a mutable view
    /// into its cell buffer. Raises the document width when the row
    /// becomes the widest seen so far.
    ///
    /// Refused growth leaves the width untouched, so it never reports
    /// more cells than the widest row actually holds.
    pub fn ensure_line_cells(
        &mut self,
        y: usize,
        min_cells: usize,
        fill: Cell,
    ) -> Result<&mut [Cell]> {
        self.line_mut(y)?.ensure_cells(min_cells, fill)?;
        if min_cells as u32 > self.width {
            self.width = min_cells as u32;
        }
        Ok(self.lines[y].cells.as_mut_slice())
    }

    /// Append a link covering `length` cells starting at `(x, y)`.
    ///
    /// Fails without side effects when storage growth is refused, so a
    /// caller can degrade the span to plain text.
    pub fn push_link(
        &mut self,
        uri: String,
        color: ColorPair,
        x: u32,
        y: u32,
        length: usize,
    ) -> Result<&Link> {
        let needed = self.links.len() + 1;
        try_reserve_rounded(&mut self.links, needed, LINK_GRANULARITY)?;

        let mut points = Vec::new();
        try_reserve_rounded(&mut points, length, POINT_GRANULARITY)?;
        for i in 0..length {
            points.push(Point { x: x + i as u32, y });
        }

        let link = Link {
            number: self.links.len(),
            uri,
            color,
            points,
        };
        self.links.push(link);
        self.links_sorted = false;
        Ok(&self.links[self.links.len() - 1])
    }

    /// Mark the link array as screen-ordered. Belongs to the external
    /// sort step, not to rendering.
    pub fn set_links_sorted(&mut self) {
        self.links_sorted = true;
    }

    /// Append a search node for one rendered line and raise the
    /// document bounds to cover it.
    pub fn add_node(&mut self, x: u32, y: u32, width: u32) {
        self.nodes.push(Node {
            x,
            y,
            width,
            height: 1,
        });
        if width > self.width {
            self.width = width;
        }
        if y + 1 > self.height {
            self.height = y + 1;
        }
    }
}
