//! Cell styling: attribute bit-set and the rendering template.

use crate::color::{Color, ColorPair};
use bitflags::bitflags;

bitflags! {
    /// Per-cell rendering attributes.
    ///
    /// These mirror what the terminal compositor can express for a plain
    /// text cell. `GRAPHICS` marks cells whose codepoint belongs to the
    /// frame/graphics charset rather than the document charset.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD         = 0x01;
        /// Underlined text.
        const UNDERLINE    = 0x02;
        /// Fixed-width rendering requested by the document.
        const FIXED        = 0x04;
        /// Frame/graphics charset cell.
        const GRAPHICS     = 0x08;
        /// Preformatted block member.
        const PREFORMATTED = 0x10;
    }
}

/// The mutable rendering template: the style applied to the next cell.
///
/// The renderer keeps one template per document pass, seeded from the
/// configured default colors. Inline SGR escapes update it persistently;
/// overstrike emphasis modifies it for a single re-rendered cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub attributes: TextAttributes,
}

impl Style {
    /// Create a style from colors with no attributes.
    #[must_use]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            attributes: TextAttributes::empty(),
        }
    }

    /// The style's color pair.
    #[must_use]
    pub const fn colors(&self) -> ColorPair {
        ColorPair::new(self.fg, self.bg)
    }

    /// This style with both colors replaced.
    #[must_use]
    pub const fn with_colors(mut self, colors: ColorPair) -> Self {
        self.fg = colors.fg;
        self.bg = colors.bg;
        self
    }

    /// This style with an attribute set.
    #[must_use]
    pub const fn with_attribute(mut self, attr: TextAttributes) -> Self {
        self.attributes = self.attributes.union(attr);
        self
    }
}
