//! Rendering configuration.

use crate::color::{Color, ColorMode};
use crate::style::Style;

/// Options for one plain-text rendering pass.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Wrap width in cells; `None` means lines break only at real
    /// terminators.
    pub wrap_width: Option<u32>,
    /// Collapse runs of blank source lines into a single blank visual
    /// line.
    pub compress_empty_lines: bool,
    /// Autodetect hyperlinks and e-mail addresses in the text.
    pub detect_links: bool,
    /// Treat the (already converted) source as UTF-8; double-width
    /// codepoints then occupy two cells.
    pub utf8: bool,
    /// Color depth of the consuming compositor.
    ///
    /// Carried through untouched: cells are always stored as 24-bit
    /// RGB, and quantizing them down to this depth (via
    /// [`Color::to_ansi16`](crate::color::Color::to_ansi16) or the
    /// 256-color palette) is the compositor's job at paint time.
    pub color_mode: ColorMode,
    /// Default colors the rendering template starts from.
    pub default_style: Style,
    /// Foreground for detected links.
    pub link_color: Color,
    /// Foreground for links found in the history store.
    pub visited_link_color: Color,
    /// Foreground for links found in the bookmark store.
    pub bookmark_link_color: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            wrap_width: None,
            compress_empty_lines: false,
            detect_links: false,
            utf8: false,
            color_mode: ColorMode::default(),
            default_style: Style::new(Color::GRAY, Color::BLACK),
            link_color: Color::BLUE,
            visited_link_color: Color::YELLOW,
            bookmark_link_color: Color::MAGENTA,
        }
    }
}
