//! Plain-text rendering: source bytes to a cell-grid [`Document`].
//!
//! [`render_plain`] is the one-shot entry point. It splits the source
//! into display rows, transduces each row into styled cells, records
//! search nodes for the non-blank rows, and returns the finished
//! document.

mod escape;
mod hyperlink;
mod line;

use crate::charset::CharsetConverter;
use crate::document::Document;
use crate::history::LinkHistory;
use crate::options::RenderOptions;
use crate::splitter::LineSplitter;
use crate::style::Style;

/// Renders one source buffer into one [`Document`].
///
/// Holds the rendering template that carries inline escape state
/// across row boundaries, and the cursor row currently being built.
pub struct PlainRenderer<'a> {
    options: &'a RenderOptions,
    converter: &'a dyn CharsetConverter,
    history: &'a dyn LinkHistory,
    document: Document,
    /// Style applied to the next plain glyph. Inline escapes rewrite
    /// it and the rewrite persists into following rows.
    template: Style,
    lineno: usize,
}

impl<'a> PlainRenderer<'a> {
    #[must_use]
    pub fn new(
        options: &'a RenderOptions,
        converter: &'a dyn CharsetConverter,
        history: &'a dyn LinkHistory,
    ) -> Self {
        Self {
            options,
            converter,
            history,
            document: Document::new(options.default_style.bg),
            template: options.default_style,
            lineno: 0,
        }
    }

    /// Render `source` and return the finished document.
    pub fn render(mut self, source: &[u8]) -> Document {
        for span in LineSplitter::new(source, self.options) {
            let added = self.render_line(span);
            if added > 0 {
                self.document.add_node(0, self.lineno as u32, added as u32);
            }
            self.lineno += 1;
        }
        self.document.set_height(self.lineno as u32);
        self.document
    }
}

/// Render `source` as plain text under `options`.
#[must_use]
pub fn render_plain(
    source: &[u8],
    options: &RenderOptions,
    converter: &dyn CharsetConverter,
    history: &dyn LinkHistory,
) -> Document {
    PlainRenderer::new(options, converter, history).render(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::IdentityConverter;
    use crate::history::NoHistory;

    fn render(source: &[u8], options: &RenderOptions) -> Document {
        render_plain(source, options, &IdentityConverter, &NoHistory)
    }

    #[test]
    fn test_empty_source() {
        let doc = render(b"", &RenderOptions::default());
        assert_eq!(doc.height(), 0);
        assert_eq!(doc.width(), 0);
        assert!(doc.lines().is_empty());
    }

    #[test]
    fn test_two_rows() {
        let doc = render(b"one\ntwo", &RenderOptions::default());
        assert_eq!(doc.height(), 2);
        assert_eq!(doc.width(), 3);
        assert_eq!(doc.lines()[0].len(), 3);
        assert_eq!(doc.lines()[1].cells()[0].ch(), 't');
    }

    #[test]
    fn test_nodes_skip_blank_rows() {
        let doc = render(b"a\n\nb\n", &RenderOptions::default());
        assert_eq!(doc.height(), 3);
        let ys: Vec<u32> = doc.nodes().iter().map(|n| n.y).collect();
        assert_eq!(ys, vec![0, 2]);
        assert!(doc.nodes().iter().all(|n| n.height == 1));
    }

    #[test]
    fn test_escape_state_carries_across_rows() {
        let options = RenderOptions::default();
        let doc = render(b"\x1b[1mbold\nstill", &options);
        assert!(
            doc.lines()[1].cells()[0]
                .attributes
                .contains(crate::style::TextAttributes::BOLD)
        );
    }
}
