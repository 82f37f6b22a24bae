//! End-to-end rendering tests: raw source bytes in, finished
//! [`Document`] out.

use plaindoc::{
    Cell, CellContent, Color, Document, IdentityConverter, LinkHistory, NoHistory, RenderOptions,
    Style, TextAttributes, render_plain,
};

fn render(source: &[u8], options: &RenderOptions) -> Document {
    render_plain(source, options, &IdentityConverter, &NoHistory)
}

fn row_text(doc: &Document, y: usize) -> String {
    doc.lines()[y]
        .cells()
        .iter()
        .filter(|c| c.content != CellContent::Continuation)
        .map(Cell::ch)
        .collect()
}

#[test]
fn test_plain_rows() {
    let doc = render(b"first line\nsecond\n", &RenderOptions::default());
    assert_eq!(doc.height(), 2);
    assert_eq!(doc.width(), 10);
    assert_eq!(row_text(&doc, 0), "first line");
    assert_eq!(row_text(&doc, 1), "second");
}

#[test]
fn test_default_colors_fill_cells() {
    let opts = RenderOptions::default();
    let doc = render(b"x", &opts);
    let cell = doc.lines()[0].cells()[0];
    assert_eq!(cell.fg, opts.default_style.fg);
    assert_eq!(cell.bg, opts.default_style.bg);
    assert_eq!(doc.background(), opts.default_style.bg);
}

#[test]
fn test_control_bytes_render_as_dots() {
    let doc = render(b"a\x01b\x7fc", &RenderOptions::default());
    assert_eq!(row_text(&doc, 0), "a.b.c");
}

#[test]
fn test_tab_expands_to_next_stop() {
    let doc = render(b"ab\tc", &RenderOptions::default());
    assert_eq!(doc.lines()[0].len(), 9);
    assert_eq!(row_text(&doc, 0), "ab      c");

    // A tab landing exactly on a stop still advances a full stop
    let doc = render(b"\tx", &RenderOptions::default());
    assert_eq!(doc.lines()[0].cells()[8].ch(), 'x');
}

#[test]
fn test_underline_overstrike() {
    let doc = render(b"_\x08x", &RenderOptions::default());
    let cells = doc.lines()[0].cells();
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].ch(), 'x');
    assert!(cells[0].attributes.contains(TextAttributes::UNDERLINE));
}

#[test]
fn test_bold_overstrike() {
    let doc = render(b"x\x08x", &RenderOptions::default());
    let cells = doc.lines()[0].cells();
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].ch(), 'x');
    assert!(cells[0].attributes.contains(TextAttributes::BOLD));
}

#[test]
fn test_transposed_overstrike_normalized() {
    // x BS _ means the same underlined x as _ BS x
    let doc = render(b"x\x08_", &RenderOptions::default());
    let cells = doc.lines()[0].cells();
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].ch(), 'x');
    assert!(cells[0].attributes.contains(TextAttributes::UNDERLINE));
}

#[test]
fn test_double_underscore_inherits_emphasis() {
    // Bold "a" followed by _ BS _: the underscore borrows the bold
    let doc = render(b"a\x08a_\x08_", &RenderOptions::default());
    let cells = doc.lines()[0].cells();
    assert_eq!(cells.len(), 2);
    assert!(cells[0].attributes.contains(TextAttributes::BOLD));
    assert_eq!(cells[1].ch(), '_');
    assert!(cells[1].attributes.contains(TextAttributes::BOLD));
}

#[test]
fn test_backspace_at_line_start_ignored() {
    let doc = render(b"\x08ab", &RenderOptions::default());
    assert_eq!(row_text(&doc, 0), "ab");
}

#[test]
fn test_tab_before_backspace_not_expanded() {
    // The overstruck tab renders as a sanitized dot, then the
    // backspace re-renders the cell
    let doc = render(b"\t\x08x", &RenderOptions::default());
    let cells = doc.lines()[0].cells();
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].ch(), 'x');
}

#[test]
fn test_sgr_colors_their_span() {
    let doc = render(b"\x1b[31mred\x1b[0mok", &RenderOptions::default());
    let cells = doc.lines()[0].cells();
    assert_eq!(row_text(&doc, 0), "redok");
    assert_eq!(cells[0].fg, Color::ansi(1));
    assert_eq!(cells[2].fg, Color::ansi(1));
    assert_eq!(cells[3].fg, Color::ansi(7));
}

#[test]
fn test_sgr_state_spans_rows() {
    let doc = render(b"\x1b[42mtop\nbottom", &RenderOptions::default());
    assert_eq!(doc.lines()[1].cells()[0].bg, Color::ansi(2));
}

#[test]
fn test_soft_wrap_breaks_at_whitespace() {
    let opts = RenderOptions {
        wrap_width: Some(10),
        ..RenderOptions::default()
    };
    let doc = render(b"hello wide world", &opts);
    assert_eq!(doc.height(), 2);
    assert_eq!(row_text(&doc, 0), "hello");
    assert_eq!(row_text(&doc, 1), "wide world");
    assert!(doc.width() <= 10);
}

#[test]
fn test_hard_wrap_splits_long_word() {
    let opts = RenderOptions {
        wrap_width: Some(4),
        ..RenderOptions::default()
    };
    let doc = render(b"abcdefghij", &opts);
    assert_eq!(doc.height(), 3);
    assert_eq!(row_text(&doc, 0), "abcd");
    assert_eq!(row_text(&doc, 2), "ij");
}

#[test]
fn test_empty_line_compression() {
    let opts = RenderOptions {
        compress_empty_lines: true,
        ..RenderOptions::default()
    };
    let doc = render(b"a\n\n\n\nb", &opts);
    assert_eq!(doc.height(), 3);
    assert_eq!(row_text(&doc, 1), "");
    assert_eq!(row_text(&doc, 2), "b");
}

#[test]
fn test_wide_chars_take_two_cells() {
    let opts = RenderOptions {
        utf8: true,
        ..RenderOptions::default()
    };
    let doc = render("漢b".as_bytes(), &opts);
    let cells = doc.lines()[0].cells();
    assert_eq!(cells.len(), 3);
    assert_eq!(cells[0].ch(), '漢');
    assert_eq!(cells[1].content, CellContent::Continuation);
    assert_eq!(cells[2].ch(), 'b');
    assert_eq!(doc.width(), 3);
}

#[test]
fn test_non_utf8_mode_sanitizes_high_bytes() {
    let doc = render("é".as_bytes(), &RenderOptions::default());
    // Two raw bytes, both above 0x7f, both printable as-is
    assert_eq!(doc.lines()[0].len(), 2);
}

#[test]
fn test_link_detection() {
    let opts = RenderOptions {
        detect_links: true,
        ..RenderOptions::default()
    };
    let doc = render(b"see http://example.com now", &opts);

    assert_eq!(doc.links().len(), 1);
    let link = &doc.links()[0];
    assert_eq!(link.number(), 0);
    assert_eq!(link.uri(), "http://example.com");
    assert_eq!(link.color().fg, Color::BLUE);
    assert_eq!(link.points().len(), 18);
    assert_eq!((link.points()[0].x, link.points()[0].y), (4, 0));
    // Sorting the link array is a separate step the renderer never
    // performs; the flag stays cleared by the append
    assert!(!doc.links_sorted());

    let cells = doc.lines()[0].cells();
    assert_eq!(cells[3].fg, opts.default_style.fg);
    assert_eq!(cells[4].fg, Color::BLUE);
    assert_eq!(cells[21].fg, Color::BLUE);
    assert_eq!(cells[22].fg, opts.default_style.fg);
}

#[test]
fn test_email_detection() {
    let opts = RenderOptions {
        detect_links: true,
        ..RenderOptions::default()
    };
    let doc = render(b"mail user@example.com here", &opts);
    assert_eq!(doc.links().len(), 1);
    assert_eq!(doc.links()[0].uri(), "mailto:user@example.com");
    // The visible text keeps the bare address
    assert_eq!(row_text(&doc, 0), "mail user@example.com here");
}

#[test]
fn test_trailing_punctuation_not_linked() {
    let opts = RenderOptions {
        detect_links: true,
        ..RenderOptions::default()
    };
    let doc = render(b"go to http://example.com.", &opts);
    assert_eq!(doc.links().len(), 1);
    assert_eq!(doc.links()[0].uri(), "http://example.com");
    assert_eq!(doc.links()[0].points().len(), 18);
}

#[test]
fn test_links_numbered_in_reading_order() {
    let opts = RenderOptions {
        detect_links: true,
        ..RenderOptions::default()
    };
    let doc = render(b"http://a.example\nhttp://b.example", &opts);
    let numbers: Vec<usize> = doc.links().iter().map(|l| l.number()).collect();
    assert_eq!(numbers, vec![0, 1]);
    assert_eq!(doc.links()[1].points()[0].y, 1);
}

#[test]
fn test_visited_links_recolored() {
    struct Visited;
    impl LinkHistory for Visited {
        fn is_visited(&self, uri: &str) -> bool {
            uri == "http://example.com"
        }
        fn is_bookmarked(&self, _uri: &str) -> bool {
            false
        }
    }

    let opts = RenderOptions {
        detect_links: true,
        ..RenderOptions::default()
    };
    let doc = render_plain(
        b"http://example.com",
        &opts,
        &IdentityConverter,
        &Visited,
    );
    assert_eq!(doc.links()[0].color().fg, opts.visited_link_color);
    assert_eq!(doc.lines()[0].cells()[0].fg, opts.visited_link_color);
}

#[test]
fn test_detection_off_leaves_plain_text() {
    let doc = render(b"http://example.com", &RenderOptions::default());
    assert!(doc.links().is_empty());
    assert_eq!(doc.lines()[0].cells()[0].fg, Color::GRAY);
}

#[test]
fn test_search_nodes_cover_nonblank_rows() {
    let doc = render(b"abc\n\nde", &RenderOptions::default());
    let nodes = doc.nodes();
    assert_eq!(nodes.len(), 2);
    assert_eq!((nodes[0].x, nodes[0].y, nodes[0].width), (0, 0, 3));
    assert_eq!((nodes[1].x, nodes[1].y, nodes[1].width), (0, 2, 2));
}

#[test]
fn test_width_is_longest_row() {
    let doc = render(b"ab\nabcdef\nabc", &RenderOptions::default());
    assert_eq!(doc.width(), 6);
    assert_eq!(doc.height(), 3);
}

#[test]
fn test_custom_default_style() {
    let opts = RenderOptions {
        default_style: Style::new(Color::WHITE, Color::BLUE),
        ..RenderOptions::default()
    };
    let doc = render(b"z", &opts);
    let cell = doc.lines()[0].cells()[0];
    assert_eq!(cell.fg, Color::WHITE);
    assert_eq!(cell.bg, Color::BLUE);
    assert_eq!(doc.background(), Color::BLUE);
}

#[test]
fn test_crlf_terminators() {
    let doc = render(b"one\r\ntwo\rthree", &RenderOptions::default());
    assert_eq!(doc.height(), 3);
    assert_eq!(row_text(&doc, 2), "three");
}
