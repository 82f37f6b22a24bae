//! Inline hyperlink and e-mail autodetection.

use crate::color::ColorPair;
use crate::document::Document;
use crate::history::LinkHistory;
use crate::options::RenderOptions;

/// Schemes the engine knows how to hand off to protocol handlers.
/// A parsed URI with any other scheme is not linkified.
const KNOWN_SCHEMES: &[&str] = &[
    "file", "finger", "ftp", "ftps", "gemini", "gopher", "http", "https", "irc", "mailto", "news",
    "nntp", "sftp", "telnet",
];

/// Bytes allowed inside a URI candidate run.
pub(super) const fn is_url_char(b: u8) -> bool {
    b > b' ' && !matches!(b, b'<' | b'>' | b'(' | b')' | b'"' | b'\'')
}

/// Length of the URI candidate starting at `bytes[0]`: the maximal
/// URL-safe run, minus any trailing `.`/`,` punctuation.
pub(super) fn uri_run_length(bytes: &[u8]) -> usize {
    let mut end = bytes.iter().take_while(|&&b| is_url_char(b)).count();
    while end > 0 && matches!(bytes[end - 1], b'.' | b',') {
        end -= 1;
    }
    end
}

/// Lowercase the scheme and authority of a URI, leaving the rest of
/// the string untouched.
fn normalize_uri(uri: &str) -> String {
    let Some(colon) = uri.find(':') else {
        return uri.to_string();
    };
    let mut out = String::with_capacity(uri.len());
    out.push_str(&uri[..colon].to_ascii_lowercase());
    let rest = &uri[colon..];
    if let Some(after) = rest.strip_prefix("://") {
        let host_end = after.find(['/', '?', '#']).unwrap_or(after.len());
        out.push_str("://");
        out.push_str(&after[..host_end].to_ascii_lowercase());
        out.push_str(&after[host_end..]);
    } else {
        out.push_str(rest);
    }
    out
}

/// Classify a candidate run as a link target.
///
/// A run with an embedded `@` and at least one character on each side
/// is an e-mail address and gets a `mailto:` target (the visible text
/// is left alone). Anything else must parse as an absolute URI with a
/// recognized scheme and a non-empty host or path.
fn classify(run: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(run).ok()?;

    if let Some(at) = memchr::memchr(b'@', run) {
        if at > 0 && at + 1 < run.len() {
            let mut uri = String::with_capacity("mailto:".len() + text.len());
            uri.push_str("mailto:");
            uri.push_str(text);
            return Some(uri);
        }
    }

    let parsed = url::Url::parse(text).ok()?;
    if !KNOWN_SCHEMES.contains(&parsed.scheme()) {
        return None;
    }
    let has_host = parsed.host_str().is_some_and(|h| !h.is_empty());
    if !has_host && parsed.path().is_empty() {
        return None;
    }
    Some(normalize_uri(text))
}

/// Try to register a link for `run` rendered at `(x, y)`.
///
/// Returns the colors to paint the span with, or `None` when the run
/// is not a link or storage growth failed (the caller then renders the
/// span as plain text).
pub(super) fn detect_link(
    document: &mut Document,
    options: &RenderOptions,
    history: &dyn LinkHistory,
    run: &[u8],
    x: u32,
    y: u32,
) -> Option<ColorPair> {
    let uri = classify(run)?;

    let fg = if history.is_visited(&uri) {
        options.visited_link_color
    } else if history.is_bookmarked(&uri) {
        options.bookmark_link_color
    } else {
        options.link_color
    };
    let color = ColorPair::new(fg, options.default_style.bg);

    document.push_link(uri, color, x, y, run.len()).ok()?;
    Some(color)
}
