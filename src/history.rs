//! Visited/bookmarked lookup port.
//!
//! Link colors depend on whether a URI appears in the browser's global
//! history or bookmark store. Both stores live outside the engine and
//! are injected as read-only predicates so the core renders without a
//! real persistence layer.

/// Read-only predicates over the host's history and bookmark stores.
pub trait LinkHistory {
    /// Whether the URI was previously visited.
    fn is_visited(&self, uri: &str) -> bool;

    /// Whether the URI is bookmarked.
    fn is_bookmarked(&self, uri: &str) -> bool;
}

/// A host with no history or bookmarks; every link gets the default
/// link color.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHistory;

impl LinkHistory for NoHistory {
    fn is_visited(&self, _uri: &str) -> bool {
        false
    }

    fn is_bookmarked(&self, _uri: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_history() {
        assert!(!NoHistory.is_visited("http://example.com"));
        assert!(!NoHistory.is_bookmarked("http://example.com"));
    }
}
