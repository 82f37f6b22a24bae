//! Error types.

use std::fmt;

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for rendering operations.
///
/// Both variants are recoverable at the granularity of one line or one
/// link: the renderer degrades the affected unit and keeps going.
#[derive(Debug)]
pub enum Error {
    /// Storage growth was refused by the allocator.
    Capacity {
        /// Number of elements the grow request asked for.
        needed: usize,
    },
    /// Charset conversion failed for one line.
    Conversion(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacity { needed } => {
                write!(f, "storage growth to {needed} elements failed")
            }
            Self::Conversion(reason) => write!(f, "charset conversion failed: {reason}"),
        }
    }
}

impl std::error::Error for Error {}
