//! `plaindoc` - Plain-text layout and cell rendering
//!
//! Turns a raw text buffer into a grid of styled cells for terminal
//! document viewers: line splitting with optional wrapping, tab
//! expansion, overstrike emulation, inline SGR color escapes, and
//! hyperlink detection.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow Cell::CellContent etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod cell;
pub mod charset;
pub mod color;
pub mod document;
pub mod error;
pub mod history;
pub mod log;
pub mod options;
pub mod renderer;
pub mod splitter;
pub mod style;
pub mod unicode;

// Re-export core types at crate root
pub use cell::{Cell, CellContent};
pub use charset::{CharsetConverter, IdentityConverter};
pub use color::{Color, ColorMode, ColorPair};
pub use document::{Document, Line, Link, Node, Point};
pub use error::{Error, Result};
pub use history::{LinkHistory, NoHistory};
pub use log::{LogLevel, emit_log, set_log_callback};
pub use options::RenderOptions;
pub use renderer::{PlainRenderer, render_plain};
pub use splitter::LineSplitter;
pub use style::{Style, TextAttributes};
