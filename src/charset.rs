//! Charset conversion port.
//!
//! Detection and conversion live outside the engine; the renderer only
//! consumes an injected byte-to-byte converter, applied once per
//! logical line before cell transduction.

use crate::error::Result;

/// Byte-to-byte charset converter.
pub trait CharsetConverter {
    /// Convert one line of document bytes to the rendering charset.
    ///
    /// A failure aborts only the line being rendered; the row is left
    /// blank and rendering continues.
    fn convert(&self, bytes: &[u8]) -> Result<Vec<u8>>;
}

/// Pass-through converter for documents already in the rendering
/// charset.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityConverter;

impl CharsetConverter for IdentityConverter {
    fn convert(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(bytes.to_vec())
    }
}
