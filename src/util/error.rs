//! Error types for spritexform.

use thiserror::Error;

/// Result alias for spritexform operations.
pub type SpriteXformResult<T> = std::result::Result<T, SpriteXformError>;

/// Errors raised while constructing or loading images.
///
/// The transforms themselves never fail; only buffer construction and
/// image I/O can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpriteXformError {
    /// `width * height` does not fit in `usize`.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The pixel buffer length does not equal `width * height`.
    #[error("buffer size mismatch: needed {needed}, got {got}")]
    BufferSizeMismatch { needed: usize, got: usize },
    /// A row passed to `IndexedImage::from_rows` has a different length.
    #[error("row {row} has {got} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// Image decoding or encoding failed.
    #[error("image io error: {reason}")]
    ImageIo { reason: String },
}
