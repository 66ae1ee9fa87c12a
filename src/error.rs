//! Error types for trazar operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trazar operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid dimensions for a canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Pixel buffer length does not match the requested dimensions.
    #[error("Buffer size mismatch: got {len} pixels, expected {expected} for {width}x{height}")]
    BufferSizeMismatch {
        /// Length of the supplied buffer.
        len: usize,
        /// Expected length (`width * height`).
        expected: usize,
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}
