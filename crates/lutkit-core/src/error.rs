//! Error types for core buffer operations.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during pixel buffer operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside image bounds.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Buffer length does not match the declared dimensions.
    #[error("buffer of {len} bytes does not match {width}x{height} RGBA image")]
    InvalidDimensions {
        /// Byte length of the provided buffer
        len: usize,
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
    },
}
