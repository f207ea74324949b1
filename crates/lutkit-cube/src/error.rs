//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur during LUT operations.
#[derive(Debug, Error)]
pub enum LutError {
    /// Invalid cube size.
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// Parse error when reading LUT sources.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Cube coordinates outside the grid.
    #[error("cube index ({x}, {y}, {z}) out of bounds for size {size}")]
    IndexOutOfBounds {
        /// X grid coordinate
        x: usize,
        /// Y grid coordinate
        y: usize,
        /// Z grid coordinate
        z: usize,
        /// Cube resolution per axis
        size: usize,
    },

    /// Hald image bounds do not match the working resolution.
    #[error("invalid image size: expected {expected}x{expected}, got {width}x{height}")]
    InvalidDimensions {
        /// Required side length
        expected: u32,
        /// Actual width
        width: u32,
        /// Actual height
        height: u32,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
