//! Transform error types.

use thiserror::Error;

/// Result type for transform operations.
pub type OpsResult<T> = Result<T, OpsError>;

/// Errors that can occur while applying a LUT to an image.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Blend intensity outside `[0, 1]`.
    #[error("intensity must be between 0 and 1, got {0}")]
    InvalidIntensity(f32),

    /// Requested sampling strategy has no implementation.
    #[error("unimplemented interpolation mode: {0}")]
    Unimplemented(&'static str),

    /// LUT source was rejected.
    #[error(transparent)]
    Lut(#[from] lutkit_cube::LutError),

    /// Pixel buffer error.
    #[error(transparent)]
    Core(#[from] lutkit_core::Error),
}
