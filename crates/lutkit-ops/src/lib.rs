//! # lutkit-ops
//!
//! Per-pixel LUT application over RGBA images.
//!
//! The transform walks every pixel of a source image, samples the LUT with
//! the selected [`Interpolation`](lutkit_cube::Interpolation) strategy, and
//! blends the result with the original at a caller-chosen intensity. Rows
//! are independent, so rendering is parallelized over disjoint row ranges
//! when the default `parallel` feature is enabled.
//!
//! # Usage
//!
//! ```rust
//! use lutkit_core::RgbaImage;
//! use lutkit_cube::{ColorCube, Interpolation};
//! use lutkit_ops::apply;
//!
//! let src = RgbaImage::new(16, 16);
//! let cube = ColorCube::identity(33).unwrap();
//! let out = apply(&src, &cube, Interpolation::Trilinear, 1.0).unwrap();
//! assert_eq!(out.width(), 16);
//! ```
//!
//! # Dependencies
//!
//! - [`lutkit-core`] - Pixel buffers
//! - [`lutkit-cube`] - Cube and samplers
//! - [`rayon`] - Row-parallel rendering (feature `parallel`, default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod transform;

pub use error::{OpsError, OpsResult};
pub use transform::{apply, apply_hald};
