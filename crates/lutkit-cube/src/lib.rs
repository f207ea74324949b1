//! # lutkit-cube
//!
//! 3D color lookup tables (LUTs): the color cube data structure, the
//! codecs that populate it, and the samplers that query it.
//!
//! # LUT Sources
//!
//! - [`cubefile`] - Adobe/Resolve `.cube` text format
//! - [`hald`] - packed-image ("Hald") LUTs, an 8x8 tile grid of cube slices
//!
//! # Usage
//!
//! ```rust
//! use lutkit_cube::{ColorCube, sample};
//!
//! let cube = ColorCube::identity(33).unwrap();
//! let rgb = sample::trilinear(&cube, [0, 255, 0]);
//! assert_eq!(rgb, [0, 255, 0]);
//! ```
//!
//! # Sampling
//!
//! Two strategies are provided, selected via [`Interpolation`]:
//! nearest-cell lookup (cheap, piecewise-constant) and trilinear
//! interpolation (the precision path). Tetrahedral interpolation is a
//! recognized mode name but is not implemented.
//!
//! # Dependencies
//!
//! - [`lutkit-core`] - RGBA pixel buffer (for Hald images)
//! - [`thiserror`] - Error handling

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cube;
mod error;
mod interp;
pub mod cubefile;
pub mod hald;
pub mod sample;

pub use cube::ColorCube;
pub use cubefile::CubeFile;
pub use error::{LutError, LutResult};
pub use interp::Interpolation;
