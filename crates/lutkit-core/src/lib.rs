//! # lutkit-core
//!
//! Core types for the lutkit LUT processing crates.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace:
//!
//! - [`RgbaImage`] - Interleaved 8-bit RGBA pixel buffer
//! - [`Error`] / [`Result`] - Core error handling
//!
//! All decoding and encoding of actual image files lives in `lutkit-io`;
//! this crate deliberately has no I/O and no codec dependencies, so every
//! other crate can depend on it without pulling in format support.
//!
//! ## Crate Structure
//!
//! ```text
//! lutkit-core (this crate)
//!    ^
//!    |
//!    +-- lutkit-cube (color cube, LUT codecs, samplers)
//!    +-- lutkit-ops  (per-pixel image transforms)
//!    +-- lutkit-io   (PNG/JPEG decode/encode)
//!    +-- lutkit-cli  (command line)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::RgbaImage;
