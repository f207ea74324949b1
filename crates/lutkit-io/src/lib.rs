//! # lutkit-io
//!
//! Image file I/O for the lutkit pipeline.
//!
//! Decodes PNG and JPEG files into the workspace-wide
//! [`RgbaImage`](lutkit_core::RgbaImage) buffer and encodes it back.
//! Every decode normalizes to 8-bit RGBA so the transform layer only ever
//! sees one pixel layout.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lutkit_io as io;
//!
//! let image = io::read("photo.jpg")?;
//! io::write("out.png", &image)?;
//! ```
//!
//! The entry points dispatch on the lowercased file extension; anything
//! other than `.png`, `.jpg` or `.jpeg` is an
//! [`IoError::UnsupportedFormat`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod jpeg;
pub mod png;

pub use error::{IoError, IoResult};

use lutkit_core::RgbaImage;
use std::path::Path;
use tracing::debug;

/// Reads an image file, dispatching on the file extension.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RgbaImage> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading image");
    match extension(path).as_deref() {
        Some("png") => png::read(path),
        Some("jpg") | Some("jpeg") => jpeg::read(path),
        _ => Err(IoError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Writes an image file, dispatching on the file extension.
pub fn write<P: AsRef<Path>>(path: P, image: &RgbaImage) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "writing image");
    match extension(path).as_deref() {
        Some("png") => png::write(path, image),
        Some("jpg") | Some("jpeg") => jpeg::write(path, image),
        _ => Err(IoError::UnsupportedFormat(path.display().to_string())),
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
