//! Interleaved 8-bit RGBA pixel buffer.
//!
//! [`RgbaImage`] is the single pixel representation used across the
//! workspace: decoders normalize into it, transforms read and write it,
//! encoders consume it. Rows are stored top to bottom, 4 bytes per pixel.

use crate::{Error, Result};

/// Bytes per pixel in an [`RgbaImage`].
pub const CHANNELS: usize = 4;

/// An interleaved 8-bit RGBA image buffer.
///
/// # Example
///
/// ```rust
/// use lutkit_core::RgbaImage;
///
/// let mut img = RgbaImage::new(2, 2);
/// img.set_pixel(0, 0, [255, 0, 0, 255]);
/// assert_eq!(img.pixel(0, 0), [255, 0, 0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Creates a zero-filled (transparent black) image.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS;
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Wraps an existing interleaved RGBA buffer.
    ///
    /// Fails if the buffer length does not equal `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::InvalidDimensions {
                len: data.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Raw interleaved RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the image, returning the raw buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Returns the RGBA value at `(x, y)`, or an error when out of bounds.
    pub fn try_pixel(&self, x: u32, y: u32) -> Result<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixel(x, y))
    }

    /// Overwrites the RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&rgba);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_roundtrip() {
        let mut img = RgbaImage::new(3, 2);
        img.set_pixel(2, 1, [10, 20, 30, 40]);
        assert_eq!(img.pixel(2, 1), [10, 20, 30, 40]);
        assert_eq!(img.pixel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(RgbaImage::from_raw(2, 2, vec![0; 16]).is_ok());
        assert!(RgbaImage::from_raw(2, 2, vec![0; 15]).is_err());
    }

    #[test]
    fn try_pixel_out_of_bounds() {
        let img = RgbaImage::new(2, 2);
        assert!(matches!(
            img.try_pixel(2, 0),
            Err(Error::OutOfBounds { x: 2, y: 0, .. })
        ));
    }
}
