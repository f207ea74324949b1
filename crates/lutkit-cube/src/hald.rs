//! Packed-image ("Hald") LUT support.
//!
//! A Hald image encodes an N^3 color cube as an 8x8 grid of N x N slices:
//! slice `z` occupies tile `(z % 8, z / 8)`, and within the tile, pixel
//! `(x, y)` holds the color at cube coordinate `(x, y, z)`. The working
//! resolution is fixed at `N = 64`, giving 512x512 images; any other
//! bounds are rejected outright, no resampling is attempted.

use crate::{ColorCube, LutError, LutResult};
use lutkit_core::RgbaImage;

/// Fixed cube resolution for parsed Hald images.
pub const HALD_SIZE: usize = 64;

/// Side length of a well-formed Hald image, `8 * HALD_SIZE`.
pub const HALD_SIDE: u32 = 8 * HALD_SIZE as u32;

/// Parses a 512x512 Hald image into a [`ColorCube`] over the `[0, 1]` domain.
///
/// Fails with [`LutError::InvalidDimensions`] for any other image size.
pub fn parse(src: &RgbaImage) -> LutResult<ColorCube> {
    if src.width() != HALD_SIDE || src.height() != HALD_SIDE {
        return Err(LutError::InvalidDimensions {
            expected: HALD_SIDE,
            width: src.width(),
            height: src.height(),
        });
    }

    let size = HALD_SIZE;
    let mut cube = ColorCube::new(size, [0.0; 3], [1.0; 3])?;

    for z in 0..size {
        for x in 0..size {
            for y in 0..size {
                let imgx = (z % 8 * size + x) as u32;
                let imgy = (z / 8 * size + y) as u32;
                let px = src.pixel(imgx, imgy);
                cube.set(
                    x,
                    y,
                    z,
                    [
                        px[0] as f32 / 255.0,
                        px[1] as f32 / 255.0,
                        px[2] as f32 / 255.0,
                    ],
                );
            }
        }
    }

    Ok(cube)
}

/// Packs a [`ColorCube`] of any size into an `8N x 8N` Hald image.
///
/// Channels are quantized by `round(value * 255)` and clamped; alpha is
/// fully opaque.
pub fn from_cube(cube: &ColorCube) -> RgbaImage {
    let size = cube.size;
    let mut out = RgbaImage::new(8 * size as u32, 8 * size as u32);

    for z in 0..size {
        for x in 0..size {
            for y in 0..size {
                let imgx = (z % 8 * size + x) as u32;
                let imgy = (z / 8 * size + y) as u32;
                let rgb = cube.get(x, y, z);
                out.set_pixel(
                    imgx,
                    imgy,
                    [quantize(rgb[0]), quantize(rgb[1]), quantize(rgb[2]), 0xff],
                );
            }
        }
    }

    out
}

/// Looks up an 8-bit color directly in a Hald LUT image, bypassing cube
/// construction.
///
/// Channels are quantized to the 64-step grid; the blue channel selects
/// the slice tile, red and green index within it. No interpolation.
pub fn lookup(lut: &RgbaImage, rgb: [u8; 3]) -> [u8; 3] {
    let r = (rgb[0] / 4) as u32;
    let g = (rgb[1] / 4) as u32;
    let b = (rgb[2] / 4) as u32;

    let lutx = ((b % 8) * 64 + r).min(lut.width() - 1);
    let luty = ((b / 8) * 64 + g).min(lut.height() - 1);

    let px = lut.pixel(lutx, luty);
    [px[0], px[1], px[2]]
}

#[inline]
fn quantize(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rejects_wrong_dimensions() {
        let img = RgbaImage::new(256, 256);
        let err = parse(&img).unwrap_err();
        assert!(matches!(
            err,
            LutError::InvalidDimensions {
                expected: 512,
                width: 256,
                height: 256,
            }
        ));
    }

    #[test]
    fn image_roundtrip_within_quantization() {
        let cube = ColorCube::identity(HALD_SIZE).unwrap();
        let img = from_cube(&cube);
        assert_eq!(img.width(), HALD_SIDE);
        assert_eq!(img.height(), HALD_SIDE);

        let back = parse(&img).unwrap();
        assert_eq!(back.size, cube.size);
        for z in 0..cube.size {
            for y in 0..cube.size {
                for x in 0..cube.size {
                    let a = cube.get(x, y, z);
                    let b = back.get(x, y, z);
                    for c in 0..3 {
                        // One 8-bit step of error from quantization.
                        assert_abs_diff_eq!(a[c], b[c], epsilon = 1.0 / 255.0 + 1e-6);
                    }
                }
            }
        }
    }

    #[test]
    fn tiling_layout() {
        let mut cube = ColorCube::new(HALD_SIZE, [0.0; 3], [1.0; 3]).unwrap();
        // Slice z = 9 lives at tile (1, 1).
        cube.set(5, 7, 9, [1.0, 0.0, 0.0]);
        let img = from_cube(&cube);
        assert_eq!(img.pixel(64 + 5, 64 + 7), [255, 0, 0, 255]);
    }

    #[test]
    fn direct_lookup_reads_expected_pixel() {
        let mut lut = RgbaImage::new(HALD_SIDE, HALD_SIDE);
        // Input (200, 100, 50): r4 = 50, g4 = 25, b4 = 12.
        // Tile column 12 % 8 = 4, row 12 / 8 = 1.
        lut.set_pixel(4 * 64 + 50, 64 + 25, [1, 2, 3, 255]);
        assert_eq!(lookup(&lut, [200, 100, 50]), [1, 2, 3]);
    }
}
