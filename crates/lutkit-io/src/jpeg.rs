//! JPEG format support.
//!
//! Reads RGB, grayscale and CMYK JPEGs into 8-bit RGBA; writes RGB at
//! maximum quality, dropping the alpha channel (JPEG has none).

use crate::{IoError, IoResult};
use lutkit_core::RgbaImage;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Encode quality for written JPEGs.
const QUALITY: u8 = 100;

/// Reads a JPEG file into an RGBA buffer.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RgbaImage> {
    let file = File::open(path.as_ref())?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let rgba: Vec<u8> = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => pixels
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 0xff])
            .collect(),
        jpeg_decoder::PixelFormat::L8 => {
            pixels.iter().flat_map(|&g| [g, g, g, 0xff]).collect()
        }
        jpeg_decoder::PixelFormat::L16 => pixels
            .chunks_exact(2)
            .flat_map(|l16| {
                let g = l16[0]; // High byte
                [g, g, g, 0xff]
            })
            .collect(),
        jpeg_decoder::PixelFormat::CMYK32 => pixels
            .chunks_exact(4)
            .flat_map(|cmyk| {
                let c = cmyk[0] as f32 / 255.0;
                let m = cmyk[1] as f32 / 255.0;
                let y = cmyk[2] as f32 / 255.0;
                let k = cmyk[3] as f32 / 255.0;

                let r = ((1.0 - c) * (1.0 - k) * 255.0) as u8;
                let g = ((1.0 - m) * (1.0 - k) * 255.0) as u8;
                let b = ((1.0 - y) * (1.0 - k) * 255.0) as u8;
                [r, g, b, 0xff]
            })
            .collect(),
    };

    RgbaImage::from_raw(width, height, rgba)
        .map_err(|e| IoError::DecodeError(e.to_string()))
}

/// Writes an RGBA buffer as an RGB JPEG.
pub fn write<P: AsRef<Path>>(path: P, image: &RgbaImage) -> IoResult<()> {
    if image.width() > u16::MAX as u32 || image.height() > u16::MAX as u32 {
        return Err(IoError::EncodeError(format!(
            "image {}x{} exceeds JPEG dimension limits",
            image.width(),
            image.height()
        )));
    }

    let rgb: Vec<u8> = image
        .data()
        .chunks_exact(4)
        .flat_map(|p| [p[0], p[1], p[2]])
        .collect();

    let encoder = jpeg_encoder::Encoder::new_file(path.as_ref(), QUALITY)
        .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;
    encoder
        .encode(
            &rgb,
            image.width() as u16,
            image.height() as u16,
            jpeg_encoder::ColorType::Rgb,
        )
        .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_preserves_dimensions() {
        let mut img = RgbaImage::new(32, 16);
        for y in 0..16 {
            for x in 0..32 {
                img.set_pixel(x, y, [128, (x * 8) as u8, (y * 16) as u8, 255]);
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.jpg");
        write(&path, &img).expect("write failed");
        let back = read(&path).expect("read failed");

        // Lossy codec: check shape and rough content only.
        assert_eq!(back.width(), 32);
        assert_eq!(back.height(), 16);
        let px = back.pixel(0, 0);
        assert!((px[0] as i32 - 128).abs() < 32);
        assert_eq!(px[3], 255);
    }
}
