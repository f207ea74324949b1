//! PNG format support.
//!
//! Reads 8- and 16-bit grayscale, grayscale-alpha, RGB and RGBA PNGs,
//! normalizing everything to 8-bit RGBA (16-bit channels keep their high
//! byte). Writes are always 8-bit RGBA.

use crate::{IoError, IoResult};
use lutkit_core::RgbaImage;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Reads a PNG file into an RGBA buffer.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RgbaImage> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let width = info.width;
    let height = info.height;
    let raw = &buf[..info.buffer_size()];

    let rgba: Vec<u8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgba, png::BitDepth::Eight) => raw.to_vec(),
        (png::ColorType::Rgb, png::BitDepth::Eight) => raw
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 0xff])
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            raw.iter().flat_map(|&g| [g, g, g, 0xff]).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => raw
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        // 16-bit channels are big-endian; keep the high byte.
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => {
            raw.chunks_exact(2).map(|c| c[0]).collect()
        }
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => raw
            .chunks_exact(6)
            .flat_map(|p| [p[0], p[2], p[4], 0xff])
            .collect(),
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    RgbaImage::from_raw(width, height, rgba)
        .map_err(|e| IoError::DecodeError(e.to_string()))
}

/// Writes an RGBA buffer as an 8-bit RGBA PNG.
pub fn write<P: AsRef<Path>>(path: P, image: &RgbaImage) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut writer = encoder
        .write_header()
        .map_err(|e: png::EncodingError| IoError::EncodeError(e.to_string()))?;
    writer
        .write_image_data(image.data())
        .map_err(|e: png::EncodingError| IoError::EncodeError(e.to_string()))?;

    Ok(())
}
