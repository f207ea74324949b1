//! CLI command implementations

pub mod apply;
pub mod convert;

use anyhow::{Context, Result, bail};
use lutkit_core::RgbaImage;
use lutkit_cube::{ColorCube, cubefile, hald};
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    lutkit_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &RgbaImage) -> Result<()> {
    lutkit_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Lowercased file extension, empty when absent.
pub fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Loads a LUT source of either encoding into a color cube.
pub fn load_cube(path: &Path) -> Result<ColorCube> {
    match extension(path).as_str() {
        "cube" => {
            let file = cubefile::read(path)
                .with_context(|| format!("Failed to parse LUT: {}", path.display()))?;
            Ok(file.to_cube()?)
        }
        "png" | "jpg" | "jpeg" => {
            let img = load_image(path)?;
            hald::parse(&img)
                .with_context(|| format!("Failed to parse Hald LUT: {}", path.display()))
        }
        _ => bail!("unsupported file type: {}", path.display()),
    }
}
