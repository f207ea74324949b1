//! Row-parallel LUT application.
//!
//! The per-pixel loop has no cross-pixel dependencies: the source image,
//! the cube and the intensity are read-only shared state, and each worker
//! writes its own disjoint row range of the output, so no synchronization
//! is needed and the result is identical for any worker count.

use crate::{OpsError, OpsResult};
use lutkit_core::RgbaImage;
use lutkit_cube::{ColorCube, Interpolation, hald, sample};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

/// Applies a color cube to an image.
///
/// Every pixel is sampled with the chosen strategy and blended with the
/// original: `out = src * (1 - intensity) + lut * intensity`, truncated to
/// 8 bits. Alpha passes through verbatim and the output has the source's
/// dimensions.
///
/// Fails before any pixel work when `intensity` is outside `[0, 1]` or the
/// strategy is [`Interpolation::Tetrahedral`], which has no implementation.
pub fn apply(
    src: &RgbaImage,
    cube: &ColorCube,
    interp: Interpolation,
    intensity: f32,
) -> OpsResult<RgbaImage> {
    check_intensity(intensity)?;

    let sampler: fn(&ColorCube, [u8; 3]) -> [u8; 3] = match interp {
        Interpolation::Nearest => sample::nearest,
        Interpolation::Trilinear => sample::trilinear,
        Interpolation::Tetrahedral => return Err(OpsError::Unimplemented("tetra")),
    };

    debug!(
        width = src.width(),
        height = src.height(),
        size = cube.size,
        mode = %interp,
        intensity,
        "applying color cube"
    );

    render(src, intensity, |rgb| sampler(cube, rgb))
}

/// Applies a packed Hald LUT image directly, without building a cube.
///
/// Uses the uninterpolated [`hald::lookup`] per pixel; the LUT image must
/// have the fixed 512x512 working bounds.
pub fn apply_hald(src: &RgbaImage, lut: &RgbaImage, intensity: f32) -> OpsResult<RgbaImage> {
    check_intensity(intensity)?;

    if lut.width() != hald::HALD_SIDE || lut.height() != hald::HALD_SIDE {
        return Err(lutkit_cube::LutError::InvalidDimensions {
            expected: hald::HALD_SIDE,
            width: lut.width(),
            height: lut.height(),
        }
        .into());
    }

    debug!(
        width = src.width(),
        height = src.height(),
        intensity,
        "applying hald LUT image"
    );

    render(src, intensity, |rgb| hald::lookup(lut, rgb))
}

fn check_intensity(intensity: f32) -> OpsResult<()> {
    if !(0.0..=1.0).contains(&intensity) {
        return Err(OpsError::InvalidIntensity(intensity));
    }
    Ok(())
}

/// Renders the output buffer row by row with the given per-pixel sampler.
fn render<F>(src: &RgbaImage, intensity: f32, sampler: F) -> OpsResult<RgbaImage>
where
    F: Fn([u8; 3]) -> [u8; 3] + Sync,
{
    let stride = src.stride();
    if stride == 0 || src.height() == 0 {
        return Ok(src.clone());
    }

    let mut out = vec![0u8; src.data().len()];

    #[cfg(feature = "parallel")]
    out.par_chunks_mut(stride)
        .zip(src.data().par_chunks(stride))
        .for_each(|(dst, srow)| render_row(dst, srow, intensity, &sampler));

    #[cfg(not(feature = "parallel"))]
    out.chunks_mut(stride)
        .zip(src.data().chunks(stride))
        .for_each(|(dst, srow)| render_row(dst, srow, intensity, &sampler));

    Ok(RgbaImage::from_raw(src.width(), src.height(), out)?)
}

fn render_row<F>(dst: &mut [u8], srow: &[u8], intensity: f32, sampler: &F)
where
    F: Fn([u8; 3]) -> [u8; 3],
{
    for (d, s) in dst.chunks_exact_mut(4).zip(srow.chunks_exact(4)) {
        let lut = sampler([s[0], s[1], s[2]]);
        d[0] = blend(s[0], lut[0], intensity);
        d[1] = blend(s[1], lut[1], intensity);
        d[2] = blend(s[2], lut[2], intensity);
        d[3] = s[3];
    }
}

#[inline]
fn blend(src: u8, lut: u8, intensity: f32) -> u8 {
    (src as f32 * (1.0 - intensity) + lut as f32 * intensity) as u8
}
