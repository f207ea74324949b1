//! Cube sampling strategies.
//!
//! Both samplers take 8-bit input colors, the native unit of the image
//! transform, and return 8-bit output colors. [`nearest`] is the cheap
//! piecewise-constant path; [`trilinear`] blends the 8 surrounding grid
//! vertices and is the precision-critical path.

use crate::ColorCube;

/// Nearest-cell lookup, no interpolation.
///
/// Each channel maps to a grid index via `floor((c/255) * (N-1))`; the
/// three indices jointly address one cell (the flat-table convention
/// `i = r + N*g + N^2*b` of the `.cube` format), whose value is quantized
/// back to 8 bits by truncation. The input domain is ignored. Output is
/// piecewise-constant with sharp transitions at cell boundaries.
pub fn nearest(cube: &ColorCube, rgb: [u8; 3]) -> [u8; 3] {
    let n1 = (cube.size - 1) as f32;
    let ri = (rgb[0] as f32 / 255.0 * n1).floor() as usize;
    let gi = (rgb[1] as f32 / 255.0 * n1).floor() as usize;
    let bi = (rgb[2] as f32 / 255.0 * n1).floor() as usize;

    let v = cube.get(ri, gi, bi);
    [to_channel_trunc(v[0]), to_channel_trunc(v[1]), to_channel_trunc(v[2])]
}

/// Trilinear interpolation over the 8 surrounding grid vertices.
///
/// Each channel independently maps to a continuous cube coordinate
/// `ic = c * (N-1) / 255` bracketed by the `floor(ic)` / `ceil(ic)` vertex
/// pair. When the two coincide (input exactly on a vertex, or a size-1
/// cube) the vertex value is returned directly rather than computing a
/// 0/0 fraction. The interpolated result is scaled by the domain span per
/// channel and quantized by `clamp(floor(v * 255), 0, 255)`.
pub fn trilinear(cube: &ColorCube, rgb: [u8; 3]) -> [u8; 3] {
    let n1 = (cube.size - 1) as f32;

    let ir = rgb[0] as f32 * n1 / 255.0;
    let ig = rgb[1] as f32 * n1 / 255.0;
    let ib = rgb[2] as f32 * n1 / 255.0;

    let (r0, r1) = vertex_pair(ir, cube.size);
    let (g0, g1) = vertex_pair(ig, cube.size);
    let (b0, b1) = vertex_pair(ib, cube.size);

    let xd = fraction(ir, r0, r1);
    let yd = fraction(ig, g0, g1);
    let zd = fraction(ib, b0, b1);

    let c000 = cube.get(r0, g0, b0);
    let c100 = cube.get(r1, g0, b0);
    let c010 = cube.get(r0, g1, b0);
    let c110 = cube.get(r1, g1, b0);
    let c001 = cube.get(r0, g0, b1);
    let c101 = cube.get(r1, g0, b1);
    let c011 = cube.get(r0, g1, b1);
    let c111 = cube.get(r1, g1, b1);

    let mut out = [0u8; 3];
    for ch in 0..3 {
        let c00 = c000[ch] * (1.0 - xd) + c100[ch] * xd;
        let c01 = c001[ch] * (1.0 - xd) + c101[ch] * xd;
        let c10 = c010[ch] * (1.0 - xd) + c110[ch] * xd;
        let c11 = c011[ch] * (1.0 - xd) + c111[ch] * xd;

        let c0 = c00 * (1.0 - yd) + c10 * yd;
        let c1 = c01 * (1.0 - yd) + c11 * yd;

        let v = c0 * (1.0 - zd) + c1 * zd;
        let span = cube.domain_max[ch] - cube.domain_min[ch];
        out[ch] = to_channel_floor(v * span);
    }
    out
}

/// Bracketing vertex indices for a continuous coordinate, clamped to the
/// grid.
#[inline]
fn vertex_pair(ic: f32, size: usize) -> (usize, usize) {
    let max = size - 1;
    let lo = (ic.floor() as usize).min(max);
    let hi = (ic.ceil() as usize).min(max);
    (lo, hi)
}

/// Interpolation weight within a vertex pair; 0 for a degenerate pair.
#[inline]
fn fraction(ic: f32, lo: usize, hi: usize) -> f32 {
    if hi > lo {
        (ic - lo as f32) / (hi - lo) as f32
    } else {
        0.0
    }
}

#[inline]
fn to_channel_trunc(v: f32) -> u8 {
    (v * 255.0).clamp(0.0, 255.0) as u8
}

#[inline]
fn to_channel_floor(v: f32) -> u8 {
    (v * 255.0).floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_identity_endpoints() {
        let cube = ColorCube::identity(33).unwrap();
        assert_eq!(nearest(&cube, [0, 0, 0]), [0, 0, 0]);
        assert_eq!(nearest(&cube, [255, 255, 255]), [255, 255, 255]);
    }

    #[test]
    fn nearest_is_piecewise_constant() {
        let cube = ColorCube::identity(33).unwrap();
        // 128 and 130 land in the same cell of a 33-point grid.
        assert_eq!(nearest(&cube, [128, 128, 128]), nearest(&cube, [130, 130, 130]));
    }

    #[test]
    fn nearest_reads_joint_cell() {
        let mut cube = ColorCube::new(2, [0.0; 3], [1.0; 3]).unwrap();
        cube.set(1, 0, 0, [0.9, 0.1, 0.2]);
        // Only a full-scale red channel reaches grid index 1.
        assert_eq!(nearest(&cube, [255, 0, 0]), [229, 25, 51]);
    }

    #[test]
    fn trilinear_identity_is_exact_within_rounding() {
        let cube = ColorCube::identity(33).unwrap();
        for c in [0u8, 1, 63, 127, 128, 200, 254, 255] {
            let out = trilinear(&cube, [c, c, c]);
            for ch in 0..3 {
                assert!(
                    (out[ch] as i32 - c as i32).abs() <= 1,
                    "channel {ch}: {c} -> {}",
                    out[ch]
                );
            }
        }
    }

    #[test]
    fn trilinear_vertex_returns_stored_value() {
        let mut cube = ColorCube::new(3, [0.0; 3], [1.0; 3]).unwrap();
        cube.set(0, 0, 0, [0.25, 0.5, 0.75]);
        cube.set(2, 2, 2, [1.0, 0.0, 1.0]);
        // Channel 0 and 255 map exactly onto the end vertices; the
        // degenerate pair must yield the stored value, never NaN.
        assert_eq!(trilinear(&cube, [0, 0, 0]), [63, 127, 191]);
        assert_eq!(trilinear(&cube, [255, 255, 255]), [255, 0, 255]);
    }

    #[test]
    fn trilinear_size_one_cube() {
        let mut cube = ColorCube::new(1, [0.0; 3], [1.0; 3]).unwrap();
        cube.set(0, 0, 0, [0.5, 0.5, 0.5]);
        assert_eq!(trilinear(&cube, [10, 200, 77]), [127, 127, 127]);
    }

    #[test]
    fn trilinear_applies_domain_span() {
        let mut cube = ColorCube::new(2, [0.0; 3], [2.0, 1.0, 1.0]).unwrap();
        for z in 0..2 {
            for y in 0..2 {
                for x in 0..2 {
                    cube.set(x, y, z, [0.5, 0.5, 0.5]);
                }
            }
        }
        // Red span is 2.0, so 0.5 scales to full range before quantization.
        assert_eq!(trilinear(&cube, [128, 128, 128]), [255, 127, 127]);
    }

    #[test]
    fn trilinear_blends_between_vertices() {
        let mut cube = ColorCube::new(2, [0.0; 3], [1.0; 3]).unwrap();
        for z in 0..2 {
            for y in 0..2 {
                cube.set(0, y, z, [0.0, 0.0, 0.0]);
                cube.set(1, y, z, [1.0, 1.0, 1.0]);
            }
        }
        let out = trilinear(&cube, [128, 0, 0]);
        // 128/255 of the way from black to white along red.
        assert!((out[0] as i32 - 128).abs() <= 1, "got {}", out[0]);
    }
}
