//! Dense 3D color cube.
//!
//! A [`ColorCube`] is an N x N x N grid of RGB triples together with the
//! input domain it covers. It is a pure data structure: codecs populate it,
//! samplers read it, and once built it is never mutated, so it can be
//! shared freely across worker threads.

use crate::{LutError, LutResult};

/// A dense 3-dimensional grid of color samples.
///
/// Cells are addressed by `(x, y, z)` grid coordinates in `[0, size)`,
/// stored x-fastest: `index = x + size*y + size^2*z`. Values are
/// normalized RGB triples, conventionally in `[0, 1]` before domain
/// scaling.
///
/// # Example
///
/// ```rust
/// use lutkit_cube::ColorCube;
///
/// let mut cube = ColorCube::new(2, [0.0; 3], [1.0; 3]).unwrap();
/// cube.set(1, 0, 1, [0.5, 0.25, 0.75]);
/// assert_eq!(cube.get(1, 0, 1), [0.5, 0.25, 0.75]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorCube {
    /// Per-axis resolution N.
    pub size: usize,
    /// Input domain minimum, per channel.
    pub domain_min: [f32; 3],
    /// Input domain maximum, per channel.
    pub domain_max: [f32; 3],
    data: Vec<[f32; 3]>,
}

impl ColorCube {
    /// Allocates a zero-initialized cube.
    ///
    /// Fails with [`LutError::InvalidSize`] when `size` is zero.
    pub fn new(size: usize, domain_min: [f32; 3], domain_max: [f32; 3]) -> LutResult<Self> {
        if size == 0 {
            return Err(LutError::InvalidSize("size must be positive".into()));
        }
        Ok(Self {
            size,
            domain_min,
            domain_max,
            data: vec![[0.0; 3]; size * size * size],
        })
    }

    /// Creates an identity (pass-through) cube over the `[0, 1]` domain.
    ///
    /// Cell `(x, y, z)` holds `(x/(N-1), y/(N-1), z/(N-1))`; a size-1 cube
    /// degenerates to a single black cell.
    pub fn identity(size: usize) -> LutResult<Self> {
        let mut cube = Self::new(size, [0.0; 3], [1.0; 3])?;
        let n = (size - 1).max(1) as f32;
        for z in 0..size {
            for y in 0..size {
                for x in 0..size {
                    cube.set(x, y, z, [x as f32 / n, y as f32 / n, z as f32 / n]);
                }
            }
        }
        Ok(cube)
    }

    /// Total number of cells, `size^3`.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.size * self.size * self.size
    }

    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.size * (y + self.size * z)
    }

    /// Returns the color at a grid point.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is `>= size`.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> [f32; 3] {
        assert!(
            x < self.size && y < self.size && z < self.size,
            "cube index ({x}, {y}, {z}) out of bounds for size {}",
            self.size
        );
        self.data[self.index(x, y, z)]
    }

    /// Returns the color at a grid point, or an error when out of range.
    pub fn try_get(&self, x: usize, y: usize, z: usize) -> LutResult<[f32; 3]> {
        if x >= self.size || y >= self.size || z >= self.size {
            return Err(LutError::IndexOutOfBounds {
                x,
                y,
                z,
                size: self.size,
            });
        }
        Ok(self.data[self.index(x, y, z)])
    }

    /// Sets the color at a grid point.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is `>= size`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, rgb: [f32; 3]) {
        assert!(
            x < self.size && y < self.size && z < self.size,
            "cube index ({x}, {y}, {z}) out of bounds for size {}",
            self.size
        );
        let i = self.index(x, y, z);
        self.data[i] = rgb;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set() {
        let mut cube = ColorCube::new(32, [0.0; 3], [1.0; 3]).unwrap();
        cube.set(1, 2, 3, [1.0, 1.0, 1.0]);
        assert_eq!(cube.get(1, 2, 3), [1.0, 1.0, 1.0]);
        assert_eq!(cube.get(3, 2, 1), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_size_rejected() {
        assert!(matches!(
            ColorCube::new(0, [0.0; 3], [1.0; 3]),
            Err(LutError::InvalidSize(_))
        ));
    }

    #[test]
    fn try_get_out_of_range() {
        let cube = ColorCube::new(2, [0.0; 3], [1.0; 3]).unwrap();
        assert!(matches!(
            cube.try_get(2, 0, 0),
            Err(LutError::IndexOutOfBounds { x: 2, size: 2, .. })
        ));
    }

    #[test]
    fn identity_corners() {
        let cube = ColorCube::identity(4).unwrap();
        assert_eq!(cube.get(0, 0, 0), [0.0, 0.0, 0.0]);
        assert_eq!(cube.get(3, 3, 3), [1.0, 1.0, 1.0]);
        assert_eq!(cube.get(3, 0, 0), [1.0, 0.0, 0.0]);
    }
}
