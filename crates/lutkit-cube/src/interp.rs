//! Interpolation strategy selection.

use crate::LutError;
use std::fmt;
use std::str::FromStr;

/// Sampling strategy used when applying a cube to pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Nearest-cell lookup (no interpolation).
    ///
    /// Piecewise-constant with sharp transitions at cell boundaries.
    Nearest,

    /// Trilinear interpolation over the 8 surrounding grid vertices.
    ///
    /// Default method, good balance of quality and speed.
    #[default]
    Trilinear,

    /// Tetrahedral interpolation.
    ///
    /// Recognized mode name, not implemented; selecting it fails at apply
    /// time.
    Tetrahedral,
}

impl Interpolation {
    /// The CLI name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interpolation::Nearest => "none",
            Interpolation::Trilinear => "tri",
            Interpolation::Tetrahedral => "tetra",
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interpolation {
    type Err = LutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Interpolation::Nearest),
            "tri" => Ok(Interpolation::Trilinear),
            "tetra" => Ok(Interpolation::Tetrahedral),
            other => Err(LutError::ParseError(format!(
                "unknown interpolation mode: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("none".parse::<Interpolation>().unwrap(), Interpolation::Nearest);
        assert_eq!("tri".parse::<Interpolation>().unwrap(), Interpolation::Trilinear);
        assert_eq!("tetra".parse::<Interpolation>().unwrap(), Interpolation::Tetrahedral);
        assert!("cubic".parse::<Interpolation>().is_err());
    }
}
