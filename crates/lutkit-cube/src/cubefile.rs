//! Adobe/Resolve `.cube` LUT format support.
//!
//! The `.cube` format is a simple line-oriented text format widely
//! supported by DaVinci Resolve, Adobe applications, and many other tools.
//!
//! # Format
//!
//! ```text
//! # Comment
//! TITLE "LUT Name"
//! LUT_3D_SIZE 33
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! Data lines fill the table in row-major order, red varying fastest:
//! flat index `i` maps to cell `(i % N, (i / N) % N, i / N^2)`.
//!
//! # Example
//!
//! ```rust,ignore
//! use lutkit_cube::cubefile;
//!
//! let file = cubefile::read("grade.cube")?;
//! let cube = file.to_cube()?;
//! ```

use crate::{ColorCube, LutError, LutResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// A parsed `.cube` document.
///
/// Holds the three channel tables flattened in file order, plus header
/// metadata. Convert to a [`ColorCube`] with [`CubeFile::to_cube`].
#[derive(Debug, Clone, PartialEq)]
pub struct CubeFile {
    /// Optional `TITLE` header.
    pub title: Option<String>,
    /// Per-axis resolution from `LUT_3D_SIZE`.
    pub size: usize,
    /// `DOMAIN_MIN` header, defaulting to `[0, 0, 0]`.
    pub domain_min: [f32; 3],
    /// `DOMAIN_MAX` header, defaulting to `[1, 1, 1]`.
    pub domain_max: [f32; 3],
    /// Red channel table, `size^3` entries.
    pub r: Vec<f32>,
    /// Green channel table, `size^3` entries.
    pub g: Vec<f32>,
    /// Blue channel table, `size^3` entries.
    pub b: Vec<f32>,
}

/// Reads a `.cube` file from disk.
pub fn read<P: AsRef<Path>>(path: P) -> LutResult<CubeFile> {
    let file = File::open(path.as_ref())?;
    parse(BufReader::new(file))
}

/// Writes a [`CubeFile`] to disk.
pub fn write<P: AsRef<Path>>(path: P, cube: &CubeFile) -> LutResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    cube.serialize(&mut writer)
}

/// Parses a `.cube` document from a reader.
///
/// Keyword lines (`TITLE`, `DOMAIN_MIN`, `DOMAIN_MAX`, `LUT_3D_SIZE`) may
/// appear in any order relative to the data lines. Blank lines and `#`
/// comments are skipped, and stray lines that are neither keywords nor
/// three floats are ignored. A missing or zero `LUT_3D_SIZE` is fatal.
pub fn parse<R: BufRead>(reader: R) -> LutResult<CubeFile> {
    let mut title: Option<String> = None;
    let mut size: usize = 0;
    let mut domain_min = [0.0_f32; 3];
    let mut domain_max = [1.0_f32; 3];
    let mut samples: Vec<[f32; 3]> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("TITLE") {
            title = Some(rest.replace('"', "").trim().to_string());
        } else if let Some(rest) = line.strip_prefix("DOMAIN_MIN") {
            domain_min = parse_triple(rest)
                .ok_or_else(|| LutError::ParseError("invalid domain min values".into()))?;
        } else if let Some(rest) = line.strip_prefix("DOMAIN_MAX") {
            domain_max = parse_triple(rest)
                .ok_or_else(|| LutError::ParseError("invalid domain max values".into()))?;
        } else if let Some(rest) = line.strip_prefix("LUT_3D_SIZE") {
            size = rest
                .trim()
                .parse::<usize>()
                .map_err(|e| LutError::ParseError(format!("invalid lut size: {e}")))?;
        } else if let Some(rgb) = parse_triple(line) {
            samples.push(rgb);
        }
    }

    if size == 0 {
        return Err(LutError::ParseError("invalid lut size".into()));
    }

    // Fewer samples than size^3 leave trailing cells at zero; surplus
    // samples are dropped rather than written past the table.
    let total = size * size * size;
    let mut r = vec![0.0_f32; total];
    let mut g = vec![0.0_f32; total];
    let mut b = vec![0.0_f32; total];
    for (i, rgb) in samples.into_iter().take(total).enumerate() {
        r[i] = rgb[0];
        g[i] = rgb[1];
        b[i] = rgb[2];
    }

    Ok(CubeFile {
        title,
        size,
        domain_min,
        domain_max,
        r,
        g,
        b,
    })
}

/// Parses whitespace-separated floats, requiring exactly three.
///
/// Tokens that fail to parse are skipped, matching the permissive
/// treatment of stray lines in the wild.
fn parse_triple(s: &str) -> Option<[f32; 3]> {
    let mut out = [0.0_f32; 3];
    let mut n = 0;
    for token in s.split_whitespace() {
        if let Ok(v) = token.parse::<f32>() {
            if n == 3 {
                return None;
            }
            out[n] = v;
            n += 1;
        }
    }
    if n == 3 { Some(out) } else { None }
}

impl CubeFile {
    /// Builds a document from a [`ColorCube`], re-flattening the grid.
    ///
    /// The cube carries no title, so none is set.
    pub fn from_cube(cube: &ColorCube) -> Self {
        let n = cube.size;
        let total = n * n * n;
        let mut r = vec![0.0_f32; total];
        let mut g = vec![0.0_f32; total];
        let mut b = vec![0.0_f32; total];

        for i in 0..total {
            let x = i % n;
            let y = i / n % n;
            let z = i / (n * n);
            let rgb = cube.get(x, y, z);
            r[i] = rgb[0];
            g[i] = rgb[1];
            b[i] = rgb[2];
        }

        Self {
            title: None,
            size: n,
            domain_min: cube.domain_min,
            domain_max: cube.domain_max,
            r,
            g,
            b,
        }
    }

    /// Converts this document into a [`ColorCube`].
    pub fn to_cube(&self) -> LutResult<ColorCube> {
        let n = self.size;
        let mut cube = ColorCube::new(n, self.domain_min, self.domain_max)?;

        for i in 0..n * n * n {
            let x = i % n;
            let y = i / n % n;
            let z = i / (n * n);
            cube.set(x, y, z, [self.r[i], self.g[i], self.b[i]]);
        }

        Ok(cube)
    }

    /// Serializes the document in `.cube` text form.
    ///
    /// Domain values are written with one decimal, samples with six, so a
    /// serialize/parse round trip is exact up to those precisions.
    pub fn serialize<W: Write>(&self, writer: &mut W) -> LutResult<()> {
        writeln!(writer, "TITLE \"{}\"", self.title.as_deref().unwrap_or(""))?;
        writeln!(writer, "LUT_3D_SIZE {}", self.size)?;
        writeln!(
            writer,
            "DOMAIN_MIN {:.1} {:.1} {:.1}",
            self.domain_min[0], self.domain_min[1], self.domain_min[2]
        )?;
        writeln!(
            writer,
            "DOMAIN_MAX {:.1} {:.1} {:.1}",
            self.domain_max[0], self.domain_max[1], self.domain_max[2]
        )?;
        for i in 0..self.r.len() {
            writeln!(
                writer,
                "{:.6} {:.6} {:.6}",
                self.r[i], self.g[i], self.b[i]
            )?;
        }
        Ok(())
    }

    /// Serializes to an in-memory byte buffer.
    pub fn to_bytes(&self) -> LutResult<Vec<u8>> {
        let mut out = Vec::new();
        self.serialize(&mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const FIXTURE: &str = r#"
# Comment line
TITLE "Hello, World!"
LUT_3D_SIZE 2
DOMAIN_MIN 0 0 0
DOMAIN_MAX 2 2 2

0.1 0.1 0.1
0.2 0.2 0.2
0.3 0.3 0.3
0.4 0.4 0.4
0.5 0.5 0.5
0.6 0.6 0.6
0.7 0.7 0.7
0.8 0.8 0.8
"#;

    #[test]
    fn parse_fixture() {
        let file = parse(Cursor::new(FIXTURE)).expect("parse failed");
        assert_eq!(file.title.as_deref(), Some("Hello, World!"));
        assert_eq!(file.size, 2);
        assert_eq!(file.domain_min, [0.0, 0.0, 0.0]);
        assert_eq!(file.domain_max, [2.0, 2.0, 2.0]);
        let want: Vec<f32> = vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];
        assert_eq!(file.r, want);
        assert_eq!(file.g, want);
        assert_eq!(file.b, want);
    }

    #[test]
    fn domain_defaults() {
        let src = "LUT_3D_SIZE 2\n0.0 0.0 0.0\n";
        let file = parse(Cursor::new(src)).expect("parse failed");
        assert_eq!(file.domain_min, [0.0, 0.0, 0.0]);
        assert_eq!(file.domain_max, [1.0, 1.0, 1.0]);
        assert_eq!(file.title, None);
    }

    #[test]
    fn missing_size_is_fatal() {
        let src = "TITLE \"x\"\n0.0 0.0 0.0\n";
        let err = parse(Cursor::new(src)).unwrap_err();
        assert!(err.to_string().contains("invalid lut size"));
    }

    #[test]
    fn zero_size_is_fatal() {
        let src = "LUT_3D_SIZE 0\n";
        assert!(parse(Cursor::new(src)).is_err());
    }

    #[test]
    fn bad_size_reports_conversion_error() {
        let src = "LUT_3D_SIZE banana\n";
        let err = parse(Cursor::new(src)).unwrap_err();
        assert!(matches!(err, LutError::ParseError(_)));
    }

    #[test]
    fn bad_domain_count_is_fatal() {
        let src = "DOMAIN_MIN 0 0\nLUT_3D_SIZE 2\n";
        let err = parse(Cursor::new(src)).unwrap_err();
        assert!(err.to_string().contains("invalid domain min values"));
    }

    #[test]
    fn stray_lines_are_skipped() {
        let src = "LUT_3D_SIZE 2\nnot a data line\n0.5 0.5 0.5\n";
        let file = parse(Cursor::new(src)).expect("parse failed");
        assert_eq!(file.r[0], 0.5);
        assert_eq!(file.r[1], 0.0);
    }

    #[test]
    fn short_files_leave_zeroes_and_surplus_is_ignored() {
        let src = "LUT_3D_SIZE 2\n0.5 0.5 0.5\n";
        let file = parse(Cursor::new(src)).expect("parse failed");
        assert_eq!(file.r.len(), 8);
        assert_eq!(file.r[1], 0.0);

        let mut long = String::from("LUT_3D_SIZE 2\n");
        for _ in 0..10 {
            long.push_str("0.5 0.5 0.5\n");
        }
        let file = parse(Cursor::new(long)).expect("parse failed");
        assert_eq!(file.r.len(), 8);
    }

    #[test]
    fn cube_roundtrip_is_exact() {
        let file = parse(Cursor::new(FIXTURE)).unwrap();
        let cube = file.to_cube().unwrap();
        let back = CubeFile::from_cube(&cube);
        assert_eq!(back.size, file.size);
        assert_eq!(back.domain_min, file.domain_min);
        assert_eq!(back.domain_max, file.domain_max);
        assert_eq!(back.r, file.r);
        assert_eq!(back.g, file.g);
        assert_eq!(back.b, file.b);
        // Title does not survive the cube path.
        assert_eq!(back.title, None);
    }

    #[test]
    fn row_major_fill_order() {
        let file = parse(Cursor::new(FIXTURE)).unwrap();
        let cube = file.to_cube().unwrap();
        // i = 1 -> (1, 0, 0), i = 2 -> (0, 1, 0), i = 4 -> (0, 0, 1)
        assert_eq!(cube.get(1, 0, 0), [0.2, 0.2, 0.2]);
        assert_eq!(cube.get(0, 1, 0), [0.3, 0.3, 0.3]);
        assert_eq!(cube.get(0, 0, 1), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn serialize_parse_roundtrip() {
        let file = parse(Cursor::new(FIXTURE)).unwrap();
        let bytes = file.to_bytes().unwrap();
        let again = parse(Cursor::new(bytes)).unwrap();
        assert_eq!(again, file);
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.cube");
        let file = parse(Cursor::new(FIXTURE)).unwrap();
        write(&path, &file).expect("write failed");
        let loaded = read(&path).expect("read failed");
        assert_eq!(loaded, file);
    }
}
