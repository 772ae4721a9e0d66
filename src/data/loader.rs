use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::color::seeded_palette;
use crate::error::{LoadError, RowError};

use super::model::{GridData, Sample, TimingData, TimingSeries};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load `"N T"` files, one series per file, coloured from `palette_seed`.
pub fn load_timing(paths: &[PathBuf], palette_seed: u64) -> Result<TimingData, LoadError> {
    let palette = seeded_palette(paths.len(), palette_seed);
    let mut data = TimingData::default();

    for (path, color) in paths.iter().zip(palette) {
        let rows = read_rows::<2>(path)?;
        log::debug!("{}: {} samples", path.display(), rows.len());
        data.series.push(TimingSeries {
            name: series_name(path),
            color,
            samples: rows.into_iter().map(|[n, t]| Sample { n, t }).collect(),
        });
    }

    Ok(data)
}

/// Load `"I J N T"` files into groups keyed by `N`.
///
/// Several files are accepted; their rows are merged into the same groups.
pub fn load_grid(paths: &[PathBuf], palette_seed: u64) -> Result<GridData, LoadError> {
    let mut data = GridData::default();

    for path in paths {
        let rows = read_rows::<4>(path)?;
        log::debug!("{}: {} grid points", path.display(), rows.len());
        data.sources.push(series_name(path));
        for [i, j, n, t] in rows {
            data.push(i, j, n, t);
        }
    }

    data.assign_colors(&seeded_palette(data.groups.len(), palette_seed));
    Ok(data)
}

/// Legend name for a file: its file name up to the first `.`.
pub fn series_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => file_name,
    }
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn read_rows<const ARITY: usize>(path: &Path) -> Result<Vec<[f64; ARITY]>, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    parse_rows::<ARITY, _>(BufReader::new(file), path)
}

/// Parse every non-blank line of `reader` into a fixed-arity row.
///
/// `path` is only used to label errors.
pub fn parse_rows<const ARITY: usize, R: BufRead>(
    reader: R,
    path: &Path,
) -> Result<Vec<[f64; ARITY]>, LoadError> {
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match parse_row::<ARITY>(&line) {
            Ok(Some(row)) => rows.push(row),
            Ok(None) => {}
            Err(reason) => {
                return Err(LoadError::Parse {
                    path: path.to_path_buf(),
                    line_no: idx + 1,
                    line: line.trim().to_string(),
                    reason,
                })
            }
        }
    }

    Ok(rows)
}

/// Parse one line. Blank lines yield `Ok(None)`.
pub fn parse_row<const ARITY: usize>(line: &str) -> Result<Option<[f64; ARITY]>, RowError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != ARITY {
        return Err(RowError::WrongArity {
            expected: ARITY,
            found: tokens.len(),
        });
    }

    let mut row = [0.0; ARITY];
    for (slot, tok) in row.iter_mut().zip(tokens) {
        *slot = tok
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| RowError::NotANumber {
                token: tok.to_string(),
            })?;
    }

    Ok(Some(row))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn parse2(text: &str) -> Result<Vec<[f64; 2]>, LoadError> {
        parse_rows::<2, _>(text.as_bytes(), Path::new("mem.txt"))
    }

    #[test]
    fn one_sample_per_non_blank_line_in_order() {
        let rows = parse2("128 0.5\n\n256 1.2\n   \n128 0.6\n").unwrap();
        assert_eq!(rows, vec![[128.0, 0.5], [256.0, 1.2], [128.0, 0.6]]);
    }

    #[test]
    fn tabs_and_padding_are_whitespace() {
        let rows = parse2("  64\t0.01  \r\n").unwrap();
        assert_eq!(rows, vec![[64.0, 0.01]]);
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(parse2("").unwrap().is_empty());
    }

    #[test]
    fn wrong_arity_reports_line() {
        let err = parse2("128 0.5\n1 2 3\n").unwrap_err();
        match &err {
            LoadError::Parse {
                line_no,
                line,
                reason,
                ..
            } => {
                assert_eq!(*line_no, 2);
                assert_eq!(line, "1 2 3");
                assert_eq!(
                    *reason,
                    RowError::WrongArity {
                        expected: 2,
                        found: 3
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("mem.txt:2"), "{msg}");
        assert!(msg.contains("1 2 3"), "{msg}");
    }

    #[test]
    fn non_numeric_token_rejected() {
        assert_eq!(
            parse_row::<2>("128 fast"),
            Err(RowError::NotANumber {
                token: "fast".into()
            })
        );
    }

    #[test]
    fn non_finite_rejected() {
        assert!(parse_row::<2>("nan 1").is_err());
        assert!(parse_row::<2>("1 inf").is_err());
    }

    #[test]
    fn four_field_rows() {
        assert_eq!(
            parse_row::<4>("8 16 256 0.25").unwrap(),
            Some([8.0, 16.0, 256.0, 0.25])
        );
        assert!(parse_row::<4>("8 16 256").is_err());
    }

    #[test]
    fn series_name_strips_from_first_dot() {
        assert_eq!(series_name(Path::new("runs/gemm.v2.txt")), "gemm");
        assert_eq!(series_name(Path::new("plain")), "plain");
        assert_eq!(series_name(Path::new("/tmp/blocked.dat")), "blocked");
    }

    #[test]
    fn load_timing_reads_files() {
        let mut a = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(a, "128 0.5\n256 1.2\n128 0.6").unwrap();
        let b = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();

        let paths = vec![a.path().to_path_buf(), b.path().to_path_buf()];
        let data = load_timing(&paths, 25).unwrap();

        assert_eq!(data.series.len(), 2);
        assert_eq!(data.series[0].samples.len(), 3);
        assert_eq!(data.series[0].samples[2], Sample { n: 128.0, t: 0.6 });
        assert!(data.series[1].samples.is_empty());
        assert_ne!(data.series[0].color, data.series[1].color);
    }

    #[test]
    fn load_grid_merges_files() {
        let mut a = tempfile::NamedTempFile::new().unwrap();
        writeln!(a, "8 8 128 0.1\n8 8 256 0.4").unwrap();
        let mut b = tempfile::NamedTempFile::new().unwrap();
        writeln!(b, "16 8 128 0.2").unwrap();

        let paths = vec![a.path().to_path_buf(), b.path().to_path_buf()];
        let data = load_grid(&paths, 25).unwrap();

        assert_eq!(data.sources.len(), 2);
        assert_eq!(data.groups.len(), 2);
        assert_eq!(data.groups[0].n, 128.0);
        assert_eq!(data.groups[0].points.len(), 2);
    }

    #[test]
    fn load_grid_empty_file_has_no_groups() {
        let a = tempfile::NamedTempFile::new().unwrap();
        let data = load_grid(&[a.path().to_path_buf()], 25).unwrap();
        assert!(data.groups.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_timing(&[PathBuf::from("/definitely/not/here.txt")], 25).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
