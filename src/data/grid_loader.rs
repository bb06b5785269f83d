use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{Cell, Grid};

pub use crate::domain::FormatError;

/// Parses the grid text format:
///
/// ```text
/// <rows> <cols>
/// <v_0> <v_1> ... <v_{rows*cols - 1}>
/// ```
///
/// The header must be the first line on its own. Body values may be spread over
/// any number of lines and are placed in row-major order. The grid is only built
/// once the value count matches the header exactly; nothing is truncated or padded.
pub fn parse_grid(text: &str) -> Result<Grid, FormatError> {
    let (header, body) = match text.split_once('\n') {
        Some((header, body)) => (header, body),
        None if text.is_empty() => return Err(FormatError::MissingHeader),
        None => (text, ""),
    };
    let (rows, cols) = parse_header(header)?;

    let mut cells: Vec<Cell> = Vec::new();
    for (idx, line) in body.lines().enumerate() {
        for token in line.split_whitespace() {
            let value = token.parse::<Cell>().map_err(|_| FormatError::InvalidToken {
                // Body starts on the second line of the file
                line: idx + 2,
                token: token.to_string(),
            })?;
            cells.push(value);
        }
    }

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_grid_loading {
        log::debug!(
            "Parsed grid header {}x{} with {} body values",
            rows,
            cols,
            cells.len()
        );
    }

    Grid::from_row_major(rows, cols, cells)
}

/// Same as `parse_grid`, for raw file contents. Bytes that are not UTF-8 are a
/// format problem of the file, reported with the line they sit on.
pub fn parse_grid_bytes(bytes: &[u8]) -> Result<Grid, FormatError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        let valid = &bytes[..e.valid_up_to()];
        FormatError::InvalidEncoding {
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
        }
    })?;
    parse_grid(text)
}

fn parse_header(line: &str) -> Result<(usize, usize), FormatError> {
    let malformed = || FormatError::MalformedHeader {
        line: line.trim_end().to_string(),
    };
    let dims: Vec<usize> = line
        .split_whitespace()
        .map(|t| t.parse::<usize>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| malformed())?;

    match dims.as_slice() {
        [rows, cols] => Ok((*rows, *cols)),
        _ => Err(malformed()),
    }
}

/// Reads and parses one grid file.
/// A `FormatError` stays reachable through `downcast_ref` on the returned error.
pub fn load_grid(path: &Path) -> Result<Grid> {
    let bytes =
        std::fs::read(path).context(format!("Failed to read grid file: {}", path.display()))?;
    let grid = parse_grid_bytes(&bytes)
        .with_context(|| format!("Invalid grid file: {}", path.display()))?;

    log::info!(
        "Loaded {}x{} grid from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}

/// Writes a grid in the same text format `load_grid` reads.
pub fn save_grid(path: &Path, grid: &Grid) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    let file = File::create(path).context(format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(grid.to_text().as_bytes())
        .context(format!("Failed to write grid to: {}", path.display()))?;
    writer
        .flush()
        .context(format!("Failed to flush grid to: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("flood_zones_loader_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_parse_row_major_values() {
        let grid = parse_grid("2 3\n1 2 3\n4 5 6\n").unwrap();
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.cells(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(grid.get(1, 0), Some(4));
    }

    #[test]
    fn test_body_layout_is_free_form() {
        // Line breaks in the body do not need to match row boundaries
        let grid = parse_grid("2 2\n1\n2 3\n\n   4").unwrap();
        assert_eq!(grid.cells(), &[1, 2, 3, 4]);

        let crlf = parse_grid("1 3\r\n-1 0 +7\r\n").unwrap();
        assert_eq!(crlf.cells(), &[-1, 0, 7], "Signed values and CRLF are accepted");
    }

    #[test]
    fn test_values_are_not_range_checked() {
        let grid = parse_grid("1 2\n-9000000000 9000000000").unwrap();
        assert_eq!(grid.cells(), &[-9_000_000_000, 9_000_000_000]);
    }

    #[test]
    fn test_round_trip_through_text() {
        for rows in 1..=4 {
            for cols in 1..=4 {
                // Signed values with a few multi-digit and sentinel cells mixed in
                let cells: Vec<Cell> = (0..rows * cols)
                    .map(|i| {
                        let v = (i as Cell * 37 + rows as Cell * 11) % 201 - 100;
                        if i % 5 == 0 { -1 } else { v }
                    })
                    .collect();
                let grid = Grid::from_row_major(rows, cols, cells).unwrap();
                let parsed = parse_grid(&grid.to_text()).unwrap();
                assert_eq!(parsed, grid, "Round trip changed a {}x{} grid", rows, cols);
            }
        }

        let extremes = Grid::from_rows(&[[Cell::MIN, Cell::MAX]]).unwrap();
        assert_eq!(parse_grid(&extremes.to_text()).unwrap(), extremes);
    }

    #[test]
    fn test_non_utf8_bytes_report_line() {
        assert_eq!(
            parse_grid_bytes(b"1 2\n5 \xff\n"),
            Err(FormatError::InvalidEncoding { line: 2 })
        );
        assert_eq!(
            parse_grid_bytes(b"1 2\n5 6\n").unwrap().cells(),
            &[5, 6]
        );
    }

    #[test]
    fn test_token_count_must_match_exactly() {
        assert_eq!(
            parse_grid("2 2\n1 2 3"),
            Err(FormatError::TokenCountMismatch {
                expected: 4,
                found: 3
            }),
            "One value short"
        );
        assert_eq!(
            parse_grid("2 2\n1 2 3 4 5"),
            Err(FormatError::TokenCountMismatch {
                expected: 4,
                found: 5
            }),
            "One value too many"
        );
        assert_eq!(
            parse_grid("1 1\n"),
            Err(FormatError::TokenCountMismatch {
                expected: 1,
                found: 0
            })
        );
    }

    #[test]
    fn test_header_errors() {
        assert_eq!(parse_grid(""), Err(FormatError::MissingHeader));
        for header in ["", "3", "3 4 5", "a 4", "-2 3", "2.5 3"] {
            let text = format!("{}\n1 2 3", header);
            assert!(
                matches!(parse_grid(&text), Err(FormatError::MalformedHeader { .. })),
                "Header {:?} should be rejected",
                header
            );
        }
        // Header split across two lines is not a header
        assert!(matches!(
            parse_grid("2\n2\n1 2 3 4"),
            Err(FormatError::MalformedHeader { .. })
        ));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            parse_grid("0 3\n"),
            Err(FormatError::EmptyShape { rows: 0, cols: 3 })
        );
    }

    #[test]
    fn test_invalid_token_reports_line() {
        let err = parse_grid("2 2\n1 2\n3 x4\n").unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidToken {
                line: 3,
                token: "x4".to_string()
            }
        );
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_invalid_token_wins_over_count() {
        assert!(matches!(
            parse_grid("2 2\n1 1.5"),
            Err(FormatError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_each_file_keeps_its_declared_shape() {
        // Two files of different shapes load independently; pairing is checked elsewhere
        let zones = parse_grid("2 3\n1 1 -1 2 1 3").unwrap();
        let elevation = parse_grid("3 2\n10 20 30 40 50 60").unwrap();
        assert_eq!(zones.shape(), (2, 3));
        assert_eq!(elevation.shape(), (3, 2));
    }

    #[test]
    fn test_save_then_load_file() {
        let path = temp_path("nested/round_trip.txt");
        let grid = Grid::from_rows(&[[3, -1], [0, 12]]).unwrap();
        save_grid(&path, &grid).unwrap();
        let loaded = load_grid(&path).unwrap();
        assert_eq!(loaded, grid);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_keeps_format_error_as_cause() {
        let path = temp_path("bad_count.txt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "2 2\n1 2 3\n").unwrap();

        let err = load_grid(&path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<FormatError>(),
            Some(&FormatError::TokenCountMismatch {
                expected: 4,
                found: 3
            })
        );
        assert!(format!("{:#}", err).contains("bad_count.txt"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_non_utf8_file_is_format_error() {
        let path = temp_path("not_utf8.txt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"1 2\n5 \xff\n").unwrap();

        let err = load_grid(&path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<FormatError>(),
            Some(&FormatError::InvalidEncoding { line: 2 })
        );
        assert!(err.downcast_ref::<std::io::Error>().is_none());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_grid(&temp_path("does_not_exist.txt")).unwrap_err();
        assert!(err.downcast_ref::<FormatError>().is_none());
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }
}
