//! Random flood maps and elevation grids, for running the detector without input files.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::ANALYSIS;
use crate::domain::{Cell, FormatError, Grid};

/// Generator for map pairs. The same seed always yields the same maps;
/// without one the generator is seeded from OS entropy.
pub fn map_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize, FormatError> {
    if rows == 0 || cols == 0 {
        return Err(FormatError::EmptyShape { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(FormatError::ShapeOverflow { rows, cols })
}

/// Binary flood map: each cell is flooded or dry with the configured odds.
pub fn random_flood_map(rows: usize, cols: usize, rng: &mut impl Rng) -> Result<Grid, FormatError> {
    let settings = &ANALYSIS.random;
    let cells: Vec<Cell> = (0..checked_len(rows, cols)?)
        .map(|_| {
            if rng.gen_bool(settings.flooded_probability) {
                ANALYSIS.flood.flooded_value
            } else {
                settings.dry_value
            }
        })
        .collect();
    Grid::from_row_major(rows, cols, cells)
}

/// Elevation grid drawn uniformly from the configured inclusive range.
pub fn random_elevation(rows: usize, cols: usize, rng: &mut impl Rng) -> Result<Grid, FormatError> {
    let settings = &ANALYSIS.random;
    let cells: Vec<Cell> = (0..checked_len(rows, cols)?)
        .map(|_| rng.gen_range(settings.min_elevation..=settings.max_elevation))
        .collect();
    Grid::from_row_major(rows, cols, cells)
}
