use std::collections::BTreeMap;

use crate::config::ANALYSIS;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{Grid, ZoneLabel};

/// Finds the most common zone label in a zone grid, ignoring a background sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneAnalyzer {
    background: ZoneLabel,
}

impl Default for ZoneAnalyzer {
    fn default() -> Self {
        Self::new(ANALYSIS.background_label)
    }
}

impl ZoneAnalyzer {
    pub fn new(background: ZoneLabel) -> Self {
        Self { background }
    }

    pub fn background(&self) -> ZoneLabel {
        self.background
    }

    /// Cell count per zone label, in ascending label order. Background cells are skipped.
    pub fn zone_sizes(&self, zones: &Grid) -> BTreeMap<ZoneLabel, usize> {
        let mut sizes = BTreeMap::new();
        for &label in zones.cells().iter().filter(|&&v| v != self.background) {
            *sizes.entry(label).or_insert(0) += 1;
        }
        sizes
    }

    /// The label covering the most cells, or `None` if every cell is background.
    ///
    /// Ties go to the smallest label: counts are scanned in ascending label
    /// order and only a strictly larger count replaces the current pick.
    pub fn find_largest_zone(&self, zones: &Grid) -> Option<ZoneLabel> {
        let sizes = self.zone_sizes(zones);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_zone_counts {
            log::debug!("Zone cell counts: {:?}", sizes);
        }

        largest_of(&sizes)
    }
}

/// Picks the label with the strictly greatest count from ascending-ordered sizes.
pub(crate) fn largest_of(sizes: &BTreeMap<ZoneLabel, usize>) -> Option<ZoneLabel> {
    let mut best: Option<(ZoneLabel, usize)> = None;
    for (&label, &count) in sizes {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label)
}

/// Largest zone using the configured background sentinel.
pub fn find_largest_zone(zones: &Grid) -> Option<ZoneLabel> {
    ZoneAnalyzer::default().find_largest_zone(zones)
}

/// Zone sizes using the configured background sentinel.
pub fn zone_sizes(zones: &Grid) -> BTreeMap<ZoneLabel, usize> {
    ZoneAnalyzer::default().zone_sizes(zones)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_background_has_no_zone() {
        let grid = Grid::from_rows(&[[-1, -1], [-1, -1]]).unwrap();
        assert_eq!(find_largest_zone(&grid), None);
        assert!(zone_sizes(&grid).is_empty());
    }

    #[test]
    fn test_single_zone() {
        let grid = Grid::from_rows(&[[-1, 5, -1], [5, -1, 5]]).unwrap();
        assert_eq!(find_largest_zone(&grid), Some(5));

        let one_cell = Grid::from_rows(&[[-1, -1, 5]]).unwrap();
        assert_eq!(find_largest_zone(&one_cell), Some(5));
    }

    #[test]
    fn test_majority_label_wins() {
        let grid = Grid::from_rows(&[[1, 1, -1], [2, 1, 3]]).unwrap();
        assert_eq!(find_largest_zone(&grid), Some(1));

        let sizes = zone_sizes(&grid);
        assert_eq!(sizes.get(&1), Some(&3));
        assert_eq!(sizes.get(&2), Some(&1));
        assert_eq!(sizes.get(&3), Some(&1));
        assert_eq!(sizes.get(&-1), None, "Background must never be counted");
    }

    #[test]
    fn test_tie_resolves_to_smallest_label() {
        let grid = Grid::from_rows(&[[1, 1, 2, 2]]).unwrap();
        let first = find_largest_zone(&grid);
        assert_eq!(first, Some(1));
        for _ in 0..10 {
            assert_eq!(find_largest_zone(&grid), first, "Tie-break must be stable");
        }

        // Scan order in the grid does not matter, only label order
        let reversed = Grid::from_rows(&[[2, 2, 1, 1]]).unwrap();
        assert_eq!(find_largest_zone(&reversed), Some(1));

        let negatives = Grid::from_rows(&[[7, -3, 7, -3, -1, -1, -1]]).unwrap();
        assert_eq!(find_largest_zone(&negatives), Some(-3));
    }

    #[test]
    fn test_zero_and_other_negatives_are_zones() {
        let grid = Grid::from_rows(&[[0, 0, -2, -1, -1, -1]]).unwrap();
        assert_eq!(find_largest_zone(&grid), Some(0));
    }

    #[test]
    fn test_custom_background_sentinel() {
        let grid = Grid::from_rows(&[[0, 0, 0, 4, -1]]).unwrap();
        let analyzer = ZoneAnalyzer::new(0);
        assert_eq!(analyzer.background(), 0);
        // With 0 as background, -1 becomes an ordinary label and ties with 4
        assert_eq!(analyzer.find_largest_zone(&grid), Some(-1));
        assert_eq!(ZoneAnalyzer::default().find_largest_zone(&grid), Some(0));
    }
}
