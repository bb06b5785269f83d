//! Turns a binary flood map into a zone grid by labelling 4-connected flooded regions.

use itertools::iproduct;

use crate::config::ANALYSIS;
use crate::domain::{Cell, FormatError, Grid, ZoneLabel};

/// Union-find over flat cell indices, with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        // Iterative so very large components cannot blow the stack
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    pub fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
    }
}

/// Labels each 4-connected region of flooded cells.
///
/// Dry cells become the background sentinel. A flooded cell's label is the
/// row-major index of the first cell (top-left most in scan order) of its region,
/// so labels do not depend on union order.
pub fn detect_flood_zones(flood_map: &Grid) -> Result<Grid, FormatError> {
    let (rows, cols) = flood_map.shape();
    let flooded = |r: usize, c: usize| flood_map.get(r, c) == Some(ANALYSIS.flood.flooded_value);
    let index = |r: usize, c: usize| r * cols + c;

    let mut ds = DisjointSet::new(flood_map.len());
    for (r, c) in iproduct!(0..rows, 0..cols) {
        if !flooded(r, c) {
            continue;
        }
        // Right and down neighbours cover every 4-connected edge exactly once
        if c + 1 < cols && flooded(r, c + 1) {
            ds.union(index(r, c), index(r, c + 1));
        }
        if r + 1 < rows && flooded(r + 1, c) {
            ds.union(index(r, c), index(r + 1, c));
        }
    }

    let mut first_seen: Vec<Option<usize>> = vec![None; flood_map.len()];
    let mut labels: Vec<Cell> = Vec::with_capacity(flood_map.len());
    for (r, c) in iproduct!(0..rows, 0..cols) {
        if !flooded(r, c) {
            labels.push(ANALYSIS.background_label);
            continue;
        }
        let idx = index(r, c);
        let root = ds.find(idx);
        let label = *first_seen[root].get_or_insert(idx);
        labels.push(label as ZoneLabel);
    }

    Grid::from_row_major(rows, cols, labels)
}

/// Number of distinct zones in a labelled grid.
pub fn count_zones(zones: &Grid) -> usize {
    crate::analysis::largest_zone::zone_sizes(zones).len()
}

/// `#`/`.` rendering of a flood map, one text line per row.
pub fn flood_map_ascii(flood_map: &Grid) -> String {
    flood_map
        .iter_rows()
        .map(|row| {
            row.iter()
                .map(|&v| if v == ANALYSIS.flood.flooded_value { "#" } else { "." })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Zone grid with each label written as `label mod 10` and background as `.`.
pub fn zone_map_ascii(zones: &Grid) -> String {
    zones
        .iter_rows()
        .map(|row| {
            row.iter()
                .map(|&v| {
                    if v == ANALYSIS.background_label {
                        ".".to_string()
                    } else {
                        v.rem_euclid(10).to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Zone grid with full labels right-aligned in 4-wide columns and background as `.`.
pub fn zone_map_detailed(zones: &Grid) -> String {
    zones
        .iter_rows()
        .map(|row| {
            row.iter()
                .map(|&v| {
                    if v == ANALYSIS.background_label {
                        "   .".to_string()
                    } else {
                        format!("{:>4}", v)
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::largest_zone::find_largest_zone;

    #[test]
    fn test_disjoint_set_merges() {
        let mut ds = DisjointSet::new(5);
        ds.union(0, 1);
        ds.union(3, 4);
        assert_eq!(ds.find(0), ds.find(1));
        assert_ne!(ds.find(1), ds.find(3));
        ds.union(1, 4);
        assert_eq!(ds.find(0), ds.find(3));
        assert_ne!(ds.find(2), ds.find(0));
    }

    #[test]
    fn test_components_are_four_connected() {
        let flood = Grid::from_rows(&[
            [1, 1, 0, 1],
            [0, 1, 0, 1],
            [1, 0, 0, 0],
        ])
        .unwrap();
        let zones = detect_flood_zones(&flood).unwrap();
        assert_eq!(zones.shape(), flood.shape());
        assert_eq!(
            zones.cells(),
            &[0, 0, -1, 3, -1, 0, -1, 3, 8, -1, -1, -1],
            "Diagonal contact at (2,0)-(1,1) must not join regions"
        );
        assert_eq!(count_zones(&zones), 3);
        assert_eq!(find_largest_zone(&zones), Some(0));
    }

    #[test]
    fn test_u_shape_gets_single_label() {
        // Arms only meet at the bottom row, after both have been seen
        let flood = Grid::from_rows(&[[1, 0, 1], [1, 0, 1], [1, 1, 1]]).unwrap();
        let zones = detect_flood_zones(&flood).unwrap();
        assert_eq!(count_zones(&zones), 1);
        assert!(zones.cells().iter().all(|&v| v == 0 || v == -1));
    }

    #[test]
    fn test_dry_map_has_no_zones() {
        let flood = Grid::from_rows(&[[0, 0], [0, 0]]).unwrap();
        let zones = detect_flood_zones(&flood).unwrap();
        assert_eq!(count_zones(&zones), 0);
        assert_eq!(find_largest_zone(&zones), None);
    }

    #[test]
    fn test_ascii_rendering() {
        let flood = Grid::from_rows(&[[1, 0], [0, 1]]).unwrap();
        assert_eq!(flood_map_ascii(&flood), "# .\n. #");

        let zones = Grid::from_rows(&[[12, -1], [-1, 3]]).unwrap();
        assert_eq!(zone_map_ascii(&zones), "2 .\n. 3");
    }

    #[test]
    fn test_detailed_map_keeps_full_labels() {
        let zones = Grid::from_rows(&[[12, -1, 0], [-1, 1234, 12]]).unwrap();
        assert_eq!(zone_map_detailed(&zones), "  12   .   0\n   .1234  12");
    }
}
