use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::analysis::largest_zone::{ZoneAnalyzer, largest_of};
use crate::domain::{MapPair, ZoneLabel};

/// Size and mean elevation of one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSummary {
    pub label: ZoneLabel,
    pub cell_count: usize,
    pub mean_elevation: f64,
}

/// Per-zone statistics for a zone/elevation pair, listed in ascending label order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneReport {
    pub rows: usize,
    pub cols: usize,
    pub background_label: ZoneLabel,
    pub zone_count: usize,
    pub largest_zone: Option<ZoneLabel>,
    pub zones: Vec<ZoneSummary>,
}

impl ZoneReport {
    pub fn build(maps: &MapPair, analyzer: &ZoneAnalyzer) -> Self {
        // label -> (cells, elevation sum)
        let mut totals: BTreeMap<ZoneLabel, (usize, i128)> = BTreeMap::new();
        for (&label, &height) in maps.zones().cells().iter().zip(maps.elevation().cells()) {
            if label == analyzer.background() {
                continue;
            }
            let entry = totals.entry(label).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += height as i128;
        }

        let sizes: BTreeMap<ZoneLabel, usize> =
            totals.iter().map(|(&label, &(count, _))| (label, count)).collect();
        let largest_zone = largest_of(&sizes);

        let zones: Vec<ZoneSummary> = totals
            .into_iter()
            .map(|(label, (count, sum))| ZoneSummary {
                label,
                cell_count: count,
                mean_elevation: sum as f64 / count as f64,
            })
            .collect();

        let (rows, cols) = maps.shape();
        Self {
            rows,
            cols,
            background_label: analyzer.background(),
            zone_count: zones.len(),
            largest_zone,
            zones,
        }
    }

    pub fn zone(&self, label: ZoneLabel) -> Option<&ZoneSummary> {
        self.zones.iter().find(|z| z.label == label)
    }
}

impl fmt::Display for ZoneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Flood Zone Statistics ({}x{}) ---", self.rows, self.cols)?;
        writeln!(f, "{:<10}{:<10}{:<15}", "Zone ID", "Size", "Avg Elevation")?;
        for zone in &self.zones {
            writeln!(
                f,
                "{:<10}{:<10}{:<15.2}",
                zone.label, zone.cell_count, zone.mean_elevation
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total Flood Zones Detected: {}", self.zone_count)?;
        match self.largest_zone {
            Some(label) => write!(f, "Largest Zone: {}", label),
            None => write!(f, "Largest Zone: None"),
        }
    }
}
