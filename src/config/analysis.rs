//! Analysis and computation configuration

use crate::domain::Cell;

/// Settings for turning a binary flood map into labelled zones
pub struct FloodDetectionSettings {
    // Cell value that marks a flooded cell; every other value counts as dry
    pub flooded_value: Cell,
}

/// Value ranges for randomly generated map pairs
pub struct RandomMapSettings {
    // Value written for cells that are not flooded
    pub dry_value: Cell,
    // Chance that a generated cell is flooded
    pub flooded_probability: f64,
    // Inclusive elevation bounds
    pub min_elevation: Cell,
    pub max_elevation: Cell,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    // Zone label reserved for "no zone". Excluded from every zone statistic.
    pub background_label: Cell,

    // Sub-groups
    pub flood: FloodDetectionSettings,
    pub random: RandomMapSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    background_label: -1,

    flood: FloodDetectionSettings { flooded_value: 1 },
    random: RandomMapSettings {
        dry_value: 0,
        flooded_probability: 0.5,
        min_elevation: 1,
        max_elevation: 100,
    },
};
