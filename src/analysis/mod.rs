// Zone analysis algorithms
pub mod flood_detection;
pub mod largest_zone;
pub mod zone_stats;

// Re-export commonly used types
pub use flood_detection::detect_flood_zones;
pub use largest_zone::{ZoneAnalyzer, find_largest_zone, zone_sizes};
pub use zone_stats::{ZoneReport, ZoneSummary};
