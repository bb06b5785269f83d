//! File naming and persistence configuration

/// Default zone map filename, read by `view`/`stats` and written by `detect`
pub const ZONE_MAP_FILENAME: &str = "zone_map.txt";

/// Default elevation map filename, read by `view`/`stats` and written by `detect`
pub const ELEVATION_MAP_FILENAME: &str = "elevation_map.txt";

// App state persistence
/// Path for saving/loading viewer preferences (never analysis results)
pub const APP_STATE_PATH: &str = ".flood_zones_state.json";
