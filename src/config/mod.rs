//! Configuration module for the flood-zones application.

pub mod analysis;

mod debug; // Private because of the public re-export. Use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use analysis::ANALYSIS;
pub use persistence::{APP_STATE_PATH, ELEVATION_MAP_FILENAME, ZONE_MAP_FILENAME};
pub use plot::PLOT_CONFIG;
