// Grid file loading and saving
pub mod grid_loader;
// Random map pairs for the generate command
pub mod random_maps;

// Re-export commonly used functions
pub use grid_loader::{FormatError, load_grid, parse_grid, parse_grid_bytes, save_grid};
pub use random_maps::{map_rng, random_elevation, random_flood_map};
