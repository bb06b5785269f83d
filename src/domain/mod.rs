// Domain types and value objects
pub mod grid;
pub mod map_pair;

// Re-export commonly used types
pub use grid::{Cell, FormatError, Grid, ZoneLabel};
pub use map_pair::MapPair;
