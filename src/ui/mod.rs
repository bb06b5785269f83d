// Viewer components
pub mod app;
pub mod config;
pub mod grid_image;
pub mod styles;
pub mod utils;

// Re-export main app
pub use app::{FloodZonesApp, ViewerSettings};
pub use config::UI_CONFIG;
pub use grid_image::ElevationPalette;
