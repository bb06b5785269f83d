#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod commands;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;

// Re-export commonly used types
pub use analysis::{ZoneAnalyzer, ZoneReport, find_largest_zone};
pub use data::{FormatError, load_grid, parse_grid, parse_grid_bytes, save_grid};
pub use domain::{Cell, Grid, MapPair, ZoneLabel};
pub use ui::FloodZonesApp;

// CLI argument parsing
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use config::{ELEVATION_MAP_FILENAME, ZONE_MAP_FILENAME};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Input pair shared by the viewer and the stats report
#[derive(clap::Args, Debug, Clone)]
pub struct MapArgs {
    /// Zone label grid (-1 marks background cells)
    #[arg(long, default_value = ZONE_MAP_FILENAME)]
    pub zones: PathBuf,
    /// Elevation grid with the same shape as the zone grid
    #[arg(long, default_value = ELEVATION_MAP_FILENAME)]
    pub elevation: PathBuf,
}

impl Default for MapArgs {
    fn default() -> Self {
        Self {
            zones: PathBuf::from(ZONE_MAP_FILENAME),
            elevation: PathBuf::from(ELEVATION_MAP_FILENAME),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show elevation and zones side by side with the largest zone in red (default)
    View(MapArgs),
    /// Print per-zone size and mean elevation without opening a window
    Stats {
        #[command(flatten)]
        maps: MapArgs,
        /// Emit the report as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Label connected flooded regions of a 0/1 flood map and write both map files
    Detect {
        /// Flood map grid (1 = flooded, anything else = dry)
        #[arg(long)]
        flood: PathBuf,
        /// Elevation grid with the same shape as the flood map
        #[arg(long)]
        elevation: PathBuf,
        /// Directory receiving zone_map.txt and elevation_map.txt
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Label a random flood map instead of files, then write both map files like `detect`
    Generate {
        /// Number of grid rows
        #[arg(long)]
        rows: usize,
        /// Number of grid columns
        #[arg(long)]
        cols: usize,
        /// Fixed seed for a reproducible map
        #[arg(long)]
        seed: Option<u64>,
        /// Directory receiving zone_map.txt and elevation_map.txt
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

/// Viewer entry point - creates the GUI app.
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, maps: MapPair) -> Box<dyn eframe::App> {
    Box::new(ui::FloodZonesApp::new(cc, maps))
}
