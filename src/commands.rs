//! Command handlers behind the CLI. Each one loads its inputs fully and fails
//! before producing any output if a grid file is malformed.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};

use crate::analysis::flood_detection::{
    count_zones, detect_flood_zones, flood_map_ascii, zone_map_ascii, zone_map_detailed,
};
use crate::analysis::{ZoneAnalyzer, ZoneReport};
use crate::config::plot::PLOT_CONFIG;
use crate::config::{APP_STATE_PATH, ELEVATION_MAP_FILENAME, ZONE_MAP_FILENAME};
use crate::data::{load_grid, map_rng, random_elevation, random_flood_map, save_grid};
use crate::domain::{Grid, MapPair};
use crate::ui::config::UI_TEXT;
use crate::{MapArgs, run_app};

/// Loads the zone and elevation grids and checks that they line up.
pub fn load_map_pair(args: &MapArgs) -> Result<MapPair> {
    let zones = load_grid(&args.zones)?;
    let elevation = load_grid(&args.elevation)?;
    MapPair::new(zones, elevation).with_context(|| {
        format!(
            "{} and {} cannot be compared",
            args.zones.display(),
            args.elevation.display()
        )
    })
}

/// Opens the comparison window. Blocks until the window closes.
pub fn run_view(args: &MapArgs) -> Result<()> {
    let maps = load_map_pair(args)?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(PLOT_CONFIG.window_size)
            .with_title(UI_TEXT.window_title),
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, maps))),
    )
    .map_err(|e| anyhow!("Viewer failed: {}", e))
}

/// Writes the per-zone report as a table or as pretty JSON.
pub fn run_stats(args: &MapArgs, json: bool, out: &mut impl Write) -> Result<()> {
    let maps = load_map_pair(args)?;
    let report = ZoneReport::build(&maps, &ZoneAnalyzer::default());

    if json {
        serde_json::to_writer_pretty(&mut *out, &report).context("Failed to encode report")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report)?;
    }
    Ok(())
}

/// Paths written by `run_detect` and `run_generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectOutput {
    pub zone_map: PathBuf,
    pub elevation_map: PathBuf,
    pub zone_count: usize,
}

/// Labels flooded regions, prints both maps, and exports the zone/elevation pair
/// in the grid text format so `view` and `stats` can read them back.
pub fn run_detect(
    flood_path: &Path,
    elevation_path: &Path,
    out_dir: &Path,
    out: &mut impl Write,
) -> Result<DetectOutput> {
    let flood = load_grid(flood_path)?;
    let elevation = load_grid(elevation_path)?;
    if !flood.same_shape(&elevation) {
        bail!(
            "Shape mismatch: flood map {} is {}x{} but elevation map {} is {}x{}",
            flood_path.display(),
            flood.rows(),
            flood.cols(),
            elevation_path.display(),
            elevation.rows(),
            elevation.cols()
        );
    }
    detect_and_export(&flood, elevation, out_dir, out)
}

/// Same as `run_detect`, on a random flood map and elevation grid.
/// Passing a seed makes the run reproducible.
pub fn run_generate(
    rows: usize,
    cols: usize,
    seed: Option<u64>,
    out_dir: &Path,
    out: &mut impl Write,
) -> Result<DetectOutput> {
    let mut rng = map_rng(seed);
    let flood = random_flood_map(rows, cols, &mut rng).context("Cannot generate flood map")?;
    let elevation = random_elevation(rows, cols, &mut rng).context("Cannot generate elevation")?;
    log::info!(
        "Generated random {}x{} maps{}",
        rows,
        cols,
        seed.map(|s| format!(" with seed {}", s)).unwrap_or_default()
    );
    detect_and_export(&flood, elevation, out_dir, out)
}

fn detect_and_export(
    flood: &Grid,
    elevation: Grid,
    out_dir: &Path,
    out: &mut impl Write,
) -> Result<DetectOutput> {
    let zones: Grid = detect_flood_zones(flood)?;
    let zone_count = count_zones(&zones);

    writeln!(out, "Flood Map (# = Flooded, . = Safe):")?;
    writeln!(out, "{}", flood_map_ascii(flood))?;
    writeln!(out)?;
    writeln!(out, "Zone Risk Map (Zone ID mod 10):")?;
    writeln!(out, "{}", zone_map_ascii(&zones))?;
    writeln!(out)?;

    let maps = MapPair::new(zones, elevation)?;
    writeln!(out, "{}", ZoneReport::build(&maps, &ZoneAnalyzer::default()))?;
    writeln!(out)?;
    writeln!(out, "Detailed Zone Mapping (Root IDs):")?;
    writeln!(out, "{}", zone_map_detailed(maps.zones()))?;

    let zone_map = out_dir.join(ZONE_MAP_FILENAME);
    let elevation_map = out_dir.join(ELEVATION_MAP_FILENAME);
    save_grid(&zone_map, maps.zones())?;
    save_grid(&elevation_map, maps.elevation())?;
    log::info!(
        "Wrote {} zones to {} and {}",
        zone_count,
        zone_map.display(),
        elevation_map.display()
    );

    Ok(DetectOutput {
        zone_map,
        elevation_map,
        zone_count,
    })
}
