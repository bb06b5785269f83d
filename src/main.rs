use anyhow::Result;
use clap::Parser;

use flood_zones::commands::{DetectOutput, run_detect, run_generate, run_stats, run_view};
use flood_zones::{Cli, Command, MapArgs};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Dispatch. Any load error aborts here, before a window is opened.
    let command = args.command.unwrap_or(Command::View(MapArgs::default()));
    match command {
        Command::View(maps) => run_view(&maps),
        Command::Stats { maps, json } => run_stats(&maps, json, &mut std::io::stdout().lock()),
        Command::Detect {
            flood,
            elevation,
            out_dir,
        } => run_detect(&flood, &elevation, &out_dir, &mut std::io::stdout().lock())
            .map(report_written),
        Command::Generate {
            rows,
            cols,
            seed,
            out_dir,
        } => run_generate(rows, cols, seed, &out_dir, &mut std::io::stdout().lock())
            .map(report_written),
    }
}

fn report_written(written: DetectOutput) {
    println!(
        "✅ Wrote {} and {} ({} zones).",
        written.zone_map.display(),
        written.elevation_map.display(),
        written.zone_count
    );
}
