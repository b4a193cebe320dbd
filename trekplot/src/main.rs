mod options;
mod render;

use anyhow::Error as AnyError;
use clap::Parser;
use log::info;
use options::Cli;
use trek::{accumulate, group_by_day, read_track_points, TrackPoint, Units};

fn main() -> Result<(), AnyError> {
    env_logger::init();

    let Cli {
        gpx_files,
        output,
        imperial,
        colormap,
    } = Cli::parse();

    // Fail on missing inputs before decoding anything.
    let missing: Vec<_> = gpx_files.iter().filter(|path| !path.exists()).collect();
    if !missing.is_empty() {
        for path in &missing {
            eprintln!("error: {} does not exist", path.display());
        }
        std::process::exit(1);
    }

    let days: Vec<Vec<TrackPoint>> = gpx_files
        .iter()
        .map(read_track_points)
        .collect::<Result<_, _>>()?;

    let profile = accumulate(&days);
    let daily = group_by_day(&profile);

    let units = if imperial {
        Units::Imperial
    } else {
        Units::Metric
    };
    render::render(&daily, gpx_files.len(), units, colormap, &output)?;
    info!("wrote {}", output.display());

    Ok(())
}
