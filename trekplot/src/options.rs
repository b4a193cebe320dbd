use crate::render::Ramp;
use clap::Parser;
use std::path::PathBuf;

/// Generate a day-colored elevation profile from GPX track recordings.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GPX files to process, one per day, in trek order.
    #[arg(required = true)]
    pub gpx_files: Vec<PathBuf>,

    /// Output image path (`.svg` renders an SVG, anything else a PNG).
    #[arg(short, long, default_value = "profile.png")]
    pub output: PathBuf,

    /// Use imperial units (miles/feet) instead of metric (km/m).
    #[arg(long, default_value_t = false)]
    pub imperial: bool,

    /// Color ramp used to distinguish days.
    #[arg(short, long, value_enum, default_value = "viridis")]
    pub colormap: Ramp,
}
