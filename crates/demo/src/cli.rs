// File: crates/demo/src/cli.rs
// Summary: Command-line flags for the headless morph demo.

use std::path::PathBuf;

use clap::Parser;
use morph_core::types::{HEIGHT, WIDTH};

#[derive(Parser, Debug)]
#[command(version, about = "Play random line-chart morphs and dump the frames", long_about = None)]
pub struct Cli {
    /// TOML file with animation parameters (min_points, max_points, steps, total_time_ms)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fewest points in a generated dataset
    #[arg(long = "min-points")]
    pub min_points: Option<String>,

    /// Most points in a generated dataset
    #[arg(long = "max-points")]
    pub max_points: Option<String>,

    /// Ticks per morph
    #[arg(long)]
    pub steps: Option<String>,

    /// Duration of one morph in milliseconds
    #[arg(long)]
    pub time: Option<String>,

    /// How many morphs to play
    #[arg(long, default_value_t = 3)]
    pub transitions: usize,

    /// Seed for reproducible datasets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for PNG frames
    #[arg(long, default_value = "target/out")]
    pub out: PathBuf,

    /// Write every tick as a PNG, not only settled frames
    #[arg(long = "all-frames")]
    pub all_frames: bool,

    /// CSV file receiving every tick's point positions
    #[arg(long)]
    pub trace: Option<PathBuf>,

    /// Wait between ticks like the interactive chart does
    #[arg(long)]
    pub realtime: bool,

    /// Color preset: classic, dark or light
    #[arg(long, default_value_t = String::from("classic"))]
    pub theme: String,

    #[arg(long, default_value_t = WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = HEIGHT)]
    pub height: i32,

    #[arg(long = "loglevel", default_value_t = String::from("info"))]
    pub log_level: String,
}

impl Cli {
    /// True when any animation parameter was given on the command line.
    pub fn has_parameter_overrides(&self) -> bool {
        self.min_points.is_some() || self.max_points.is_some() || self.steps.is_some() || self.time.is_some()
    }
}
