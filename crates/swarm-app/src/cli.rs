//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use swarm_core::constants::{DEFAULT_FRAME_DELAY_MS, DEFAULT_RENDER_EVERY};

#[derive(Parser, Debug, Clone)]
#[command(name = "swarm-sim")]
#[command(about = "Simulate a drone swarm flying formations")]
pub struct Args {
    /// Scenario JSON file (defaults to the built-in reformation scenario)
    #[arg(short, long)]
    pub scenario: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long)]
    pub frames: Option<u64>,

    /// RNG seed for initial placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of drones (must cover every unit the scenario schedule names)
    #[arg(short, long)]
    pub drones: Option<usize>,

    /// Render every Nth frame
    #[arg(long, default_value_t = DEFAULT_RENDER_EVERY, value_parser = clap::value_parser!(u64).range(1..))]
    pub render_every: u64,

    /// Animated GIF output path
    #[arg(short, long, default_value = "swarm_animation.gif")]
    pub output: PathBuf,

    /// Also write each rendered frame as a PNG into this directory
    #[arg(long)]
    pub frames_dir: Option<PathBuf>,

    /// Delay between animation frames in milliseconds
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub frame_delay_ms: u32,

    /// Image width in pixels
    #[arg(long, default_value_t = 480)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 400)]
    pub height: u32,

    /// Skip rendering and export
    #[arg(long)]
    pub no_render: bool,

    /// Print a state report after these frames (defaults to frames with
    /// scheduled destructions)
    #[arg(long, num_args = 1..)]
    pub report_at: Vec<u64>,

    /// Print the resolved scenario as JSON and exit
    #[arg(long)]
    pub print_scenario: bool,
}
