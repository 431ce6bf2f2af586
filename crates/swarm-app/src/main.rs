//! Swarm simulation CLI.
//!
//! Runs a formation scenario, prints state reports and writes the animation.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use swarm_app::cli::Args;
use swarm_app::config::RunConfig;
use swarm_app::logging;
use swarm_app::sim_loop::run_simulation;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(logging::env_filter())
        .init();

    let args = Args::parse();
    let config = RunConfig::from_args(&args)?;

    if args.print_scenario {
        println!("{}", config.scenario.to_json()?);
        return Ok(());
    }

    let stdout = std::io::stdout();
    let summary = run_simulation(&config, &mut stdout.lock())?;

    info!(
        "Ran {} frames, rendered {}, wrote {} files",
        summary.frames_run,
        summary.rendered_frames,
        summary.written.len()
    );
    Ok(())
}
