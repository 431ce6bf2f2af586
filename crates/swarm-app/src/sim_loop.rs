//! Simulation loop: drives the controller through every scenario frame.
//!
//! Each frame: advance the controller, log the events it emitted, render
//! on the configured cadence, and write any requested state report. The
//! animation is exported once the last frame has run.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use swarm_core::events::FrameEvent;
use swarm_core::state::SwarmSnapshot;
use swarm_core::types::FrameIndex;
use swarm_render::report::StateReport;
use swarm_render::{AnimationExporter, Renderer};
use swarm_sim::SwarmController;

use crate::config::{RenderSettings, RunConfig};

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub frames_run: u64,
    pub final_snapshot: SwarmSnapshot,
    pub rendered_frames: usize,
    /// Files written by the exporter, GIF first.
    pub written: Vec<PathBuf>,
}

/// Run the whole scenario, writing state reports to `reports`.
pub fn run_simulation(config: &RunConfig, reports: &mut impl Write) -> Result<RunSummary> {
    let scenario = &config.scenario;
    let mut controller =
        SwarmController::new(scenario.config()).context("failed to build swarm")?;

    info!(
        "Starting scenario '{}': {} drones, {} frames, seed {}",
        scenario.name, scenario.swarm_size, scenario.frames, scenario.seed
    );
    log_events(controller.take_events());

    let renderer = config
        .render
        .as_ref()
        .map(|settings| Renderer::new(settings.image));
    let mut exporter = AnimationExporter::new(
        config
            .render
            .as_ref()
            .map_or(0, |settings| settings.frame_delay_ms),
    );

    for frame in 0..scenario.frames {
        controller
            .update(frame)
            .with_context(|| format!("frame {frame} failed"))?;
        log_events(controller.take_events());

        if let (Some(renderer), Some(settings)) = (&renderer, &config.render) {
            if frame % settings.every == 0 {
                exporter.push(frame, renderer.render(&controller.snapshot()));
                debug!("Rendered frame {}", frame);
            }
        }

        if config.report_at.binary_search(&frame).is_ok() {
            writeln!(reports, "{}", StateReport(&controller.snapshot()))?;
        }
    }

    let final_snapshot = controller.snapshot();
    writeln!(reports, "{}", StateReport(&final_snapshot))?;

    let written = match &config.render {
        Some(settings) => export(&exporter, settings)?,
        None => Vec::new(),
    };

    info!(
        "Scenario complete: {}/{} drones alive",
        final_snapshot.alive_count(),
        final_snapshot.units.len()
    );

    Ok(RunSummary {
        frames_run: scenario.frames,
        final_snapshot,
        rendered_frames: exporter.len(),
        written,
    })
}

fn export(exporter: &AnimationExporter, settings: &RenderSettings) -> Result<Vec<PathBuf>> {
    if exporter.is_empty() {
        warn!("No frames rendered, skipping export");
        return Ok(Vec::new());
    }

    exporter
        .write_gif(&settings.gif)
        .with_context(|| format!("failed to write {}", settings.gif.display()))?;
    info!(
        "Wrote {} frames to {}",
        exporter.len(),
        settings.gif.display()
    );
    let mut written = vec![settings.gif.clone()];

    if let Some(dir) = &settings.frames_dir {
        let frames = exporter
            .write_png_frames(dir)
            .with_context(|| format!("failed to write frames to {}", dir.display()))?;
        info!("Wrote {} PNG frames to {}", frames.len(), dir.display());
        written.extend(frames);
    }

    Ok(written)
}

fn log_events(events: Vec<FrameEvent>) {
    for event in events {
        match event {
            FrameEvent::FormationChanged { frame, kind } => {
                info!("{}: formation -> {}", frame_label(frame), kind);
            }
            FrameEvent::UnitDestroyed {
                frame,
                unit,
                position,
            } => {
                warn!(
                    "{}: drone {} destroyed at ({:.2}, {:.2}, {:.2})",
                    frame_label(frame),
                    unit,
                    position.x,
                    position.y,
                    position.z
                );
            }
            FrameEvent::LoadAssigned {
                frame,
                unit,
                load,
                battery_life,
            } => {
                info!(
                    "{}: drone {} loaded {} (battery {})",
                    frame_label(frame),
                    unit,
                    load,
                    battery_life
                );
            }
        }
    }
}

fn frame_label(frame: Option<FrameIndex>) -> String {
    frame.map_or_else(|| "Setup".to_string(), |f| format!("Frame {f}"))
}
