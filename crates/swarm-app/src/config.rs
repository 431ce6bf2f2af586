//! Run configuration: the scenario plus CLI overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};

use swarm_core::types::FrameIndex;
use swarm_render::RenderConfig;
use swarm_sim::Scenario;

use crate::cli::Args;

/// Where and how often to render. `None` in `RunConfig` disables output.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub every: u64,
    pub image: RenderConfig,
    pub gif: PathBuf,
    pub frames_dir: Option<PathBuf>,
    pub frame_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub scenario: Scenario,
    pub render: Option<RenderSettings>,
    /// Frames after which a state report is printed. A final report is
    /// always printed.
    pub report_at: Vec<FrameIndex>,
}

impl RunConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut scenario = match &args.scenario {
            Some(path) => load_scenario(path)?,
            None => Scenario::reformation(),
        };

        if let Some(frames) = args.frames {
            scenario.frames = frames;
        }
        if let Some(seed) = args.seed {
            scenario.seed = seed;
        }
        if let Some(drones) = args.drones {
            // The schedule is not rewritten, so it must still fit the swarm.
            if let Some(index) = scenario.schedule.max_unit_index() {
                ensure!(
                    index < drones,
                    "--drones {drones} is too small for scenario '{}': its schedule refers to unit {index}",
                    scenario.name
                );
            }
            scenario.swarm_size = drones;
        }

        let render = (!args.no_render).then(|| RenderSettings {
            every: args.render_every,
            image: RenderConfig {
                width: args.width,
                height: args.height,
                ..Default::default()
            },
            gif: args.output.clone(),
            frames_dir: args.frames_dir.clone(),
            frame_delay_ms: args.frame_delay_ms,
        });

        let mut report_at = if args.report_at.is_empty() {
            scenario.schedule.destruction_frames()
        } else {
            args.report_at.clone()
        };
        report_at.sort_unstable();
        report_at.dedup();

        Ok(Self {
            scenario,
            render,
            report_at,
        })
    }
}

fn load_scenario(path: &Path) -> Result<Scenario> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    Scenario::from_json(&json).with_context(|| format!("invalid scenario {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["swarm-sim"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_use_builtin_scenario() {
        let config = RunConfig::from_args(&args(&[])).unwrap();
        assert_eq!(config.scenario, Scenario::reformation());
        assert_eq!(config.report_at, vec![100]);

        let render = config.render.unwrap();
        assert_eq!(render.every, 5);
        assert_eq!(render.gif, PathBuf::from("swarm_animation.gif"));
        assert_eq!(render.frames_dir, None);
    }

    #[test]
    fn test_overrides_apply() {
        let config = RunConfig::from_args(&args(&[
            "--frames", "50", "--seed", "7", "--drones", "12", "--report-at", "30", "10", "30",
        ]))
        .unwrap();
        assert_eq!(config.scenario.frames, 50);
        assert_eq!(config.scenario.seed, 7);
        assert_eq!(config.scenario.swarm_size, 12);
        assert_eq!(config.report_at, vec![10, 30]);
    }

    #[test]
    fn test_drones_below_scheduled_units_rejected() {
        let err = RunConfig::from_args(&args(&["--drones", "3", "--no-render"])).unwrap_err();
        let message = format!("{err}");
        assert!(message.contains("--drones 3"));
        assert!(message.contains("unit 4"));

        let config = RunConfig::from_args(&args(&["--drones", "5", "--no-render"])).unwrap();
        assert_eq!(config.scenario.swarm_size, 5);
    }

    #[test]
    fn test_drones_override_on_unscheduled_scenario() {
        let path = std::env::temp_dir().join(format!("swarm-app-tiny-{}.json", std::process::id()));
        fs::write(&path, r#"{"swarm_size": 8}"#).unwrap();

        let config = RunConfig::from_args(&args(&[
            "--scenario",
            path.to_str().unwrap(),
            "--drones",
            "2",
        ]))
        .unwrap();
        assert_eq!(config.scenario.swarm_size, 2);
        assert!(config.scenario.schedule.is_empty());
        assert!(config.report_at.is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_no_render_disables_output() {
        let config = RunConfig::from_args(&args(&["--no-render"])).unwrap();
        assert!(config.render.is_none());
    }

    #[test]
    fn test_render_every_zero_rejected() {
        assert!(Args::try_parse_from(["swarm-sim", "--render-every", "0"]).is_err());
    }

    #[test]
    fn test_scenario_file_loads() {
        let path = std::env::temp_dir().join(format!("swarm-app-scenario-{}.json", std::process::id()));
        fs::write(&path, r#"{"name": "small", "swarm_size": 6, "schedule": []}"#).unwrap();

        let config = RunConfig::from_args(&args(&["--scenario", path.to_str().unwrap()])).unwrap();
        assert_eq!(config.scenario.name, "small");
        assert_eq!(config.scenario.swarm_size, 6);
        assert!(config.report_at.is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_scenario_file_names_path() {
        let err = RunConfig::from_args(&args(&["--scenario", "/nonexistent/swarm.json"])).unwrap_err();
        assert!(format!("{err}").contains("/nonexistent/swarm.json"));
    }
}
