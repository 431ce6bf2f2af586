//! Scenario definitions: swarm setup plus the frame-indexed event schedule.
//!
//! Scenarios are plain data. `Scenario::reformation` is the built-in run;
//! others load from JSON.

use serde::{Deserialize, Serialize};

use swarm_core::components::UnitProfile;
use swarm_core::constants::*;
use swarm_core::error::{SimError, SimResult};
use swarm_core::formation::{FormationRequest, FormationSpec};
use swarm_core::schedule::{EventSchedule, SwarmEvent};
use swarm_core::types::FrameIndex;

use crate::engine::SwarmConfig;

/// Everything needed to reproduce one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: String,
    pub swarm_size: usize,
    pub seed: u64,
    pub spawn_extent: f64,
    /// Frames `0..frames` are simulated.
    pub frames: FrameIndex,
    pub unit_profile: UnitProfile,
    pub initial_formation: Option<FormationRequest>,
    pub schedule: EventSchedule,
}

/// An empty run: default swarm, no formation, nothing scheduled.
impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: "custom".into(),
            swarm_size: DEFAULT_SWARM_SIZE,
            seed: DEFAULT_SEED,
            spawn_extent: DEFAULT_SPAWN_EXTENT,
            frames: DEFAULT_SCENARIO_FRAMES,
            unit_profile: UnitProfile::default(),
            initial_formation: None,
            schedule: EventSchedule::default(),
        }
    }
}

impl Scenario {
    /// "Reformation": 30 units form a circle, then at frame 100 switch to a
    /// line while the first five units are shot down.
    ///
    /// The line is requested both before the step at frame 100 and again
    /// after the destruction; re-applying an unchanged formation is a no-op.
    pub fn reformation() -> Self {
        let circle = FormationSpec::Circular {
            height: 30.0,
            radius: 20.0,
            center_xz: [30.0, 30.0],
        };
        let line = FormationSpec::Linear {
            height: 30.0,
            x_coord: 30.0,
            length: 20.0,
        };

        let schedule = EventSchedule::new()
            .before_step(
                REFORMATION_FRAME,
                SwarmEvent::SetFormation {
                    formation: line.into(),
                },
            )
            .after_step(
                REFORMATION_FRAME,
                SwarmEvent::Destroy {
                    units: (0..REFORMATION_CASUALTIES).collect(),
                },
            )
            .after_step(
                REFORMATION_FRAME,
                SwarmEvent::SetFormation {
                    formation: line.into(),
                },
            );

        Self {
            name: "reformation".into(),
            initial_formation: Some(circle.into()),
            schedule,
            ..Default::default()
        }
    }

    /// Parse a scenario from JSON. Missing fields take the `Default` values,
    /// so an omitted schedule is empty and no formation is set.
    pub fn from_json(json: &str) -> SimResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SimError::InvalidConfig(format!("failed to parse scenario: {e}")))
    }

    pub fn to_json(&self) -> SimResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SimError::InvalidConfig(format!("failed to serialize scenario: {e}")))
    }

    /// Controller configuration for this scenario.
    pub fn config(&self) -> SwarmConfig {
        SwarmConfig {
            swarm_size: self.swarm_size,
            seed: self.seed,
            spawn_extent: self.spawn_extent,
            unit_profile: self.unit_profile,
            initial_formation: self.initial_formation.clone(),
            schedule: self.schedule.clone(),
        }
    }
}
