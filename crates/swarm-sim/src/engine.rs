//! Swarm controller: the core of the simulation.
//!
//! `SwarmController` owns the units and the active formation, applies the
//! event schedule, runs the steering and movement passes, and produces
//! `SwarmSnapshot`s. Completely headless and deterministic for a given seed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use swarm_core::components::UnitProfile;
use swarm_core::constants::{DEFAULT_SEED, DEFAULT_SPAWN_EXTENT, DEFAULT_SWARM_SIZE};
use swarm_core::error::{SimError, SimResult};
use swarm_core::events::FrameEvent;
use swarm_core::formation::{FormationRequest, FormationSpec};
use swarm_core::schedule::EventSchedule;
use swarm_core::state::SwarmSnapshot;
use swarm_core::types::{FrameIndex, Vec3};

use crate::formation;
use crate::systems;
use crate::systems::schedule::PreparedAction;
use crate::unit::Unit;
use crate::world_setup;

/// Configuration for building a swarm.
#[derive(Debug, Clone)]
pub struct SwarmConfig {
    /// Number of units. Fixed for the life of the controller.
    pub swarm_size: usize,
    /// RNG seed for spawn positions. Same seed = same swarm.
    pub seed: u64,
    /// Units spawn uniformly in `[0, spawn_extent)^3`.
    pub spawn_extent: f64,
    pub unit_profile: UnitProfile,
    /// Formation applied at construction, before frame 0.
    pub initial_formation: Option<FormationRequest>,
    pub schedule: EventSchedule,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            swarm_size: DEFAULT_SWARM_SIZE,
            seed: DEFAULT_SEED,
            spawn_extent: DEFAULT_SPAWN_EXTENT,
            unit_profile: UnitProfile::default(),
            initial_formation: None,
            schedule: EventSchedule::default(),
        }
    }
}

impl SwarmConfig {
    /// Check everything that can be checked before the first frame.
    ///
    /// Formations and loads in the schedule are validated when their frame
    /// comes up, so those errors surface from `update`.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.spawn_extent.is_finite() && self.spawn_extent > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "spawn extent must be positive and finite, got {}",
                self.spawn_extent
            )));
        }
        self.unit_profile.validate().map_err(SimError::InvalidConfig)?;

        if let Some(index) = self.schedule.max_unit_index() {
            if index >= self.swarm_size {
                return Err(SimError::UnitOutOfRange {
                    index,
                    swarm_size: self.swarm_size,
                });
            }
        }
        Ok(())
    }
}

/// Owns the swarm and drives it frame by frame.
pub struct SwarmController {
    units: Vec<Unit>,
    /// Index-aligned with `units` once a formation is set.
    targets: Option<Vec<Vec3>>,
    formation: Option<FormationSpec>,
    schedule: EventSchedule,
    last_frame: Option<FrameIndex>,
    events: Vec<FrameEvent>,
}

impl SwarmController {
    /// Build a swarm from `config`, spawning units at seeded random positions.
    pub fn new(config: SwarmConfig) -> SimResult<Self> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let units = world_setup::spawn_units(
            &mut rng,
            config.swarm_size,
            config.spawn_extent,
            &config.unit_profile,
        );

        let mut controller = Self {
            units,
            targets: None,
            formation: None,
            schedule: config.schedule,
            last_frame: None,
            events: Vec::new(),
        };

        if let Some(request) = &config.initial_formation {
            controller.set_formation(request)?;
        }

        Ok(controller)
    }

    /// Advance the simulation by one frame.
    ///
    /// Frames must be strictly increasing; gaps are allowed. Scheduled events
    /// for the frame are validated first, and if any fails the swarm is left
    /// exactly as it was.
    pub fn update(&mut self, frame: FrameIndex) -> SimResult<()> {
        if let Some(last) = self.last_frame {
            if frame <= last {
                return Err(SimError::FrameOutOfOrder { frame, last });
            }
        }

        let prepared = systems::schedule::prepare(&self.schedule, frame, &self.units)?;
        self.last_frame = Some(frame);

        for action in prepared.before_step {
            self.apply_action(action);
        }

        self.run_systems();

        for action in prepared.after_step {
            self.apply_action(action);
        }

        Ok(())
    }

    /// Replace the active formation. On error the previous targets stay.
    pub fn set_formation(&mut self, request: &FormationRequest) -> SimResult<()> {
        let (spec, targets) = formation::plan_request(request, self.units.len())?;
        self.commit_formation(spec, targets);
        Ok(())
    }

    /// Destroy the named units. Already-destroyed units and indices outside
    /// the swarm are left alone.
    pub fn apply_destruction(&mut self, indices: &[usize]) {
        for &index in indices {
            let Some(unit) = self.units.get_mut(index) else {
                continue;
            };
            if unit.destroy() {
                self.events.push(FrameEvent::UnitDestroyed {
                    frame: self.last_frame,
                    unit: index,
                    position: unit.position(),
                });
            }
        }
    }

    /// Assign a load to one unit.
    pub fn set_load(&mut self, index: usize, load: f64) -> SimResult<()> {
        let swarm_size = self.units.len();
        let unit = self
            .units
            .get_mut(index)
            .ok_or(SimError::UnitOutOfRange { index, swarm_size })?;
        unit.set_load(load)?;
        self.events.push(FrameEvent::LoadAssigned {
            frame: self.last_frame,
            unit: index,
            load,
            battery_life: unit.battery_life(),
        });
        Ok(())
    }

    /// Read-only view of every unit.
    pub fn snapshot(&self) -> SwarmSnapshot {
        systems::snapshot::build_snapshot(
            &self.units,
            self.last_frame,
            self.formation.map(|spec| spec.kind()),
        )
    }

    /// Drain the events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn swarm_size(&self) -> usize {
        self.units.len()
    }

    /// Active target positions, `None` until a formation is set.
    pub fn targets(&self) -> Option<&[Vec3]> {
        self.targets.as_deref()
    }

    pub fn formation(&self) -> Option<&FormationSpec> {
        self.formation.as_ref()
    }

    /// Last frame passed to a successful `update`.
    pub fn last_frame(&self) -> Option<FrameIndex> {
        self.last_frame
    }

    /// Distance from a unit to its current target.
    pub fn distance_to_target(&self, index: usize) -> Option<f64> {
        let target = self.targets.as_ref()?.get(index)?;
        Some(self.units.get(index)?.distance_to(*target))
    }

    fn commit_formation(&mut self, spec: FormationSpec, targets: Vec<Vec3>) {
        debug_assert_eq!(targets.len(), self.units.len());
        self.targets = Some(targets);
        self.formation = Some(spec);
        self.events.push(FrameEvent::FormationChanged {
            frame: self.last_frame,
            kind: spec.kind(),
        });
    }

    /// Apply one validated action. Cannot fail.
    fn apply_action(&mut self, action: PreparedAction) {
        match action {
            PreparedAction::Formation { spec, targets } => self.commit_formation(spec, targets),
            PreparedAction::Destroy { units } => self.apply_destruction(&units),
            PreparedAction::Load { unit, load } => {
                // Index and amount were checked in prepare.
                let applied = self.set_load(unit, load);
                debug_assert!(applied.is_ok());
            }
        }
    }

    /// Run all per-frame systems in order.
    fn run_systems(&mut self) {
        // 1. Steering: every velocity from start-of-frame positions
        systems::steering::run(&mut self.units, self.targets.as_deref());
        // 2. Movement integration
        systems::movement::run(&mut self.units);
    }
}
