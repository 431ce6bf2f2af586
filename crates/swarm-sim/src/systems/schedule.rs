//! Schedule system: turns the scheduled events for a frame into validated
//! actions.
//!
//! Preparation is read-only. Every formation is resolved and planned and
//! every load checked before the controller commits anything, so a frame
//! with one bad event changes nothing.

use swarm_core::enums::EventPhase;
use swarm_core::error::{SimError, SimResult};
use swarm_core::formation::FormationSpec;
use swarm_core::schedule::{EventSchedule, SwarmEvent};
use swarm_core::types::{FrameIndex, Vec3};

use crate::formation;
use crate::unit::Unit;

/// A scheduled event that has passed validation and can no longer fail.
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedAction {
    Formation {
        spec: FormationSpec,
        targets: Vec<Vec3>,
    },
    Destroy {
        units: Vec<usize>,
    },
    Load {
        unit: usize,
        load: f64,
    },
}

/// All actions for one frame, split by phase and kept in schedule order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreparedFrame {
    pub before_step: Vec<PreparedAction>,
    pub after_step: Vec<PreparedAction>,
}

impl PreparedFrame {
    pub fn is_empty(&self) -> bool {
        self.before_step.is_empty() && self.after_step.is_empty()
    }
}

/// Validate every event scheduled at `frame` against the current swarm.
pub fn prepare(
    schedule: &EventSchedule,
    frame: FrameIndex,
    units: &[Unit],
) -> SimResult<PreparedFrame> {
    let mut prepared = PreparedFrame::default();

    for entry in schedule.events_at(frame) {
        let action = prepare_event(&entry.event, units)?;
        match entry.phase {
            EventPhase::BeforeStep => prepared.before_step.push(action),
            EventPhase::AfterStep => prepared.after_step.push(action),
        }
    }

    Ok(prepared)
}

fn prepare_event(event: &SwarmEvent, units: &[Unit]) -> SimResult<PreparedAction> {
    match event {
        SwarmEvent::SetFormation { formation: request } => {
            let (spec, targets) = formation::plan_request(request, units.len())?;
            Ok(PreparedAction::Formation { spec, targets })
        }
        SwarmEvent::Destroy { units: indices } => {
            for &index in indices {
                unit_at(units, index)?;
            }
            Ok(PreparedAction::Destroy {
                units: indices.clone(),
            })
        }
        SwarmEvent::AssignLoad { unit, load } => {
            unit_at(units, *unit)?.check_load(*load)?;
            Ok(PreparedAction::Load {
                unit: *unit,
                load: *load,
            })
        }
    }
}

fn unit_at(units: &[Unit], index: usize) -> SimResult<&Unit> {
    units.get(index).ok_or(SimError::UnitOutOfRange {
        index,
        swarm_size: units.len(),
    })
}
