//! Snapshot system: builds a `SwarmSnapshot` from the units.
//!
//! This system is read-only. It never modifies the swarm.

use swarm_core::enums::FormationKind;
use swarm_core::state::{SwarmSnapshot, UnitView};
use swarm_core::types::FrameIndex;

use crate::unit::Unit;

/// Build a complete snapshot of the swarm.
pub fn build_snapshot(
    units: &[Unit],
    frame: Option<FrameIndex>,
    formation: Option<FormationKind>,
) -> SwarmSnapshot {
    SwarmSnapshot {
        frame,
        formation,
        units: units.iter().map(build_unit_view).collect(),
    }
}

fn build_unit_view(unit: &Unit) -> UnitView {
    UnitView {
        id: unit.id(),
        position: unit.position(),
        velocity: unit.velocity(),
        destroyed: unit.is_destroyed(),
        load: unit.load(),
        battery_life: unit.battery_life(),
    }
}
