//! Swarm snapshot: the complete observable state handed to collaborators.
//!
//! Snapshots own their data; nothing in them can reach back into the
//! controller.

use serde::{Deserialize, Serialize};

use crate::enums::FormationKind;
use crate::types::{FrameIndex, Vec3};

/// Point-in-time view of every unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwarmSnapshot {
    /// Last processed frame, `None` before the first update.
    pub frame: Option<FrameIndex>,
    /// Kind of the active formation, `None` if none has been set.
    pub formation: Option<FormationKind>,
    pub units: Vec<UnitView>,
}

/// Observable state of one unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitView {
    /// Stable index of the unit in the swarm.
    pub id: usize,
    pub position: Vec3,
    pub velocity: Vec3,
    pub destroyed: bool,
    pub load: f64,
    pub battery_life: f64,
}

impl SwarmSnapshot {
    pub fn alive_count(&self) -> usize {
        self.units.iter().filter(|unit| !unit.destroyed).count()
    }

    pub fn destroyed_count(&self) -> usize {
        self.units.len() - self.alive_count()
    }

    pub fn unit(&self, id: usize) -> Option<&UnitView> {
        self.units.get(id)
    }
}
