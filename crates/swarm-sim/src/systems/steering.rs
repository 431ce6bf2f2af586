//! Steering system.
//!
//! Points every live unit's velocity at its index-aligned target. Runs as a
//! full pass before any unit moves, so every velocity in a frame is computed
//! from the positions at the start of that frame.

use swarm_core::types::Vec3;

use crate::unit::Unit;

/// Steer all live units toward their targets. Without targets no unit is steered.
pub fn run(units: &mut [Unit], targets: Option<&[Vec3]>) {
    let Some(targets) = targets else {
        return;
    };

    for (unit, target) in units.iter_mut().zip(targets) {
        if !unit.is_destroyed() {
            unit.adjust_velocity(*target);
        }
    }
}
