//! Kinematic integration system.
//!
//! Updates position from velocity each frame: position += velocity.

use crate::unit::Unit;

/// Advance every live unit by its current velocity.
pub fn run(units: &mut [Unit]) {
    for unit in units.iter_mut().filter(|unit| !unit.is_destroyed()) {
        unit.update_position();
    }
}
