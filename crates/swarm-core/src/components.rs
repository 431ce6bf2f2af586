//! Plain data describing units.
//!
//! Behaviour lives in the sim crate; these are configuration records.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Attribute set every unit in a swarm starts with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitProfile {
    /// Maximum carryable load.
    pub load_capacity: f64,
    /// Speed magnitude used when steering (distance per frame).
    pub acceleration: f64,
    pub climb_rate: f64,
    pub weight: f64,
    pub size: f64,
    /// Starting battery life. Drained by load assignment.
    pub battery_life: f64,
}

impl Default for UnitProfile {
    fn default() -> Self {
        Self {
            load_capacity: UNIT_LOAD_CAPACITY,
            acceleration: UNIT_ACCELERATION,
            climb_rate: UNIT_CLIMB_RATE,
            weight: UNIT_WEIGHT,
            size: UNIT_SIZE,
            battery_life: UNIT_BATTERY_LIFE,
        }
    }
}

impl UnitProfile {
    /// Check the profile can drive a simulation. Returns a description of the
    /// first offending field.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.acceleration.is_finite() && self.acceleration > 0.0) {
            return Err(format!(
                "unit acceleration must be positive and finite, got {}",
                self.acceleration
            ));
        }
        if !(self.load_capacity.is_finite() && self.load_capacity >= 0.0) {
            return Err(format!(
                "unit load capacity must be non-negative and finite, got {}",
                self.load_capacity
            ));
        }
        if !self.battery_life.is_finite() {
            return Err("unit battery life must be finite".into());
        }
        Ok(())
    }
}
