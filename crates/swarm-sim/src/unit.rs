//! A single aerial unit and its state transitions.

use swarm_core::components::UnitProfile;
use swarm_core::error::{SimError, SimResult};
use swarm_core::types::{grounded, Vec3};

/// One simulated drone.
///
/// Fields are private so the invariants hold: `0 <= load <= load_capacity`,
/// and a destroyed unit never moves again.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    id: usize,
    position: Vec3,
    velocity: Vec3,
    load_capacity: f64,
    acceleration: f64,
    climb_rate: f64,
    weight: f64,
    size: f64,
    battery_life: f64,
    load: f64,
    destroyed: bool,
}

impl Unit {
    /// Create a stationary, unloaded unit at `position`.
    pub fn new(id: usize, position: Vec3, profile: &UnitProfile) -> Self {
        Self {
            id,
            position,
            velocity: Vec3::ZERO,
            load_capacity: profile.load_capacity,
            acceleration: profile.acceleration,
            climb_rate: profile.climb_rate,
            weight: profile.weight,
            size: profile.size,
            battery_life: profile.battery_life,
            load: 0.0,
            destroyed: false,
        }
    }

    /// Point the velocity at `target` with magnitude `acceleration`.
    ///
    /// When the target is closer than one frame of travel the velocity is the
    /// exact remaining offset, so the unit lands on the target. A unit already
    /// at its target gets zero velocity.
    pub fn adjust_velocity(&mut self, target: Vec3) {
        if self.destroyed {
            return;
        }

        let offset = target - self.position;
        let distance = offset.length();

        self.velocity = if distance == 0.0 {
            Vec3::ZERO
        } else if distance <= self.acceleration {
            offset
        } else {
            offset * (self.acceleration / distance)
        };
    }

    /// Integrate one frame: `position += velocity`.
    pub fn update_position(&mut self) {
        if self.destroyed {
            return;
        }
        self.position += self.velocity;
    }

    /// Check that `load` could be carried without changing any state.
    pub fn check_load(&self, load: f64) -> SimResult<()> {
        if load.is_finite() && load >= 0.0 && load <= self.load_capacity {
            Ok(())
        } else {
            Err(SimError::InvalidLoad {
                unit: self.id,
                load,
                capacity: self.load_capacity,
            })
        }
    }

    /// Carry `load`, draining battery by `load / load_capacity`.
    ///
    /// Battery life is not clamped and may go negative.
    pub fn set_load(&mut self, load: f64) -> SimResult<()> {
        self.check_load(load)?;
        self.load = load;
        if self.load_capacity > 0.0 {
            self.battery_life -= load / self.load_capacity;
        }
        Ok(())
    }

    /// Mark the unit destroyed and drop it to the ground. Horizontal position
    /// and velocity are frozen.
    ///
    /// Returns `true` only on the call that actually destroyed the unit.
    pub fn destroy(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        self.destroyed = true;
        self.position = grounded(self.position);
        true
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn load_capacity(&self) -> f64 {
        self.load_capacity
    }

    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    pub fn climb_rate(&self) -> f64 {
        self.climb_rate
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn battery_life(&self) -> f64 {
        self.battery_life
    }

    pub fn load(&self) -> f64 {
        self.load
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Straight-line distance to `target`.
    pub fn distance_to(&self, target: Vec3) -> f64 {
        self.position.distance(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(x: f64, y: f64, z: f64) -> Unit {
        Unit::new(0, Vec3::new(x, y, z), &UnitProfile::default())
    }

    #[test]
    fn test_adjust_velocity_has_acceleration_magnitude() {
        let mut unit = unit_at(0.0, 0.0, 0.0);
        unit.adjust_velocity(Vec3::new(30.0, 40.0, 0.0));
        assert!((unit.velocity().length() - 1.0).abs() < 1e-12);
        assert!((unit.velocity() - Vec3::new(0.6, 0.8, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_adjust_velocity_at_target_is_zero() {
        let mut unit = unit_at(2.0, 3.0, 4.0);
        unit.adjust_velocity(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(unit.velocity(), Vec3::ZERO);
        assert!(!unit.velocity().is_nan());
    }

    #[test]
    fn test_adjust_velocity_lands_on_close_target() {
        let mut unit = unit_at(0.0, 0.0, 0.0);
        let target = Vec3::new(0.3, 0.0, 0.4);
        unit.adjust_velocity(target);
        unit.update_position();
        assert!(unit.distance_to(target) < 1e-12);
    }

    #[test]
    fn test_update_position_adds_velocity() {
        let mut unit = unit_at(1.0, 1.0, 1.0);
        unit.adjust_velocity(Vec3::new(1.0, 11.0, 1.0));
        unit.update_position();
        assert_eq!(unit.position(), Vec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_set_load_drains_battery() {
        let mut unit = unit_at(0.0, 0.0, 0.0);
        unit.set_load(0.25).unwrap();
        assert_eq!(unit.load(), 0.25);
        assert!((unit.battery_life() - 59.5).abs() < 1e-12);
    }

    #[test]
    fn test_battery_may_go_negative() {
        let profile = UnitProfile {
            battery_life: 1.5,
            ..Default::default()
        };
        let mut unit = Unit::new(4, Vec3::ZERO, &profile);
        unit.set_load(0.5).unwrap();
        unit.set_load(0.5).unwrap();
        assert!((unit.battery_life() - -0.5).abs() < 1e-12);
    }

    #[test]
    fn test_set_load_over_capacity_rejected_without_change() {
        let mut unit = unit_at(0.0, 0.0, 0.0);
        unit.set_load(0.1).unwrap();
        let before = unit.clone();

        let err = unit.set_load(0.6).unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidLoad {
                unit: 0,
                load: 0.6,
                capacity: 0.5
            }
        );
        assert_eq!(unit, before);
    }

    #[test]
    fn test_negative_and_nan_loads_rejected() {
        let mut unit = unit_at(0.0, 0.0, 0.0);
        assert!(unit.set_load(-0.1).is_err());
        assert!(unit.set_load(f64::NAN).is_err());
        assert_eq!(unit.load(), 0.0);
    }

    #[test]
    fn test_zero_capacity_accepts_only_zero_load() {
        let profile = UnitProfile {
            load_capacity: 0.0,
            ..Default::default()
        };
        let mut unit = Unit::new(0, Vec3::ZERO, &profile);
        unit.set_load(0.0).unwrap();
        assert_eq!(unit.battery_life(), profile.battery_life);
        assert!(unit.set_load(0.01).is_err());
    }

    #[test]
    fn test_destroy_grounds_unit_and_is_idempotent() {
        let mut unit = unit_at(7.0, 30.0, -3.0);
        unit.adjust_velocity(Vec3::new(20.0, 30.0, -3.0));
        let velocity = unit.velocity();

        assert!(unit.destroy());
        let once = unit.clone();
        assert!(!unit.destroy());

        assert_eq!(unit, once);
        assert!(unit.is_destroyed());
        assert_eq!(unit.position(), Vec3::new(7.0, 0.0, -3.0));
        assert_eq!(unit.velocity(), velocity);
    }

    #[test]
    fn test_destroyed_unit_never_moves() {
        let mut unit = unit_at(1.0, 5.0, 1.0);
        unit.adjust_velocity(Vec3::new(10.0, 5.0, 1.0));
        unit.destroy();
        let frozen = unit.clone();

        unit.adjust_velocity(Vec3::new(-50.0, 50.0, 50.0));
        unit.update_position();
        assert_eq!(unit, frozen);
    }
}
