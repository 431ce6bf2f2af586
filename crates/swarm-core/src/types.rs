//! Fundamental geometric and simulation types.
//!
//! World space is Cartesian with `y` as the vertical axis:
//! x = East, y = Up (height), z = North.

/// 3D vector used for positions, velocities and displacements.
pub type Vec3 = glam::DVec3;

/// Index of a simulation frame. Frames advance monotonically from 0.
pub type FrameIndex = u64;

/// Project a point onto the ground plane (vertical component set to ground level).
pub fn grounded(position: Vec3) -> Vec3 {
    Vec3::new(position.x, crate::constants::GROUND_LEVEL, position.z)
}
