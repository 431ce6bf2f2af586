//! Unit spawn factories for setting up a swarm.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use swarm_core::components::UnitProfile;
use swarm_core::types::Vec3;

use crate::unit::Unit;

/// Spawn `count` units at independent uniform positions in `[0, extent)^3`.
///
/// `extent` must be positive; callers validate it.
pub fn spawn_units(
    rng: &mut ChaCha8Rng,
    count: usize,
    extent: f64,
    profile: &UnitProfile,
) -> Vec<Unit> {
    (0..count)
        .map(|id| Unit::new(id, random_position(rng, extent), profile))
        .collect()
}

/// A point drawn uniformly from the cube `[0, extent)^3`.
pub fn random_position(rng: &mut ChaCha8Rng, extent: f64) -> Vec3 {
    Vec3::new(
        rng.gen_range(0.0..extent),
        rng.gen_range(0.0..extent),
        rng.gen_range(0.0..extent),
    )
}
