//! Formation planning: spec + swarm size to per-unit target positions.
//!
//! Planning is pure and deterministic. Position `i` of the result is the
//! target for unit `i`.

use std::f64::consts::TAU;

use swarm_core::error::SimResult;
use swarm_core::formation::{FormationRequest, FormationSpec};
use swarm_core::types::Vec3;

/// Target positions for `swarm_size` units in the given formation.
pub fn plan(spec: &FormationSpec, swarm_size: usize) -> Vec<Vec3> {
    match *spec {
        FormationSpec::Linear {
            height,
            x_coord,
            length,
        } => linear(height, x_coord, length, swarm_size),
        FormationSpec::Circular {
            height,
            radius,
            center_xz,
        } => circular(height, radius, center_xz, swarm_size),
    }
}

/// Resolve a request and plan it. Fails on unknown kinds.
pub fn plan_request(
    request: &FormationRequest,
    swarm_size: usize,
) -> SimResult<(FormationSpec, Vec<Vec3>)> {
    let spec = request.resolve()?;
    let targets = plan(&spec, swarm_size);
    Ok((spec, targets))
}

/// Evenly spaced along Z. The spacing divides by the unit count, so the last
/// unit stops one spacing short of `length`.
fn linear(height: f64, x_coord: f64, length: f64, swarm_size: usize) -> Vec<Vec3> {
    let n = swarm_size as f64;
    (0..swarm_size)
        .map(|i| Vec3::new(x_coord, height, i as f64 * length / n))
        .collect()
}

/// Evenly spaced angles over `[0, TAU)`; the endpoint is excluded so no two
/// units share an angle.
fn circular(height: f64, radius: f64, center_xz: [f64; 2], swarm_size: usize) -> Vec<Vec3> {
    let step = TAU / swarm_size as f64;
    (0..swarm_size)
        .map(|i| {
            let angle = i as f64 * step;
            Vec3::new(
                center_xz[0] + radius * angle.cos(),
                height,
                center_xz[1] + radius * angle.sin(),
            )
        })
        .collect()
}
