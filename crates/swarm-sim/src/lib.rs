//! Formation engine for the swarm simulation.
//!
//! Owns the units, runs the per-frame steering and movement passes,
//! applies scheduled formation changes and destructions, and produces
//! `SwarmSnapshot`s for rendering and reporting.

pub mod engine;
pub mod formation;
pub mod scenario;
pub mod systems;
pub mod unit;
pub mod world_setup;

pub use engine::{SwarmConfig, SwarmController};
pub use scenario::Scenario;
pub use swarm_core as core;
pub use unit::Unit;
