//! Systems that operate on the swarm each frame.
//!
//! Systems are free functions over the controller's units and targets.
//! They do not own state.

pub mod movement;
pub mod schedule;
pub mod snapshot;
pub mod steering;
