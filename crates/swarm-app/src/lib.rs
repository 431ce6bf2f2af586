//! Swarm simulation runner.
//!
//! Wires the controller, renderer and exporter together behind a CLI:
//! loads a scenario, drives it frame by frame, logs what happens, prints
//! state reports and writes the animation.

pub mod cli;
pub mod config;
pub mod logging;
pub mod sim_loop;

pub use swarm_core as core;
