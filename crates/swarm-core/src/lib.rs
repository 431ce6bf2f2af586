//! Core types and definitions for the swarm formation simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! unit profiles, formation specs, event schedules, snapshots, errors,
//! and constants. It has no dependency on rendering or any runtime.

pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod formation;
pub mod schedule;
pub mod state;
pub mod types;

pub use error::{SimError, SimResult};

#[cfg(test)]
mod tests;
