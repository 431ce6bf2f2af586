//! Simulation error types.

use thiserror::Error;

use crate::types::FrameIndex;

/// Errors surfaced by the formation engine. None are retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Requested formation kind is not recognised.
    #[error("unknown formation type: {kind}")]
    UnknownFormation { kind: String },

    /// Requested load exceeds the unit's capacity (or is not a valid amount).
    #[error("load {load} rejected by unit {unit} (capacity {capacity})")]
    InvalidLoad {
        unit: usize,
        load: f64,
        capacity: f64,
    },

    /// Unit index does not name a unit in the swarm.
    #[error("unit {index} out of range for swarm of {swarm_size}")]
    UnitOutOfRange { index: usize, swarm_size: usize },

    /// Frames must be processed in strictly increasing order.
    #[error("frame {frame} is not after the last processed frame {last}")]
    FrameOutOfOrder { frame: FrameIndex, last: FrameIndex },

    /// Configuration or scenario rejected at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for simulation operations.
pub type SimResult<T> = std::result::Result<T, SimError>;
