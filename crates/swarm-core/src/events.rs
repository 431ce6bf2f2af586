//! Events emitted by the controller while processing frames.
//!
//! The core never logs; callers drain these and report them however they like.

use serde::{Deserialize, Serialize};

use crate::enums::FormationKind;
use crate::types::{FrameIndex, Vec3};

/// Notable state change that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FrameEvent {
    /// Active target positions were replaced.
    FormationChanged {
        frame: Option<FrameIndex>,
        kind: FormationKind,
    },
    /// A live unit was destroyed and fell to the ground.
    UnitDestroyed {
        frame: Option<FrameIndex>,
        unit: usize,
        position: Vec3,
    },
    /// A unit took on a load.
    LoadAssigned {
        frame: Option<FrameIndex>,
        unit: usize,
        load: f64,
        battery_life: f64,
    },
}
