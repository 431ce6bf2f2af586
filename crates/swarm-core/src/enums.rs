//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Formation topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormationKind {
    /// Units evenly spaced along the Z axis at fixed X and height.
    Linear,
    /// Units evenly spaced on a horizontal circle.
    Circular,
}

impl FormationKind {
    pub const ALL: [FormationKind; 2] = [FormationKind::Linear, FormationKind::Circular];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormationKind::Linear => "linear",
            FormationKind::Circular => "circular",
        }
    }

    /// Look up a kind by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for FormationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a scheduled event fires relative to the frame's motion step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventPhase {
    /// Before steering and movement; the new state drives this frame's motion.
    #[default]
    BeforeStep,
    /// After movement; takes effect from the next frame on.
    AfterStep,
}
