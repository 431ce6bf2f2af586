//! Frame-indexed event schedule driving a scenario.
//!
//! Events are data: the controller looks them up by frame instead of
//! hard-coding per-frame conditionals.

use serde::{Deserialize, Serialize};

use crate::enums::EventPhase;
use crate::formation::FormationRequest;
use crate::types::FrameIndex;

/// A state change the controller can apply at a frame boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SwarmEvent {
    /// Recompute and replace the active target positions.
    SetFormation { formation: FormationRequest },
    /// Destroy the listed units. Already-destroyed units are unaffected.
    Destroy { units: Vec<usize> },
    /// Assign a carried load to one unit.
    AssignLoad { unit: usize, load: f64 },
}

impl SwarmEvent {
    /// Highest unit index the event refers to, if any.
    pub fn max_unit_index(&self) -> Option<usize> {
        match self {
            SwarmEvent::SetFormation { .. } => None,
            SwarmEvent::Destroy { units } => units.iter().copied().max(),
            SwarmEvent::AssignLoad { unit, .. } => Some(*unit),
        }
    }
}

/// One schedule entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// Frame at which the event fires.
    pub frame: FrameIndex,
    #[serde(default)]
    pub phase: EventPhase,
    pub event: SwarmEvent,
}

/// The complete event schedule for a run, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventSchedule {
    pub events: Vec<ScheduledEvent>,
}

impl EventSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: FrameIndex, phase: EventPhase, event: SwarmEvent) {
        self.events.push(ScheduledEvent {
            frame,
            phase,
            event,
        });
    }

    /// Builder form of `push` with `EventPhase::BeforeStep`.
    pub fn before_step(mut self, frame: FrameIndex, event: SwarmEvent) -> Self {
        self.push(frame, EventPhase::BeforeStep, event);
        self
    }

    /// Builder form of `push` with `EventPhase::AfterStep`.
    pub fn after_step(mut self, frame: FrameIndex, event: SwarmEvent) -> Self {
        self.push(frame, EventPhase::AfterStep, event);
        self
    }

    /// Entries firing at `frame`, in schedule order.
    pub fn events_at(&self, frame: FrameIndex) -> impl Iterator<Item = &ScheduledEvent> {
        self.events.iter().filter(move |entry| entry.frame == frame)
    }

    /// Frames at which units are destroyed after the motion step.
    pub fn destruction_frames(&self) -> Vec<FrameIndex> {
        let mut frames: Vec<FrameIndex> = self
            .events
            .iter()
            .filter(|entry| {
                entry.phase == EventPhase::AfterStep
                    && matches!(entry.event, SwarmEvent::Destroy { .. })
            })
            .map(|entry| entry.frame)
            .collect();
        frames.sort_unstable();
        frames.dedup();
        frames
    }

    /// Highest unit index referenced anywhere in the schedule.
    pub fn max_unit_index(&self) -> Option<usize> {
        self.events
            .iter()
            .filter_map(|entry| entry.event.max_unit_index())
            .max()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
