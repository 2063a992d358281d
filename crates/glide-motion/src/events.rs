//! Lifecycle events for animation cycles.
//!
//! The animator emits events into an `EventQueue` the caller drains after
//! driving it. Nothing in the engine depends on events being consumed; a
//! caller that never drains simply accumulates history.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::animator::CycleId;
use crate::host::ChildId;

/// Why an `animate_filter` call did not open a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The user prefers reduced motion.
    ReducedMotion,
    /// No container has been bound yet.
    NoContainer,
    /// A cycle is already in flight; the request is dropped, not queued.
    CycleInFlight,
    /// The container had no children at call time.
    NoChildren,
    /// The container had no children after the update; the cycle aborted.
    EmptyAfterUpdate,
}

/// How a pending child completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionKind {
    /// The host reported the slide's natural end.
    EndNotification,
    /// The fallback deadline elapsed first.
    FallbackTimer,
}

/// Event emitted when a cycle changes state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CycleEvent {
    /// A cycle entered its Play phase.
    Started {
        cycle_id: CycleId,
        /// Number of children actually animated.
        animated: usize,
    },
    /// All pending children settled; overlays are cleared.
    Ended { cycle_id: CycleId },
    /// A request short-circuited without opening a cycle.
    Skipped { reason: SkipReason },
}

/// Event emitted for one child within a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChildEvent {
    /// The child was inverted and its slide scheduled.
    Played {
        cycle_id: CycleId,
        child: ChildId,
        dx: f32,
        dy: f32,
    },
    /// The child settled and its overlay was removed.
    Completed {
        cycle_id: CycleId,
        child: ChildId,
        how: CompletionKind,
    },
}

impl ChildEvent {
    pub fn child(&self) -> ChildId {
        match self {
            Self::Played { child, .. } | Self::Completed { child, .. } => *child,
        }
    }

    pub fn cycle_id(&self) -> CycleId {
        match self {
            Self::Played { cycle_id, .. } | Self::Completed { cycle_id, .. } => *cycle_id,
        }
    }
}

/// Wrapper enum for both event kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MotionEvent {
    Cycle(CycleEvent),
    Child(ChildEvent),
}

impl MotionEvent {
    /// True for `CycleEvent::Ended`.
    pub fn is_cycle_end(&self) -> bool {
        matches!(self, Self::Cycle(CycleEvent::Ended { .. }))
    }

    /// The skip reason, if this is a skip event.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Cycle(CycleEvent::Skipped { reason }) => Some(*reason),
            _ => None,
        }
    }
}

/// FIFO queue of animation events.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<MotionEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_cycle(&mut self, event: CycleEvent) {
        self.events.push_back(MotionEvent::Cycle(event));
    }

    pub fn push_child(&mut self, event: ChildEvent) {
        self.events.push_back(MotionEvent::Child(event));
    }

    /// Remove and return all queued events, oldest first.
    pub fn drain(&mut self) -> Vec<MotionEvent> {
        self.events.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_fifo_order() {
        let mut queue = EventQueue::new();
        let id = CycleId::new();

        queue.push_cycle(CycleEvent::Started {
            cycle_id: id,
            animated: 2,
        });
        queue.push_child(ChildEvent::Completed {
            cycle_id: id,
            child: ChildId(7),
            how: CompletionKind::EndNotification,
        });
        queue.push_cycle(CycleEvent::Ended { cycle_id: id });

        let drained = queue.drain();
        assert_eq!(drained.len(), 3);
        assert!(matches!(
            drained[0],
            MotionEvent::Cycle(CycleEvent::Started { .. })
        ));
        assert!(drained[2].is_cycle_end());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_skip_reason_accessor() {
        let skip = MotionEvent::Cycle(CycleEvent::Skipped {
            reason: SkipReason::ReducedMotion,
        });
        assert_eq!(skip.skip_reason(), Some(SkipReason::ReducedMotion));

        let end = MotionEvent::Cycle(CycleEvent::Ended {
            cycle_id: CycleId::new(),
        });
        assert_eq!(end.skip_reason(), None);
    }

    #[test]
    fn test_event_serialization_tags() {
        let event = MotionEvent::Child(ChildEvent::Completed {
            cycle_id: CycleId(3),
            child: ChildId(7),
            how: CompletionKind::FallbackTimer,
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "child");
        assert_eq!(json["type"], "completed");
        assert_eq!(json["how"], "fallback_timer");
    }
}
