//! Slide transitions: per-child offset-to-identity interpolation.
//!
//! A `SlideSpec` configures how children slide (duration, easing, fallback
//! margin). A `SlideTransition` is the runtime state of one child's slide,
//! advanced by the host each frame.

use serde::{Deserialize, Serialize};

use crate::easing::EasingFunction;
use crate::geometry::Offset;
use crate::host::ChildId;
use crate::interpolate::Interpolate;

/// Configuration for slide transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Slide duration in milliseconds.
    pub duration_ms: f32,
    /// Extra margin past the duration before a completion is forced when no
    /// end notification arrives.
    pub fallback_margin_ms: f32,
    /// Easing function for the slide.
    pub easing: EasingFunction,
}

impl Default for SlideSpec {
    fn default() -> Self {
        Self {
            duration_ms: 300.0,
            fallback_margin_ms: 50.0,
            easing: EasingFunction::EaseOut,
        }
    }
}

impl SlideSpec {
    pub fn with_duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_fallback_margin(mut self, margin_ms: f32) -> Self {
        self.fallback_margin_ms = margin_ms;
        self
    }

    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Absolute per-child completion deadline, measured from Play.
    pub fn fallback_deadline_ms(&self) -> f32 {
        self.duration_ms + self.fallback_margin_ms
    }
}

/// Current state of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideState {
    /// Slide is running.
    Running,
    /// Slide reached identity.
    Finished,
    /// Slide was abandoned before reaching identity.
    Cancelled,
}

/// Runtime state for one child's slide from an inverted offset to identity.
#[derive(Debug, Clone)]
pub struct SlideTransition {
    /// The child being slid.
    pub child: ChildId,
    /// Starting offset (the inverted FLIP delta).
    pub from: Offset,
    /// Total duration in milliseconds.
    pub duration_ms: f32,
    /// Time elapsed since the slide started.
    pub elapsed_ms: f32,
    /// Easing function for timing.
    pub easing: EasingFunction,
    /// Current state.
    pub state: SlideState,
}

impl SlideTransition {
    pub fn new(child: ChildId, from: Offset, spec: &SlideSpec) -> Self {
        Self {
            child,
            from,
            duration_ms: spec.duration_ms,
            elapsed_ms: 0.0,
            easing: spec.easing,
            state: SlideState::Running,
        }
    }

    /// Advance by `delta_ms`. Returns `true` while the slide is still
    /// running, `false` once it has finished or was cancelled.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        match self.state {
            SlideState::Finished | SlideState::Cancelled => false,
            SlideState::Running => {
                self.elapsed_ms += delta_ms;
                if self.elapsed_ms >= self.duration_ms {
                    self.state = SlideState::Finished;
                    false
                } else {
                    true
                }
            }
        }
    }

    /// Current visual offset of the child.
    pub fn current_offset(&self) -> Offset {
        match self.state {
            SlideState::Finished => Offset::ZERO,
            SlideState::Cancelled => self.from,
            SlideState::Running => {
                let eased = self.easing.evaluate(self.progress());
                self.from.interpolate(&Offset::ZERO, eased)
            }
        }
    }

    /// Linear progress from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        if self.duration_ms > 0.0 {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    pub fn cancel(&mut self) {
        if self.state == SlideState::Running {
            self.state = SlideState::Cancelled;
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == SlideState::Running
    }

    pub fn is_finished(&self) -> bool {
        self.state == SlideState::Finished
    }
}
