//! Frame loop wiring an animator to a grid surface.
//!
//! A real host application owns both halves and pumps frames itself; the
//! driver packages that loop for the demo binary and for end-to-end tests.
//! One `run_update` call performs a complete filter-and-animate cycle:
//! trigger, reactive update, render flush, then frames until the cycle
//! settles.

use anyhow::Result;
use tracing::debug;

use glide_motion::{ChildId, CycleId, LayoutAnimator, MotionEvent, SkipReason};

use crate::grid::GridSurface;
use crate::item::GridItem;

/// Default frame delta, roughly 60fps.
const FRAME_MS: f32 = 16.67;

/// What one driven cycle did.
#[derive(Debug)]
pub struct CycleReport {
    /// The cycle that ran, or `None` if the request short-circuited.
    pub cycle: Option<CycleId>,
    /// Frames pumped before the animator settled.
    pub frames: usize,
    /// Every lifecycle event drained after settling.
    pub events: Vec<MotionEvent>,
}

impl CycleReport {
    /// True when a cycle ran and emitted its end event.
    pub fn completed(&self) -> bool {
        self.events.iter().any(MotionEvent::is_cycle_end)
    }

    /// The first skip reason, if the request short-circuited.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        self.events.iter().find_map(MotionEvent::skip_reason)
    }
}

/// Owns an animator and a surface and pumps frames between them.
#[derive(Debug)]
pub struct FrameDriver {
    animator: LayoutAnimator,
    surface: GridSurface,
    frame_ms: f32,
    max_frames: usize,
    forward_end_notifications: bool,
}

impl FrameDriver {
    pub fn new(animator: LayoutAnimator, surface: GridSurface) -> Self {
        Self {
            animator,
            surface,
            frame_ms: FRAME_MS,
            max_frames: 600,
            forward_end_notifications: true,
        }
    }

    pub fn with_frame_ms(mut self, frame_ms: f32) -> Self {
        self.frame_ms = frame_ms;
        self
    }

    /// Stop forwarding the surface's natural end notifications, leaving
    /// completion entirely to the fallback timers.
    pub fn without_end_notifications(mut self) -> Self {
        self.forward_end_notifications = false;
        self
    }

    pub fn animator(&self) -> &LayoutAnimator {
        &self.animator
    }

    pub fn surface(&self) -> &GridSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut GridSurface {
        &mut self.surface
    }

    /// Filter the grid by predicate, animating survivors into place.
    pub fn run_filter<F>(&mut self, predicate: F) -> Result<CycleReport>
    where
        F: Fn(&GridItem) -> bool,
    {
        let order = self.surface.matching(predicate);
        self.run_update(order)
    }

    /// Show exactly `order`, animating survivors into place.
    ///
    /// The underlying update always runs; whether the animator declined to
    /// decorate it is visible in the report, never an error.
    pub fn run_update(&mut self, order: Vec<ChildId>) -> Result<CycleReport> {
        let cycle = self.animator.animate_filter(&order, &self.surface);
        self.surface.set_visible(order)?;
        self.animator.on_render_complete(&mut self.surface);

        let mut frames = 0;
        while self.animator.is_animating() && frames < self.max_frames {
            let finished = self.surface.tick(self.frame_ms);
            if self.forward_end_notifications {
                for child in finished {
                    self.animator.on_transition_end(child, &mut self.surface);
                }
            }
            self.animator.advance(self.frame_ms, &mut self.surface);
            frames += 1;
        }

        let events = self.animator.drain_events();
        debug!(?cycle, frames, events = events.len(), "cycle settled");
        Ok(CycleReport {
            cycle,
            frames,
            events,
        })
    }
}
