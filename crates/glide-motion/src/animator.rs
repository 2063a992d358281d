//! The FLIP layout animator.
//!
//! Given a container whose children are about to be filtered or reordered by
//! the host's re-render, the animator captures each child's rect before the
//! change (First), waits for the host to flush the update, captures the new
//! rects (Last), overlays each surviving child with the inverted delta
//! (Invert), and schedules a slide back to identity (Play). The move reads as
//! a continuous slide instead of a jump cut.
//!
//! The animator is error-avoidant by construction: every precondition failure
//! is a silent no-op, because a failed animation attempt must never block or
//! break the underlying filter or reorder it decorates. At most one cycle
//! runs at a time; a request arriving mid-cycle is dropped, not queued.
//!
//! # Driving the animator
//!
//! ```ignore
//! let mut animator = LayoutAnimator::new(SlideSpec::default(), SystemPreference::new());
//! animator.bind_container(surface.container_id());
//!
//! // Caller is about to apply a filter:
//! animator.animate_filter(&new_items, &surface);   // First capture
//! surface.apply_filter(...);                       // the reactive update
//! animator.on_render_complete(&mut surface);       // Last, Invert, Play
//!
//! // Each frame until is_animating() clears:
//! for child in surface.tick(delta_ms) {
//!     animator.on_transition_end(child, &mut surface);
//! }
//! animator.advance(delta_ms, &mut surface);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use static_assertions::assert_impl_all;
use tracing::{debug, trace};

use crate::events::{ChildEvent, CompletionKind, CycleEvent, EventQueue, MotionEvent, SkipReason};
use crate::geometry::{Offset, Rect};
use crate::host::{ChildId, ContainerId, TransitionHost};
use crate::preference::MotionPreferenceSource;
use crate::slide::SlideSpec;

/// Unique identifier for one animation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CycleId(pub u64);

impl CycleId {
    /// Generate a new unique cycle ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for CycleId {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-child completion clock while a cycle plays.
#[derive(Debug, Clone, Copy)]
struct FallbackClock {
    elapsed_ms: f32,
    deadline_ms: f32,
}

impl FallbackClock {
    fn is_due(&self) -> bool {
        self.elapsed_ms >= self.deadline_ms
    }
}

/// Where the animator is in its cycle.
#[derive(Debug)]
enum CyclePhase {
    Idle,
    /// First rects captured; waiting for the host's render flush.
    AwaitingRender {
        cycle_id: CycleId,
        first: HashMap<ChildId, Rect>,
    },
    /// Slides scheduled; waiting for every pending child to settle.
    Playing {
        cycle_id: CycleId,
        pending: HashMap<ChildId, FallbackClock>,
    },
}

/// FLIP animator for one container.
pub struct LayoutAnimator {
    container: Option<ContainerId>,
    spec: SlideSpec,
    preference: Box<dyn MotionPreferenceSource + Send>,
    phase: CyclePhase,
    events: EventQueue,
}

assert_impl_all!(LayoutAnimator: Send);

impl LayoutAnimator {
    pub fn new(spec: SlideSpec, preference: impl MotionPreferenceSource + Send + 'static) -> Self {
        Self {
            container: None,
            spec,
            preference: Box::new(preference),
            phase: CyclePhase::Idle,
            events: EventQueue::new(),
        }
    }

    /// Bind the container whose children are animated. The caller sets this
    /// once the container exists; until then every request is a no-op.
    pub fn bind_container(&mut self, container: ContainerId) {
        self.container = Some(container);
    }

    pub fn container(&self) -> Option<ContainerId> {
        self.container
    }

    pub fn spec(&self) -> &SlideSpec {
        &self.spec
    }

    /// True exactly while a cycle is in its Play phase. Callers may use this
    /// to gate interaction during the transition.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, CyclePhase::Playing { .. })
    }

    /// Remove and return all queued lifecycle events, oldest first.
    pub fn drain_events(&mut self) -> Vec<MotionEvent> {
        self.events.drain()
    }

    /// Begin an animation cycle for an imminent re-render.
    ///
    /// `items` is the caller's reactive trigger value; the animator never
    /// inspects it. Positioning comes entirely from the live host, read now
    /// (First) and again after [`on_render_complete`](Self::on_render_complete)
    /// (Last).
    ///
    /// Returns `None` on any early exit: reduced motion, no container bound,
    /// a cycle already in flight, or an empty container. Each is a silent
    /// no-op with no geometry reads beyond the checks themselves.
    pub fn animate_filter<T, H: TransitionHost>(
        &mut self,
        items: &[T],
        host: &H,
    ) -> Option<CycleId> {
        if self.preference.preference().is_reduce() {
            return self.skip(SkipReason::ReducedMotion);
        }
        let Some(container) = self.container else {
            return self.skip(SkipReason::NoContainer);
        };
        if !matches!(self.phase, CyclePhase::Idle) {
            return self.skip(SkipReason::CycleInFlight);
        }
        let children = host.children(container);
        if children.is_empty() {
            return self.skip(SkipReason::NoChildren);
        }

        let mut first = HashMap::with_capacity(children.len());
        for child in children {
            if let Some(rect) = host.child_rect(child) {
                first.insert(child, rect);
            }
        }

        let cycle_id = CycleId::new();
        trace!(
            cycle = cycle_id.0,
            items = items.len(),
            captured = first.len(),
            "first snapshot taken"
        );
        self.phase = CyclePhase::AwaitingRender { cycle_id, first };
        Some(cycle_id)
    }

    /// The render-tick suspension point. The host calls this once the
    /// reactive update has been flushed to its layout tree; the animator
    /// captures Last rects, inverts the survivors, and schedules their
    /// slides. A call outside an awaiting cycle is a no-op.
    pub fn on_render_complete<H: TransitionHost>(&mut self, host: &mut H) {
        let (cycle_id, first) = match std::mem::replace(&mut self.phase, CyclePhase::Idle) {
            CyclePhase::AwaitingRender { cycle_id, first } => (cycle_id, first),
            other => {
                self.phase = other;
                return;
            }
        };
        // Container was present when the cycle opened.
        let Some(container) = self.container else {
            return;
        };

        let children = host.children(container);
        if children.is_empty() {
            debug!(cycle = cycle_id.0, "container emptied by update, aborting");
            self.events.push_cycle(CycleEvent::Skipped {
                reason: SkipReason::EmptyAfterUpdate,
            });
            return;
        }

        // Last: pair each surviving child's new rect with its old one. A
        // child with no old rect is new; it renders directly in place. A
        // child with a zero delta never gets touched.
        let mut moved: Vec<(ChildId, Offset)> = Vec::new();
        for child in children {
            let Some(new_rect) = host.child_rect(child) else {
                continue;
            };
            let Some(old_rect) = first.get(&child) else {
                trace!(cycle = cycle_id.0, child = child.0, "new child, not animated");
                continue;
            };
            let offset = Offset::between(old_rect, &new_rect);
            if offset.is_zero() {
                continue;
            }
            moved.push((child, offset));
        }

        // Invert all movers, then commit the overlays in one flush so the
        // slides that follow are observed as transitions from the old
        // positions rather than being coalesced away.
        for (child, offset) in &moved {
            host.set_offset(*child, *offset);
        }
        if !moved.is_empty() {
            host.flush_layout();
        }

        self.events.push_cycle(CycleEvent::Started {
            cycle_id,
            animated: moved.len(),
        });

        let mut pending = HashMap::with_capacity(moved.len());
        for (child, offset) in moved {
            host.play(child, offset, &self.spec);
            pending.insert(
                child,
                FallbackClock {
                    elapsed_ms: 0.0,
                    deadline_ms: self.spec.fallback_deadline_ms(),
                },
            );
            self.events.push_child(ChildEvent::Played {
                cycle_id,
                child,
                dx: offset.dx,
                dy: offset.dy,
            });
        }

        if pending.is_empty() {
            debug!(cycle = cycle_id.0, "no child moved, cycle settles at once");
            self.events.push_cycle(CycleEvent::Ended { cycle_id });
        } else {
            debug!(cycle = cycle_id.0, animated = pending.len(), "cycle playing");
            self.phase = CyclePhase::Playing { cycle_id, pending };
        }
    }

    /// Natural completion path: the host reports that a child's slide
    /// reached identity. Unknown children are ignored.
    pub fn on_transition_end<H: TransitionHost>(&mut self, child: ChildId, host: &mut H) {
        let CyclePhase::Playing { cycle_id, pending } = &mut self.phase else {
            return;
        };
        if pending.remove(&child).is_none() {
            return;
        }
        let cycle_id = *cycle_id;
        host.clear_overlay(child);
        self.events.push_child(ChildEvent::Completed {
            cycle_id,
            child,
            how: CompletionKind::EndNotification,
        });
        self.finish_if_settled(cycle_id);
    }

    /// Advance the per-child fallback clocks. Children whose end
    /// notification never arrives are forced to complete once their deadline
    /// elapses, so a cycle's total wait is bounded by duration plus margin.
    pub fn advance<H: TransitionHost>(&mut self, delta_ms: f32, host: &mut H) {
        let CyclePhase::Playing { cycle_id, pending } = &mut self.phase else {
            return;
        };
        let cycle_id = *cycle_id;

        let mut due = Vec::new();
        for (child, clock) in pending.iter_mut() {
            clock.elapsed_ms += delta_ms;
            if clock.is_due() {
                due.push(*child);
            }
        }
        due.sort();

        for child in due {
            pending.remove(&child);
            host.clear_overlay(child);
            trace!(cycle = cycle_id.0, child = child.0, "fallback completion");
            self.events.push_child(ChildEvent::Completed {
                cycle_id,
                child,
                how: CompletionKind::FallbackTimer,
            });
        }
        self.finish_if_settled(cycle_id);
    }

    fn finish_if_settled(&mut self, cycle_id: CycleId) {
        if let CyclePhase::Playing { pending, .. } = &self.phase {
            if pending.is_empty() {
                debug!(cycle = cycle_id.0, "cycle settled");
                self.phase = CyclePhase::Idle;
                self.events.push_cycle(CycleEvent::Ended { cycle_id });
            }
        }
    }

    fn skip(&mut self, reason: SkipReason) -> Option<CycleId> {
        debug!(?reason, "animate_filter skipped");
        self.events.push_cycle(CycleEvent::Skipped { reason });
        None
    }
}

impl std::fmt::Debug for LayoutAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutAnimator")
            .field("container", &self.container)
            .field("spec", &self.spec)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
