//! The seam between the animator and the platform surface.
//!
//! The animator owns no layout. It reads geometry from and lays transform
//! overlays onto a host through this trait, which makes the whole engine
//! testable by substitution.

use serde::{Deserialize, Serialize};

use crate::geometry::{Offset, Rect};
use crate::slide::SlideSpec;

/// Identifies the container element whose children are animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(pub u64);

/// Identifies one child of the container.
///
/// Identity must be stable across the host's re-render: a child that
/// conceptually persists through a filter or reorder must keep its id, or the
/// before/after rect pairing breaks. This is the host's keyed-reconciliation
/// contract; the animator depends on it but cannot verify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChildId(pub u64);

/// Host surface the animator measures and decorates.
///
/// Read methods take `&self`; the animator's First capture performs only
/// reads. Overlay methods take `&mut self` and must be cheap: an overlay is a
/// visual decoration, never a layout input.
pub trait TransitionHost {
    /// Current direct children of the container, in layout order.
    fn children(&self, container: ContainerId) -> Vec<ChildId>;

    /// Bounding rect of a child, overlay-inclusive (a mid-slide child
    /// measures where it currently appears). `None` if the child is gone.
    fn child_rect(&self, child: ChildId) -> Option<Rect>;

    /// Apply a static offset overlay with no transition. The Invert step.
    fn set_offset(&mut self, child: ChildId, offset: Offset);

    /// Commit pending overlay writes before any transition starts. The
    /// animator calls this exactly once between Invert and Play.
    fn flush_layout(&mut self);

    /// Replace a child's overlay with a transition from `from` to identity.
    /// The Play step. The host runs the slide and reports its natural end.
    fn play(&mut self, child: ChildId, from: Offset, spec: &SlideSpec);

    /// Remove whatever overlay the child carries, returning it to pure
    /// layout-driven positioning.
    fn clear_overlay(&mut self, child: ChildId);
}
