//! FLIP-style layout transitions for filtered and reordered item grids.
//!
//! This crate provides:
//! - **Layout animator**: measures child positions before and after a layout
//!   change and slides surviving children from old to new position
//! - **Slide transitions**: per-child offset-to-identity interpolation with
//!   a fallback completion deadline
//! - **Easing functions**: standard CSS timing curves
//! - **Motion preference**: an injected reduced-motion signal
//!
//! # Architecture
//!
//! ```text
//! LayoutAnimator
//!   ├── First snapshot (pre-update child rects, keyed by child id)
//!   ├── Last snapshot + delta computation (post-update)
//!   └── Pending completions (end notification or fallback timer)
//!
//! TransitionHost (implemented by the platform surface)
//!   ├── children / child_rect  (geometry reads)
//!   └── set_offset / play / clear_overlay  (transform overlays)
//! ```
//!
//! The animator never mutates the layout itself. The host's rendering system
//! reorders and filters children; the animator only reads geometry and lays
//! temporary transform overlays over the surviving children.

pub mod animator;
pub mod easing;
pub mod events;
pub mod geometry;
pub mod host;
pub mod interpolate;
pub mod preference;
pub mod slide;

pub use animator::{CycleId, LayoutAnimator};
pub use easing::EasingFunction;
pub use events::{ChildEvent, CompletionKind, CycleEvent, EventQueue, MotionEvent, SkipReason};
pub use geometry::{Offset, Point, Rect};
pub use host::{ChildId, ContainerId, TransitionHost};
pub use interpolate::Interpolate;
pub use preference::{FixedPreference, MotionPreference, MotionPreferenceSource, SystemPreference};
pub use slide::{SlideSpec, SlideState, SlideTransition};
