//! Headless platform surface for the glide animator.
//!
//! `GridSurface` lays out a filterable item grid with taffy and stands in
//! for the platform's rendering system: it owns the layout tree, applies
//! filters and reorders, runs the slide transitions the animator schedules,
//! and reports their natural ends. `FrameDriver` wires a surface and an
//! animator together into the explicit frame loop a host application runs.

pub mod driver;
pub mod grid;
pub mod item;


pub use driver::{CycleReport, FrameDriver};
pub use grid::GridSurface;
pub use item::GridItem;
