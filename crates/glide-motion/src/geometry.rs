//! Geometry primitives for position capture and delta computation.
//!
//! Rectangles are absolute, in surface coordinates, as reported by the host's
//! layout engine. Deltas are plain pixel differences between two rect reads.

use serde::{Deserialize, Serialize};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle (position and size).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// This rect shifted by an offset. Size is unchanged.
    pub fn translated(&self, offset: Offset) -> Self {
        Self {
            x: self.x + offset.dx,
            y: self.y + offset.dy,
            ..*self
        }
    }
}

/// A translation delta between two rect reads.
///
/// Only the top-left corner participates; size changes do not contribute to
/// the delta.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// The offset that visually moves a child laid out at `new` back to where
    /// `old` was. This is the inverted transform of a FLIP cycle.
    pub fn between(old: &Rect, new: &Rect) -> Self {
        Self {
            dx: old.x - new.x,
            dy: old.y - new.y,
        }
    }

    /// True when both components are exactly zero. Children with a zero delta
    /// are never touched.
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_between_rects() {
        let old = Rect::new(10.0, 10.0, 100.0, 30.0);
        let new = Rect::new(120.0, 10.0, 100.0, 30.0);

        let offset = Offset::between(&old, &new);
        assert_eq!(offset, Offset::new(-110.0, 0.0));

        let back = Offset::between(&new, &old);
        assert_eq!(back, Offset::new(110.0, 0.0));
    }

    #[test]
    fn test_offset_ignores_size() {
        let old = Rect::new(10.0, 10.0, 100.0, 30.0);
        let new = Rect::new(10.0, 10.0, 200.0, 60.0);

        assert!(Offset::between(&old, &new).is_zero());
    }

    #[test]
    fn test_zero_offset() {
        assert!(Offset::ZERO.is_zero());
        assert!(!Offset::new(0.1, 0.0).is_zero());
        assert!(!Offset::new(0.0, -0.1).is_zero());
    }

    #[test]
    fn test_translated() {
        let rect = Rect::new(120.0, 10.0, 100.0, 30.0);
        let moved = rect.translated(Offset::new(-110.0, 5.0));

        assert_eq!(moved, Rect::new(10.0, 15.0, 100.0, 30.0));
    }
}
