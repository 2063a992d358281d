//! Grid items: the content the surface lays out and filters.

use serde::{Deserialize, Serialize};

use glide_motion::ChildId;

/// One item in the grid.
///
/// The id doubles as the child id the animator tracks, so an item that
/// survives a filter keeps its identity across re-layouts. That stability is
/// what lets before/after rects pair up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridItem {
    pub id: ChildId,
    pub width: f32,
    pub height: f32,
    /// Free-form tags the demo filters on.
    pub tags: Vec<String>,
}

impl GridItem {
    pub fn new(id: ChildId, width: f32, height: f32) -> Self {
        Self {
            id,
            width,
            height,
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
