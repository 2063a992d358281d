//! Taffy-backed grid surface implementing the animator's host contract.
//!
//! The surface owns the real layout: a flex-wrap container of fixed-size
//! items. Filters and reorders change which items are visible and in what
//! order; `relayout` recomputes absolute rects. Transform overlays sit on
//! top of layout and never feed back into it, mirroring how a compositor
//! treats transforms.

use std::collections::HashMap;

use anyhow::{Context, Result};
use taffy::prelude::*;
use tracing::trace;

use glide_motion::{
    ChildId, ContainerId, Offset, Rect, SlideSpec, SlideTransition, TransitionHost,
};

use crate::item::GridItem;

/// A child's temporary visual decoration.
#[derive(Debug, Clone)]
enum Overlay {
    /// Static offset with no transition. The Invert state.
    Static(Offset),
    /// A running slide back to identity. The Play state.
    Slide(SlideTransition),
}

impl Overlay {
    fn current_offset(&self) -> Offset {
        match self {
            Self::Static(offset) => *offset,
            Self::Slide(slide) => slide.current_offset(),
        }
    }
}

/// A filterable flex-wrap grid of items.
pub struct GridSurface {
    container: ContainerId,
    container_width: f32,
    padding: f32,
    gap: f32,
    items: Vec<GridItem>,
    visible: Vec<ChildId>,
    rects: HashMap<ChildId, Rect>,
    overlays: HashMap<ChildId, Overlay>,
    layout_flushes: usize,
}

impl GridSurface {
    pub fn new(container_width: f32, padding: f32, gap: f32) -> Self {
        Self {
            container: ContainerId(1),
            container_width,
            padding,
            gap,
            items: Vec::new(),
            visible: Vec::new(),
            rects: HashMap::new(),
            overlays: HashMap::new(),
            layout_flushes: 0,
        }
    }

    pub fn container_id(&self) -> ContainerId {
        self.container
    }

    /// Add an item to the catalog and make it visible in catalog order.
    pub fn insert_item(&mut self, item: GridItem) {
        self.visible.push(item.id);
        self.items.push(item);
    }

    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    pub fn item(&self, id: ChildId) -> Option<&GridItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Currently visible children, in layout order.
    pub fn visible(&self) -> &[ChildId] {
        &self.visible
    }

    /// Ids of catalog items matching a predicate, in catalog order.
    pub fn matching<F>(&self, predicate: F) -> Vec<ChildId>
    where
        F: Fn(&GridItem) -> bool,
    {
        self.items
            .iter()
            .filter(|item| predicate(item))
            .map(|item| item.id)
            .collect()
    }

    /// Keep only items matching the predicate visible, then relayout. This
    /// is the surface's "reactive update".
    pub fn apply_filter<F>(&mut self, predicate: F) -> Result<()>
    where
        F: Fn(&GridItem) -> bool,
    {
        self.set_visible(self.matching(predicate))
    }

    /// Replace the visible set and order, then relayout. Unknown ids are
    /// dropped.
    pub fn set_visible(&mut self, order: Vec<ChildId>) -> Result<()> {
        self.visible = order
            .into_iter()
            .filter(|id| self.items.iter().any(|item| item.id == *id))
            .collect();
        self.relayout()
    }

    /// Recompute absolute rects for the visible items.
    pub fn relayout(&mut self) -> Result<()> {
        let mut tree: TaffyTree<()> = TaffyTree::new();

        let mut child_nodes = Vec::with_capacity(self.visible.len());
        for id in &self.visible {
            let item = self
                .items
                .iter()
                .find(|item| item.id == *id)
                .context("visible id missing from catalog")?;
            let node = tree
                .new_leaf(Style {
                    size: Size {
                        width: Dimension::Length(item.width),
                        height: Dimension::Length(item.height),
                    },
                    ..Default::default()
                })
                .context("failed to create item node")?;
            child_nodes.push(node);
        }

        let root = tree
            .new_with_children(
                Style {
                    display: Display::Flex,
                    flex_wrap: FlexWrap::Wrap,
                    gap: Size {
                        width: LengthPercentage::Length(self.gap),
                        height: LengthPercentage::Length(self.gap),
                    },
                    padding: taffy::Rect {
                        left: LengthPercentage::Length(self.padding),
                        right: LengthPercentage::Length(self.padding),
                        top: LengthPercentage::Length(self.padding),
                        bottom: LengthPercentage::Length(self.padding),
                    },
                    size: Size {
                        width: Dimension::Length(self.container_width),
                        height: Dimension::Auto,
                    },
                    ..Default::default()
                },
                &child_nodes,
            )
            .context("failed to create container node")?;

        tree.compute_layout(
            root,
            Size {
                width: AvailableSpace::Definite(self.container_width),
                height: AvailableSpace::MaxContent,
            },
        )
        .context("layout computation failed")?;

        let origin = tree.layout(root).context("missing container layout")?.location;
        self.rects.clear();
        for (id, node) in self.visible.iter().zip(&child_nodes) {
            let layout = tree.layout(*node).context("missing item layout")?;
            self.rects.insert(
                *id,
                Rect::new(
                    origin.x + layout.location.x,
                    origin.y + layout.location.y,
                    layout.size.width,
                    layout.size.height,
                ),
            );
        }
        trace!(visible = self.visible.len(), "grid relayout");
        Ok(())
    }

    /// Advance running slides by one frame. Returns the children whose
    /// slides reached identity this frame, in id order; the driver forwards
    /// these to the animator as end notifications.
    pub fn tick(&mut self, delta_ms: f32) -> Vec<ChildId> {
        let mut finished = Vec::new();
        for (id, overlay) in self.overlays.iter_mut() {
            if let Overlay::Slide(slide) = overlay {
                if slide.is_active() && !slide.update(delta_ms) {
                    finished.push(*id);
                }
            }
        }
        finished.sort();
        finished
    }

    /// Number of children currently carrying an overlay.
    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    pub fn has_overlay(&self, child: ChildId) -> bool {
        self.overlays.contains_key(&child)
    }

    /// Layout flushes the animator forced between Invert and Play.
    pub fn layout_flushes(&self) -> usize {
        self.layout_flushes
    }
}

impl TransitionHost for GridSurface {
    fn children(&self, container: ContainerId) -> Vec<ChildId> {
        if container == self.container {
            self.visible.clone()
        } else {
            Vec::new()
        }
    }

    fn child_rect(&self, child: ChildId) -> Option<Rect> {
        let rect = self.rects.get(&child)?;
        match self.overlays.get(&child) {
            Some(overlay) => Some(rect.translated(overlay.current_offset())),
            None => Some(*rect),
        }
    }

    fn set_offset(&mut self, child: ChildId, offset: Offset) {
        self.overlays.insert(child, Overlay::Static(offset));
    }

    fn flush_layout(&mut self) {
        // Headless surface; overlay writes take effect immediately. The
        // flush is still counted so the Invert/Play ordering is observable.
        self.layout_flushes += 1;
    }

    fn play(&mut self, child: ChildId, from: Offset, spec: &SlideSpec) {
        self.overlays
            .insert(child, Overlay::Slide(SlideTransition::new(child, from, spec)));
    }

    fn clear_overlay(&mut self, child: ChildId) {
        self.overlays.remove(&child);
    }
}

impl std::fmt::Debug for GridSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridSurface")
            .field("items", &self.items.len())
            .field("visible", &self.visible.len())
            .field("overlays", &self.overlays.len())
            .finish_non_exhaustive()
    }
}
