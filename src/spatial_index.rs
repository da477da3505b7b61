//! Spatial Index Module
//!
//! R-tree over committed boxes for hit testing a surface press. Hosts that do
//! their own element hit testing never need it; hosts that only see raw
//! surface coordinates use it to tell "box" from "empty surface".

use crate::types::{BoxId, CanvasBox};
use rstar::{AABB, RTree, RTreeObject};

/// A box's bounding rectangle plus its render-order position.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub box_id: BoxId,
    /// Index in the render order; higher draws on top
    pub order: usize,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn new(order: usize, b: &CanvasBox) -> Self {
        Self {
            box_id: b.id.clone(),
            order,
            min_x: b.x,
            min_y: b.y,
            max_x: b.x + b.width,
            max_y: b.y + b.height,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

/// Spatial index for committed boxes.
///
/// Rebuilt in bulk after any change to the collection.
#[derive(Debug)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Replace the indexed entries with `boxes`, taken in render order.
    pub fn rebuild(&mut self, boxes: &[CanvasBox]) {
        let entries: Vec<SpatialEntry> = boxes
            .iter()
            .enumerate()
            .map(|(order, b)| SpatialEntry::new(order, b))
            .collect();

        self.tree = RTree::bulk_load(entries);
    }

    /// The box drawn on top at the point: highest render order wins.
    pub fn topmost_at(&self, x: f64, y: f64) -> Option<BoxId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .max_by_key(|entry| entry.order)
            .map(|entry| entry.box_id.clone())
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
