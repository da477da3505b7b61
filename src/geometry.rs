//! Box geometry rules: the draw rectangle and the quadrant split.
//!
//! Pure functions, no engine state. The engine calls these from its pointer
//! handlers so the rules can be tested in isolation.

use crate::constants::{SPLIT_CHILDREN, SPLIT_FACTOR};
use crate::ids::child_id;
use crate::types::CanvasBox;
use kurbo::{Point, Rect};

/// Rectangle spanned by a draw gesture from `anchor` to `current`.
///
/// The top-left corner is the component-wise minimum of the two points and
/// each side is the absolute delta floored at `min_size`. While the pointer
/// stays within `min_size` of the anchor the box sticks at the minimum.
pub fn draw_rect(anchor: Point, current: Point, min_size: f64) -> Rect {
    let span = Rect::from_points(anchor, current);
    let width = span.width().max(min_size);
    let height = span.height().max(min_size);
    Rect::from_origin_size(span.origin(), (width, height))
}

/// Whether `b` is large enough to produce four children of at least `min_size`.
#[inline]
pub fn can_split(b: &CanvasBox, min_size: f64) -> bool {
    let threshold = min_size * SPLIT_FACTOR;
    b.width > threshold && b.height > threshold
}

/// Four equal quadrants of `parent`, in reading order
/// (top-left, top-right, bottom-left, bottom-right).
///
/// Children inherit the parent's colour and get ids `"{parent}-1"` ..
/// `"{parent}-4"`. Does not check [`can_split`].
pub fn split_quadrants(parent: &CanvasBox) -> [CanvasBox; SPLIT_CHILDREN] {
    let hw = parent.width / 2.0;
    let hh = parent.height / 2.0;
    let (x, y) = (parent.x, parent.y);

    let quadrant = |index: usize, origin: Point| {
        CanvasBox::new(child_id(&parent.id, index), origin, hw, hh, parent.color.clone())
    };

    [
        quadrant(1, Point::new(x, y)),
        quadrant(2, Point::new(x + hw, y)),
        quadrant(3, Point::new(x, y + hh)),
        quadrant(4, Point::new(x + hw, y + hh)),
    ]
}

/// Smallest rect covering every box, or `None` for an empty slice.
pub fn bounding_rect(boxes: &[CanvasBox]) -> Option<Rect> {
    boxes
        .iter()
        .map(CanvasBox::rect)
        .reduce(|acc, r| acc.union(r))
}
