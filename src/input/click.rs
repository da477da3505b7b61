//! Box click handling - quadrant split.

use crate::engine::{BoxEngine, IgnoreReason, Transition};
use crate::geometry::{can_split, split_quadrants};
use crate::profile_scope;
use crate::types::BoxId;
use tracing::debug;

impl BoxEngine {
    /// Click on a committed box: split it into four quadrants.
    ///
    /// Refused unless both sides are strictly larger than twice the minimum
    /// size. The children take the parent's place in render order. A click
    /// that follows a drag release is split like any other click unless
    /// `suppress_click_after_drag` is set and the drag moved this box.
    pub fn on_box_click(&mut self, box_id: &BoxId) -> Transition {
        profile_scope!("on_box_click");

        let after_drag = self.last_dragged.take();
        if self.settings.suppress_click_after_drag && after_drag.as_ref() == Some(box_id) {
            return self.ignore("on_box_click", IgnoreReason::ClickAfterDrag);
        }
        if self.input_state.dragged_box_id() == Some(box_id) {
            return self.ignore("on_box_click", IgnoreReason::BoxInGesture);
        }
        let Some(pos) = self.position_of(box_id) else {
            return self.ignore("on_box_click", IgnoreReason::UnknownBox);
        };

        let parent = &self.boxes[pos];
        if !can_split(parent, self.settings.min_box_size) {
            return self.ignore("on_box_click", IgnoreReason::TooSmallToSplit);
        }

        let children = split_quadrants(parent);
        let child_ids = children.each_ref().map(|c| c.id.clone());
        self.boxes.splice(pos..=pos, children);
        self.reindex();
        debug_assert!(self.has_unique_ids(), "duplicate id after split");

        if self.hovered.as_ref() == Some(box_id) {
            let at = self.pointer.position();
            self.hovered = self
                .index
                .topmost_at(at.x, at.y)
                .filter(|id| child_ids.contains(id));
        }

        debug!(parent = %box_id, index = pos, "Box split");
        Transition::BoxSplit {
            parent: box_id.clone(),
            children: child_ids,
        }
    }
}
