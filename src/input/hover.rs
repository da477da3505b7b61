//! Box hover tracking. Drives the cursor mode only; no geometry effect.

use crate::engine::{BoxEngine, IgnoreReason, Transition};
use crate::types::BoxId;
use tracing::trace;

impl BoxEngine {
    /// Pointer entered a box element (committed box or the candidate).
    pub fn on_box_hover_enter(&mut self, box_id: &BoxId) -> Transition {
        let known = self.position_of(box_id).is_some()
            || self.in_progress().is_some_and(|c| &c.id == box_id);
        if !known {
            return self.ignore("on_box_hover_enter", IgnoreReason::UnknownBox);
        }

        self.hovered = Some(box_id.clone());
        trace!(id = %box_id, "Hover enter");
        Transition::HoverChanged {
            hovered: self.hovered.clone(),
        }
    }

    /// Pointer left a box element. Clears the hover only if it is this box,
    /// so a late leave from a neighbour does not erase a newer enter.
    pub fn on_box_hover_leave(&mut self, box_id: &BoxId) -> Transition {
        if self.hovered.as_ref() != Some(box_id) {
            return self.ignore("on_box_hover_leave", IgnoreReason::NotHovered);
        }

        self.hovered = None;
        trace!(id = %box_id, "Hover leave");
        Transition::HoverChanged { hovered: None }
    }
}
