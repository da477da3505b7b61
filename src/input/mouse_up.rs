//! Pointer up handling - commit drawn boxes, end drags.

use crate::engine::{BoxEngine, IgnoreReason, Transition};
use crate::input::InputState;
use crate::profile_scope;
use tracing::debug;

impl BoxEngine {
    /// Pointer released.
    ///
    /// A Drawing candidate is clamped to the minimum size (it may never have
    /// moved) and appended to the collection. A drag just ends; the box stays
    /// where the last move put it.
    pub fn on_pointer_up(&mut self) -> Transition {
        profile_scope!("on_pointer_up");

        self.pointer.released();

        match self.input_state.take() {
            InputState::Idle => self.ignore("on_pointer_up", IgnoreReason::NoGesture),

            InputState::Drawing { mut candidate, .. } => {
                candidate.clamp_to_min(self.settings.min_box_size);
                let id = candidate.id.clone();

                debug!(
                    id = %id,
                    x = candidate.x,
                    y = candidate.y,
                    w = candidate.width,
                    h = candidate.height,
                    "Box committed"
                );
                self.boxes.push(candidate);
                self.reindex();
                debug_assert!(self.has_unique_ids(), "duplicate id after commit");

                Transition::BoxCommitted { id }
            }

            InputState::Dragging { box_id, moved, .. } => {
                if moved {
                    self.reindex();
                    self.last_dragged = Some(box_id.clone());
                }

                debug!(id = %box_id, moved, "Drag ended");
                Transition::DragEnded { id: box_id }
            }
        }
    }

    /// End the current gesture without a pointer up.
    ///
    /// For hosts that lose the pointer (window blur, pointer capture lost).
    /// A Drawing candidate is discarded; a dragged box stays where it is.
    /// The engine never calls this on its own.
    pub fn cancel_gesture(&mut self) -> Transition {
        self.pointer.released();

        match self.input_state.take() {
            InputState::Idle => self.ignore("cancel_gesture", IgnoreReason::NoGesture),
            InputState::Drawing { candidate, .. } => {
                if self.hovered.as_ref() == Some(&candidate.id) {
                    self.hovered = None;
                }
                debug!(id = %candidate.id, "Draw cancelled");
                Transition::GestureCancelled
            }
            InputState::Dragging { box_id, moved, .. } => {
                if moved {
                    self.reindex();
                }
                debug!(id = %box_id, "Drag cancelled");
                Transition::GestureCancelled
            }
        }
    }
}
