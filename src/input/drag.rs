//! Pointer move handling - candidate resize and box drag.
//!
//! Moves arrive far more often than any other event. Idle moves only touch
//! the pointer tracker; draw and drag each update exactly one box.

use crate::engine::{BoxEngine, Transition};
use crate::geometry::draw_rect;
use crate::input::InputState;
use crate::profile_scope;
use kurbo::Point;
use tracing::trace;

impl BoxEngine {
    /// Pointer moved anywhere on the surface.
    pub fn on_pointer_move(&mut self, point: Point) -> Transition {
        profile_scope!("on_pointer_move");

        self.pointer.moved_to(point);
        let min_size = self.settings.min_box_size;

        match &mut self.input_state {
            InputState::Idle => Transition::PointerMoved,

            InputState::Drawing { anchor, candidate } => {
                let rect = draw_rect(*anchor, point, min_size);
                candidate.set_origin(rect.origin());
                candidate.width = rect.width();
                candidate.height = rect.height();

                trace!(id = %candidate.id, w = candidate.width, h = candidate.height, "Candidate resized");
                Transition::CandidateResized {
                    id: candidate.id.clone(),
                }
            }

            InputState::Dragging {
                box_id,
                drag_offset,
                moved,
            } => {
                let Some(dragged) = self.boxes.iter_mut().find(|b| &b.id == box_id) else {
                    return Transition::PointerMoved;
                };

                let origin = point - *drag_offset;
                if dragged.origin() != origin {
                    dragged.set_origin(origin);
                    *moved = true;
                }

                trace!(id = %box_id, x = origin.x, y = origin.y, "Box moved");
                Transition::BoxMoved { id: box_id.clone() }
            }
        }
    }
}
