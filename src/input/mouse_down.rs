//! Pointer down handling - draw start on empty surface, drag start on a box.

use crate::engine::{BoxEngine, IgnoreReason, Transition};
use crate::profile_scope;
use crate::types::{BoxId, CanvasBox, MouseButton};
use kurbo::Point;
use tracing::debug;

impl BoxEngine {
    /// Surface-level pointer down.
    ///
    /// `target_is_box` tells whether the press landed on a box element; if so
    /// the box handler ([`Self::on_box_pointer_down`]) owns the event and
    /// this call does nothing.
    pub fn on_pointer_down(&mut self, point: Point, target_is_box: bool) -> Transition {
        profile_scope!("on_pointer_down");

        self.pointer.pressed_at(point, true);

        if target_is_box {
            return self.ignore("on_pointer_down", IgnoreReason::TargetIsBox);
        }
        if self.input_state.is_gesture_active() {
            return self.ignore("on_pointer_down", IgnoreReason::GestureActive);
        }

        self.last_dragged = None;

        let id = self.ids.next_id();
        let color = self.colors.pick(&self.settings.palette, &id);
        let candidate = CanvasBox::new(id.clone(), point, 0.0, 0.0, color);
        self.input_state.start_drawing(point, candidate);

        debug!(id = %id, x = point.x, y = point.y, "Draw started");
        Transition::DrawStarted { id }
    }

    /// Pointer down on a committed box: start dragging it.
    ///
    /// Only the primary button drags. The drag offset is the press point
    /// minus the box origin and stays fixed for the whole gesture.
    pub fn on_box_pointer_down(&mut self, box_id: &BoxId, point: Point, button: MouseButton) -> Transition {
        profile_scope!("on_box_pointer_down");

        self.pointer.pressed_at(point, button.is_primary());

        if !button.is_primary() {
            return self.ignore("on_box_pointer_down", IgnoreReason::NotPrimaryButton);
        }
        if self.input_state.is_gesture_active() {
            return self.ignore("on_box_pointer_down", IgnoreReason::GestureActive);
        }
        let Some(origin) = self.get_box(box_id).map(CanvasBox::origin) else {
            return self.ignore("on_box_pointer_down", IgnoreReason::UnknownBox);
        };

        self.last_dragged = None;

        let drag_offset = point - origin;
        self.input_state.start_dragging(box_id.clone(), drag_offset);

        debug!(id = %box_id, dx = drag_offset.x, dy = drag_offset.y, "Drag started");
        Transition::DragStarted { id: box_id.clone() }
    }

    /// Pointer down reported only as surface coordinates.
    ///
    /// Hit-tests committed boxes (topmost in render order wins) and routes to
    /// [`Self::on_box_pointer_down`] or to [`Self::on_pointer_down`] for
    /// empty surface. For hosts without element-level events.
    pub fn press_at(&mut self, point: Point, button: MouseButton) -> Transition {
        match self.box_at(point) {
            Some(id) => self.on_box_pointer_down(&id, point, button),
            None => self.on_pointer_down(point, false),
        }
    }
}
