//! Pointer tracker - last known pointer position and primary-button state.

use kurbo::Point;

/// Latest pointer coordinate on the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    position: Point,
    primary_pressed: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn is_primary_pressed(&self) -> bool {
        self.primary_pressed
    }

    /// Record a move. Coordinates are taken as-is.
    #[inline]
    pub fn moved_to(&mut self, position: Point) {
        self.position = position;
    }

    pub fn pressed_at(&mut self, position: Point, primary: bool) {
        self.position = position;
        if primary {
            self.primary_pressed = true;
        }
    }

    pub fn released(&mut self) {
        self.primary_pressed = false;
    }
}
