//! Input state machine - the single source of truth for the active gesture.
//!
//! One enum instead of separate "drawing box" and "dragged box id" fields, so
//! a simultaneous draw and drag cannot be represented.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Drawing     (pointer down on empty surface)
//! Idle -> Dragging    (primary pointer down on a committed box)
//!
//! Drawing  -> Idle    (pointer up - candidate committed)
//! Dragging -> Idle    (pointer up)
//! Any      -> Idle    (explicit cancel)
//! ```

use crate::types::{BoxId, CanvasBox};
use kurbo::{Point, Vec2};

/// Active gesture, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress
    #[default]
    Idle,

    /// Sizing a new box
    Drawing {
        /// Where the pointer went down; fixed for the whole gesture
        anchor: Point,
        /// Candidate box; not in the committed collection yet
        candidate: CanvasBox,
    },

    /// Repositioning a committed box
    Dragging {
        box_id: BoxId,
        /// Pointer position minus box origin at drag start
        drag_offset: Vec2,
        /// Whether any move actually repositioned the box
        moved: bool,
    },
}

impl InputState {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Drawing or dragging
    #[inline]
    pub fn is_gesture_active(&self) -> bool {
        !self.is_idle()
    }

    pub fn candidate(&self) -> Option<&CanvasBox> {
        match self {
            Self::Drawing { candidate, .. } => Some(candidate),
            _ => None,
        }
    }

    pub fn anchor(&self) -> Option<Point> {
        match self {
            Self::Drawing { anchor, .. } => Some(*anchor),
            _ => None,
        }
    }

    pub fn dragged_box_id(&self) -> Option<&BoxId> {
        match self {
            Self::Dragging { box_id, .. } => Some(box_id),
            _ => None,
        }
    }

    pub fn drag_offset(&self) -> Option<Vec2> {
        match self {
            Self::Dragging { drag_offset, .. } => Some(*drag_offset),
            _ => None,
        }
    }

    pub fn start_drawing(&mut self, anchor: Point, candidate: CanvasBox) {
        *self = Self::Drawing { anchor, candidate };
    }

    pub fn start_dragging(&mut self, box_id: BoxId, drag_offset: Vec2) {
        *self = Self::Dragging {
            box_id,
            drag_offset,
            moved: false,
        };
    }

    /// Reset to Idle, returning the previous state
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
