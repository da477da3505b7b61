//! Core types for the splitboard engine.
//!
//! This module defines the box model, pointer buttons and the derived cursor
//! mode handed to the presentation layer.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Box Identity
// ============================================================================

/// Stable identifier of a box.
///
/// Root ids come from an [`IdGenerator`](crate::ids::IdGenerator); split
/// children append a positional suffix to their parent's id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxId(String);

impl BoxId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BoxId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BoxId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ============================================================================
// Canvas Box
// ============================================================================

/// A rectangular region on the surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasBox {
    /// Unique identifier, stable for the box's lifetime
    pub id: BoxId,
    /// Left edge in surface coordinates
    pub x: f64,
    /// Top edge in surface coordinates
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Palette colour name, inherited by split children
    pub color: String,
}

impl CanvasBox {
    pub fn new(id: BoxId, origin: Point, width: f64, height: f64, color: impl Into<String>) -> Self {
        Self {
            id,
            x: origin.x,
            y: origin.y,
            width,
            height,
            color: color.into(),
        }
    }

    /// Top-left corner
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the top-left corner, keeping the size
    #[inline]
    pub fn set_origin(&mut self, origin: Point) {
        self.x = origin.x;
        self.y = origin.y;
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Inclusive containment test on all four edges
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Raise width and height to at least `min_size`
    pub fn clamp_to_min(&mut self, min_size: f64) {
        self.width = self.width.max(min_size);
        self.height = self.height.max(min_size);
    }
}

// ============================================================================
// Pointer Buttons
// ============================================================================

/// Pointer button reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    #[default]
    Primary,
    Middle,
    Secondary,
    Other(u16),
}

impl MouseButton {
    /// Map a DOM-style button index (0 = primary, 1 = middle, 2 = secondary)
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }

    #[inline]
    pub fn is_primary(self) -> bool {
        matches!(self, Self::Primary)
    }
}

// ============================================================================
// Cursor Mode
// ============================================================================

/// Icon the presentation layer shows at the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorMode {
    /// Open hand: nothing hovered, no gesture
    #[default]
    Idle,
    /// Pointing hand: drawing or dragging
    Pointing,
    /// Plus sign: hovering a box that a click may split
    Add,
}
