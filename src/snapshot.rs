//! Read-only render snapshot handed to the presentation layer.

use crate::types::{CanvasBox, CursorMode};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// State of the surface after the latest event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    /// Committed boxes in render order
    pub boxes: Vec<CanvasBox>,
    /// Drawing candidate, drawn after the committed boxes
    pub in_progress: Option<CanvasBox>,
    pub cursor_mode: CursorMode,
    /// Pointer position, for the crosshair and cursor icon
    pub pointer: Point,
}

impl RenderSnapshot {
    /// Boxes in paint order: committed first, then the candidate.
    pub fn render_list(&self) -> impl Iterator<Item = &CanvasBox> {
        self.boxes.iter().chain(self.in_progress.iter())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
