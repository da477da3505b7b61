//! Scripted event replay.
//!
//! A replay script is a JSON array of pointer events in delivery order. It
//! drives a [`BoxEngine`] exactly as a host would, which makes it handy for
//! reproducing a session and for headless demos.
//!
//! ```json
//! [
//!   {"type": "pointer_down", "x": 100, "y": 100},
//!   {"type": "pointer_move", "x": 300, "y": 260},
//!   {"type": "pointer_up"},
//!   {"type": "box_click", "id": "1"}
//! ]
//! ```

use crate::engine::{BoxEngine, Transition};
use crate::error::{ReplayError, ReplayResult};
use crate::types::{BoxId, MouseButton};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// One recorded host event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        target_is_box: bool,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    BoxPointerDown {
        id: BoxId,
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    BoxClick {
        id: BoxId,
    },
    HoverEnter {
        id: BoxId,
    },
    HoverLeave {
        id: BoxId,
    },
    /// Surface press resolved by the engine's own hit test
    PressAt {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    Cancel,
}

impl ScriptEvent {
    /// Deliver this event to `engine`.
    pub fn apply(&self, engine: &mut BoxEngine) -> Transition {
        match self {
            Self::PointerDown { x, y, target_is_box } => {
                engine.on_pointer_down(Point::new(*x, *y), *target_is_box)
            }
            Self::PointerMove { x, y } => engine.on_pointer_move(Point::new(*x, *y)),
            Self::PointerUp => engine.on_pointer_up(),
            Self::BoxPointerDown { id, x, y, button } => {
                engine.on_box_pointer_down(id, Point::new(*x, *y), *button)
            }
            Self::BoxClick { id } => engine.on_box_click(id),
            Self::HoverEnter { id } => engine.on_box_hover_enter(id),
            Self::HoverLeave { id } => engine.on_box_hover_leave(id),
            Self::PressAt { x, y, button } => engine.press_at(Point::new(*x, *y), *button),
            Self::Cancel => engine.cancel_gesture(),
        }
    }
}

/// Parse a script from JSON.
pub fn parse_script(json: &str) -> ReplayResult<Vec<ScriptEvent>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> ReplayResult<Vec<ScriptEvent>> {
    let json = fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&json)
}

/// Deliver every event in order; returns one transition per event.
pub fn replay(engine: &mut BoxEngine, events: &[ScriptEvent]) -> Vec<Transition> {
    let transitions: Vec<Transition> = events.iter().map(|e| e.apply(engine)).collect();
    let ignored = transitions.iter().filter(|t| t.is_ignored()).count();
    info!(
        events = events.len(),
        ignored,
        boxes = engine.boxes().len(),
        "Replay finished"
    );
    transitions
}
