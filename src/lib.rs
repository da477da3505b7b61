//! Headless box drawing, dragging and quadrant splitting for canvas overlays.
//!
//! The host forwards raw pointer events to a [`BoxEngine`] and renders the
//! [`RenderSnapshot`] it hands back:
//!
//! ```ignore
//! use kurbo::Point;
//! use splitboard::BoxEngine;
//!
//! let mut engine = BoxEngine::new();
//! engine.on_pointer_down(Point::new(100.0, 100.0), false);
//! engine.on_pointer_move(Point::new(300.0, 260.0));
//! engine.on_pointer_up();
//!
//! let id = engine.boxes()[0].id.clone();
//! engine.on_box_click(&id); // four quadrants
//! assert_eq!(engine.snapshot().boxes.len(), 4);
//! ```

pub mod constants;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod input;
pub mod logging;
pub mod palette;
pub mod perf;
pub mod replay;
pub mod settings;
pub mod settings_watcher;
pub mod snapshot;
pub mod spatial_index;
pub mod types;

pub use engine::{BoxEngine, IgnoreReason, Transition};
pub use settings::EngineSettings;
pub use snapshot::RenderSnapshot;
pub use types::{BoxId, CanvasBox, CursorMode, MouseButton};
