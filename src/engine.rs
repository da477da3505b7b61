//! The box interaction engine.
//!
//! [`BoxEngine`] owns the committed boxes, the gesture state machine, the
//! pointer tracker and the hovered box. It is a plain state object: the host
//! subscribes to its native pointer events once and forwards each one to the
//! matching method (see [`crate::input`]). Every method runs to completion and
//! returns a [`Transition`] describing what changed.
//!
//! Invalid transitions are never errors. They come back as
//! [`Transition::Ignored`] and leave the engine untouched.

use crate::constants::SPLIT_CHILDREN;
use crate::ids::IdGenerator;
use crate::input::{InputState, PointerTracker};
use crate::palette::ColorPicker;
use crate::settings::EngineSettings;
use crate::snapshot::RenderSnapshot;
use crate::spatial_index::SpatialIndex;
use crate::types::{BoxId, CanvasBox, CursorMode};
use kurbo::Point;
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// Outcome of one engine call.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Pointer position updated, nothing else changed
    PointerMoved,
    /// Idle -> Drawing with a new candidate
    DrawStarted { id: BoxId },
    /// Candidate geometry recomputed
    CandidateResized { id: BoxId },
    /// Candidate appended to the collection; Drawing -> Idle
    BoxCommitted { id: BoxId },
    /// Idle -> Dragging
    DragStarted { id: BoxId },
    /// Dragged box repositioned
    BoxMoved { id: BoxId },
    /// Dragging -> Idle
    DragEnded { id: BoxId },
    /// Parent replaced in place by its four quadrants
    BoxSplit {
        parent: BoxId,
        children: [BoxId; SPLIT_CHILDREN],
    },
    /// Hovered box changed
    HoverChanged { hovered: Option<BoxId> },
    /// Gesture ended through [`BoxEngine::cancel_gesture`]
    GestureCancelled,
    /// Nothing happened
    Ignored(IgnoreReason),
}

impl Transition {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }

    pub fn ignored_reason(&self) -> Option<IgnoreReason> {
        match self {
            Self::Ignored(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Why a call was a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A draw or drag is already in progress
    GestureActive,
    /// Pointer up or cancel with no gesture in progress
    NoGesture,
    /// Surface-level press landed on a box; the box handler owns it
    TargetIsBox,
    /// Box press with a non-primary button
    NotPrimaryButton,
    /// No committed box has this id
    UnknownBox,
    /// Box is not larger than twice the minimum size on both sides
    TooSmallToSplit,
    /// Box is the one currently being dragged
    BoxInGesture,
    /// Click swallowed after a drag that moved the box
    ClickAfterDrag,
    /// Hover leave for a box that is not the hovered one
    NotHovered,
}

/// Box drawing, dragging and splitting state machine.
#[derive(Debug)]
pub struct BoxEngine {
    /// Committed boxes in render order
    pub(crate) boxes: Vec<CanvasBox>,
    pub(crate) input_state: InputState,
    pub(crate) pointer: PointerTracker,
    pub(crate) hovered: Option<BoxId>,
    pub(crate) settings: EngineSettings,
    pub(crate) ids: Box<dyn IdGenerator>,
    pub(crate) colors: Box<dyn ColorPicker>,
    /// Hit-test index; refreshed on commit, drag end and split
    pub(crate) index: SpatialIndex,
    /// Box whose drag just ended after moving it
    pub(crate) last_dragged: Option<BoxId>,
}

impl Default for BoxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxEngine {
    /// Engine with default settings.
    pub fn new() -> Self {
        Self::with_settings(EngineSettings::default())
    }

    /// Engine using the id and colour strategies named in `settings`.
    pub fn with_settings(settings: EngineSettings) -> Self {
        let ids = settings.id_strategy.build();
        let colors = settings.color_strategy.build();
        Self {
            boxes: Vec::new(),
            input_state: InputState::default(),
            pointer: PointerTracker::new(),
            hovered: None,
            settings,
            ids,
            colors,
            index: SpatialIndex::new(),
            last_dragged: None,
        }
    }

    /// Replace the id generator.
    pub fn with_id_generator(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self.reserve_live_ids();
        self
    }

    /// Replace the colour picker.
    pub fn with_color_picker(mut self, colors: Box<dyn ColorPicker>) -> Self {
        self.colors = colors;
        self
    }

    /// Swap in reloaded settings.
    ///
    /// Strategies are rebuilt only when their kind changed; a rebuilt id
    /// generator skips every id still on the surface. Committed boxes keep
    /// their geometry, so a minimum size larger than the smallest committed
    /// side is refused and the current minimum kept.
    pub fn apply_settings(&mut self, mut settings: EngineSettings) {
        let smallest_side = self
            .boxes
            .iter()
            .map(|b| b.width.min(b.height))
            .reduce(f64::min);
        if let Some(smallest) = smallest_side.filter(|s| settings.min_box_size > *s) {
            warn!(
                requested = settings.min_box_size,
                kept = self.settings.min_box_size,
                smallest,
                "Refusing min_box_size larger than an existing box"
            );
            settings.min_box_size = self.settings.min_box_size;
        }
        if settings.id_strategy != self.settings.id_strategy {
            self.ids = settings.id_strategy.build();
            self.reserve_live_ids();
        }
        if settings.color_strategy != self.settings.color_strategy {
            self.colors = settings.color_strategy.build();
        }
        debug!(
            min_box_size = settings.min_box_size,
            palette = settings.palette.len(),
            "Applied settings"
        );
        self.settings = settings;
    }

    // --- Queries ---

    /// Committed boxes in render order.
    pub fn boxes(&self) -> &[CanvasBox] {
        &self.boxes
    }

    pub fn get_box(&self, id: &BoxId) -> Option<&CanvasBox> {
        self.boxes.iter().find(|b| &b.id == id)
    }

    /// The Drawing candidate, if a draw is in progress.
    pub fn in_progress(&self) -> Option<&CanvasBox> {
        self.input_state.candidate()
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn hovered(&self) -> Option<&BoxId> {
        self.hovered.as_ref()
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn min_box_size(&self) -> f64 {
        self.settings.min_box_size
    }

    /// Icon for the current state; derived, never stored.
    pub fn cursor_mode(&self) -> CursorMode {
        if self.input_state.is_gesture_active() {
            CursorMode::Pointing
        } else if self.hovered.is_some() {
            CursorMode::Add
        } else {
            CursorMode::Idle
        }
    }

    /// Topmost committed box at `point`.
    ///
    /// A box being dragged is indexed at its position when the drag started.
    pub fn box_at(&self, point: Point) -> Option<BoxId> {
        self.index.topmost_at(point.x, point.y)
    }

    /// Everything the presentation layer needs for one frame.
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            boxes: self.boxes.clone(),
            in_progress: self.in_progress().cloned(),
            cursor_mode: self.cursor_mode(),
            pointer: self.pointer.position(),
        }
    }

    // --- Internals shared by the input handlers ---

    pub(crate) fn position_of(&self, id: &BoxId) -> Option<usize> {
        self.boxes.iter().position(|b| &b.id == id)
    }

    fn reserve_live_ids(&mut self) {
        for b in &self.boxes {
            self.ids.reserve(&b.id);
        }
        if let Some(candidate) = self.input_state.candidate() {
            self.ids.reserve(&candidate.id);
        }
    }

    pub(crate) fn reindex(&mut self) {
        self.index.rebuild(&self.boxes);
    }

    pub(crate) fn ignore(&self, op: &'static str, reason: IgnoreReason) -> Transition {
        trace!(op, ?reason, "Ignored");
        Transition::Ignored(reason)
    }

    pub(crate) fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.boxes.len());
        self.boxes.iter().all(|b| seen.insert(&b.id))
    }
}
