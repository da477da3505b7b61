//! Box id generation.
//!
//! Root ids come from a pluggable [`IdGenerator`]. Split children never go
//! through the generator: their ids are the parent id plus a positional
//! suffix (see [`child_id`]), so a child's lineage is readable from its id.
//!
//! Every generator emits root ids that cannot collide with derived ids:
//! timestamp and counter ids contain no separator at all, and UUIDs have a
//! fixed group count that a derived id always exceeds.

use crate::constants::CHILD_ID_SEPARATOR;
use crate::types::BoxId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of fresh root box ids.
pub trait IdGenerator: std::fmt::Debug {
    fn next_id(&mut self) -> BoxId;

    /// Mark `taken` as in use so no later id repeats it. Called for every
    /// live box when a generator replaces another mid-session.
    fn reserve(&mut self, _taken: &BoxId) {}
}

/// Numeric value of the root segment of `id`, if it has one.
fn root_number<T: FromStr>(id: &BoxId) -> Option<T> {
    id.as_str().split(CHILD_ID_SEPARATOR).next()?.parse().ok()
}

/// Id of the `index`-th split child (1-based) of `parent`.
pub fn child_id(parent: &BoxId, index: usize) -> BoxId {
    BoxId::new(format!("{}{}{}", parent, CHILD_ID_SEPARATOR, index))
}

/// Millisecond timestamps, bumped when two ids land in the same millisecond.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: u128,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> BoxId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        self.last = now.max(self.last + 1);
        BoxId::new(self.last.to_string())
    }

    fn reserve(&mut self, taken: &BoxId) {
        if let Some(n) = root_number::<u128>(taken) {
            self.last = self.last.max(n);
        }
    }
}

/// Sequential ids starting at 1. Deterministic, useful for tests and replays.
#[derive(Debug, Default)]
pub struct CounterIds {
    next: u64,
}

impl CounterIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for CounterIds {
    fn next_id(&mut self) -> BoxId {
        self.next += 1;
        BoxId::new(self.next.to_string())
    }

    fn reserve(&mut self, taken: &BoxId) {
        if let Some(n) = root_number::<u64>(taken) {
            self.next = self.next.max(n);
        }
    }
}

/// Random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> BoxId {
        BoxId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Id strategy as named in the settings file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    #[default]
    Timestamp,
    Counter,
    Uuid,
}

impl IdStrategy {
    pub fn build(self) -> Box<dyn IdGenerator> {
        match self {
            Self::Timestamp => Box::new(TimestampIds::new()),
            Self::Counter => Box::new(CounterIds::new()),
            Self::Uuid => Box::new(UuidIds),
        }
    }
}
