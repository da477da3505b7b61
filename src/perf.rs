//! Event handler timing.
//!
//! Pointer handlers run once per host event tick and must finish well inside
//! a frame. With the `profiling` feature enabled, [`profile_scope!`] wraps a
//! handler in a [`ScopedTimer`] that records into a thread-local
//! [`HandlerStats`] table and warns when a handler overruns its budget.
//!
//! ```ignore
//! fn on_pointer_move(&mut self, point: Point) -> Transition {
//!     profile_scope!("on_pointer_move");
//!     // ... handler body ...
//! }
//! ```

use crate::constants::SLOW_HANDLER_MS;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::{trace, warn};

/// Number of samples kept per handler for rolling statistics
const SAMPLE_COUNT: usize = 100;

/// Time a scope. Zero-cost when the `profiling` feature is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::constants::SLOW_HANDLER_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

thread_local! {
    static STATS: RefCell<HandlerStats> = RefCell::new(HandlerStats::default());
}

// ============================================================================
// Statistics
// ============================================================================

/// Rolling timing samples for one handler.
#[derive(Debug, Clone, Default)]
pub struct TimingSamples {
    samples: VecDeque<f64>,
    count: u64,
    max_ms: f64,
}

impl TimingSamples {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= SAMPLE_COUNT {
            self.samples.pop_front();
        }
        self.samples.push_back(ms);
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Average over the retained samples
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn max(&self) -> f64 {
        self.max_ms
    }
}

/// Per-handler timing table.
#[derive(Debug, Default)]
pub struct HandlerStats {
    handlers: HashMap<&'static str, TimingSamples>,
}

impl HandlerStats {
    pub fn record(&mut self, name: &'static str, ms: f64) {
        self.handlers.entry(name).or_default().record(ms);
    }

    pub fn get(&self, name: &str) -> Option<&TimingSamples> {
        self.handlers.get(name)
    }

    /// Handlers whose average exceeds `threshold_ms`, slowest first.
    pub fn slow_handlers(&self, threshold_ms: f64) -> Vec<(&'static str, f64)> {
        let mut slow: Vec<_> = self
            .handlers
            .iter()
            .map(|(name, s)| (*name, s.average()))
            .filter(|(_, avg)| *avg > threshold_ms)
            .collect();
        slow.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        slow
    }
}

/// Run `f` with this thread's recorded handler statistics.
pub fn with_stats<R>(f: impl FnOnce(&HandlerStats) -> R) -> R {
    STATS.with(|stats| f(&stats.borrow()))
}

/// Log every handler whose average exceeds one frame.
pub fn log_slow_handlers() {
    with_stats(|stats| {
        for (name, avg) in stats.slow_handlers(SLOW_HANDLER_MS) {
            warn!(handler = name, avg_ms = format!("{:.2}", avg), "Handler slower than a frame");
        }
    });
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Records the elapsed time of its scope on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        STATS.with(|stats| stats.borrow_mut().record(self.name, ms));
        if ms > self.threshold_ms {
            warn!(handler = self.name, elapsed_ms = format!("{:.2}", ms), "Slow handler");
        } else {
            trace!(handler = self.name, elapsed_ms = ms, "Handler timing");
        }
    }
}
