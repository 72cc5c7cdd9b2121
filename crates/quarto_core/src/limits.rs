//! Per-move search budgets.
//!
//! An engine stops at whichever comes first: its depth, the move time or the
//! node budget. Running out of time or nodes means answering at once with the
//! best move found so far.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Nodes between two reads of the clock.
const CLOCK_INTERVAL: u64 = 1024;

/// Budget for answering one position.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies
    pub depth: u8,
    /// Wall-clock budget (None = unbounded)
    pub move_time: Option<Duration>,
    /// Node budget (None = unbounded)
    pub max_nodes: Option<u64>,
    /// Shared with every worker searching this move
    pub signal: StopSignal,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            max_nodes: None,
            signal: StopSignal::default(),
        }
    }

    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            move_time: Some(move_time),
            ..Self::depth(depth)
        }
    }

    /// Time budget only; the engine picks its own depth.
    pub fn time(move_time: Duration) -> Self {
        Self::depth_and_time(u8::MAX, move_time)
    }

    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Starts the clock. Call once when the search for this move begins.
    pub fn start(&self) {
        self.signal.arm();
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.signal.is_raised()
    }

    /// Called with the running node count; raises the signal once a budget is spent.
    ///
    /// The clock is read only every `CLOCK_INTERVAL` nodes.
    #[inline]
    pub fn out_of_budget(&self, nodes: u64) -> bool {
        if self.signal.is_raised() {
            return true;
        }
        let spent = self.max_nodes.is_some_and(|max| nodes >= max)
            || (nodes % CLOCK_INTERVAL == 0
                && self
                    .move_time
                    .is_some_and(|limit| self.signal.elapsed() >= limit));
        if spent {
            self.signal.raise();
        }
        spent
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Stop flag and start time shared by clones.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    inner: Arc<SignalState>,
}

#[derive(Debug, Default)]
struct SignalState {
    raised: AtomicBool,
    started: RwLock<Option<Instant>>,
}

impl StopSignal {
    /// Clears the flag and restarts the clock.
    pub fn arm(&self) {
        if let Ok(mut started) = self.inner.started.write() {
            *started = Some(Instant::now());
        }
        self.inner.raised.store(false, Ordering::SeqCst);
    }

    /// Asks every holder to stop.
    pub fn raise(&self) {
        self.inner.raised.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_raised(&self) -> bool {
        self.inner.raised.load(Ordering::Relaxed)
    }

    /// Time since `arm`, zero if never armed.
    pub fn elapsed(&self) -> Duration {
        self.inner
            .started
            .read()
            .ok()
            .and_then(|started| started.map(|t| t.elapsed()))
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;
