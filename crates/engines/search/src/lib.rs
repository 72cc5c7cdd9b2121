//! Adversarial Search Engine
//!
//! Negamax with alpha-beta pruning over the exact Quarto move set.
//! This engine uses:
//! - A transposition table keyed by the Zobrist hash of board and pending piece
//! - Depth tiers by remaining pieces: deeper as the branching factor shrinks
//! - An exact iterative-deepening solver for the last few pieces
//! - Time and node budgets, returning the best move so far when they run out

mod search;
mod tt;

use std::sync::atomic::{AtomicU64, Ordering};

use quarto_core::{Engine, MatchState, SearchLimits, SearchResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use search::{is_decisive, plies_left, SearchOutcome, MATE_BOUND, WIN};
pub use tt::{Bound, TranspositionTable, TtEntry};

/// How deep to search, by number of unplaced pieces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// At or below this many remaining pieces, solve exactly.
    pub exact_max_remaining: usize,
    /// Lowest remaining count of the late tier.
    pub late_tier_min: usize,
    /// Highest remaining count of the late tier; above it is the mid tier.
    pub late_tier_max: usize,
    /// Highest remaining count of the mid tier.
    pub mid_tier_max: usize,
    /// Depth at the top of the mid tier.
    pub mid_depth: u8,
    /// Depth at the top of the late tier.
    pub late_depth: u8,
    /// Transposition table size as a power of two.
    pub tt_bits: u8,
    /// Split root moves across rayon workers.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            exact_max_remaining: 4,
            late_tier_min: 5,
            late_tier_max: 9,
            mid_tier_max: 13,
            mid_depth: 2,
            late_depth: 3,
            tt_bits: 18,
            parallel: false,
        }
    }
}

/// What the engine will do for a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPlan {
    /// Deepen until the value is proven.
    Exact,
    /// Deepen up to a fixed depth.
    Fixed(u8),
}

impl SearchConfig {
    /// One extra ply for every two pieces below the top of the tier.
    pub fn plan(&self, remaining: usize) -> SearchPlan {
        if remaining <= self.exact_max_remaining {
            SearchPlan::Exact
        } else if remaining <= self.late_tier_max {
            let bonus = (self.late_tier_max - remaining.max(self.late_tier_min)) / 2;
            SearchPlan::Fixed(self.late_depth.saturating_add(bonus as u8))
        } else if remaining <= self.mid_tier_max {
            let bonus = (self.mid_tier_max - remaining) / 2;
            SearchPlan::Fixed(self.mid_depth.saturating_add(bonus as u8))
        } else {
            SearchPlan::Fixed(self.mid_depth)
        }
    }
}

/// Search engine with a persistent transposition table.
pub struct SearchEngine {
    config: SearchConfig,
    tt: TranspositionTable,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        let tt = TranspositionTable::new(config.tt_bits);
        Self {
            config,
            tt,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches with the depth the tiers give for `state`, capped by `limits.depth`.
    pub fn analyse(&mut self, state: &MatchState, limits: &SearchLimits) -> SearchOutcome {
        match self.config.plan(state.remaining()) {
            SearchPlan::Exact => self.solve(state, limits),
            SearchPlan::Fixed(depth) => self.deepen(state, depth.min(limits.depth), limits),
        }
    }

    /// Exact solve: deepen until the value is proven or the budget runs out.
    pub fn solve(&mut self, state: &MatchState, limits: &SearchLimits) -> SearchOutcome {
        let depth = plies_left(state).min(limits.depth);
        self.deepen(state, depth, limits)
    }

    /// Iterative deepening from depth 1 to `max_depth`.
    ///
    /// Stops early once the score is proven; at `plies_left` depth every line
    /// reaches the end of the match, so the exact solve always gets there.
    /// When the budget runs out the last completed iteration is returned, or
    /// the partial one if none completed.
    pub fn deepen(
        &mut self,
        state: &MatchState,
        max_depth: u8,
        limits: &SearchLimits,
    ) -> SearchOutcome {
        let nodes = AtomicU64::new(0);
        let parallel = self.config.parallel.then(|| self.config.tt_bits.saturating_sub(3));
        let mut best: Option<SearchOutcome> = None;

        for depth in 1..=max_depth.max(1) {
            let outcome = search::search_root(state, depth, &mut self.tt, limits, &nodes, parallel);
            if outcome.stopped {
                let mut kept = match best {
                    Some(b) => b,
                    None => outcome,
                };
                if kept.best_move.is_none() {
                    kept.best_move = outcome.best_move;
                }
                kept.stopped = true;
                best = Some(kept);
                break;
            }
            debug!(
                depth,
                score = outcome.score,
                proven = outcome.proven,
                nodes = nodes.load(Ordering::Relaxed),
                "iteration complete"
            );
            let done = outcome.proven || outcome.best_move.is_none();
            best = Some(outcome);
            if done {
                break;
            }
        }

        self.nodes = nodes.load(Ordering::Relaxed);
        best.unwrap_or(SearchOutcome {
            best_move: None,
            score: 0,
            depth: 0,
            proven: false,
            stopped: false,
        })
    }
}

impl Engine for SearchEngine {
    fn search(&mut self, state: &MatchState, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        if state.is_over() {
            return SearchResult::none();
        }
        limits.start();

        let outcome = self.analyse(state, &limits);
        // Budget exhausted before a single root move finished: any legal move beats none.
        let best_move = outcome
            .best_move
            .or_else(|| quarto_core::legal_moves(state).first().copied());

        SearchResult {
            best_move,
            score: outcome.score,
            depth: outcome.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Search v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.tt.clear();
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name {
            "Parallel" => match value.parse() {
                Ok(v) => {
                    self.config.parallel = v;
                    true
                }
                Err(_) => false,
            },
            "MidDepth" => match value.parse() {
                Ok(v) => {
                    self.config.mid_depth = v;
                    true
                }
                Err(_) => false,
            },
            "LateDepth" => match value.parse() {
                Ok(v) => {
                    self.config.late_depth = v;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}
