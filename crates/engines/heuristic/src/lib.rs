//! Heuristic Quarto Engine
//!
//! Cheap move selection for the part of the game where exhaustive search is
//! too expensive. Candidates are scored by counting shared attributes along
//! the board's lines:
//! - Nothing placed: uniformly random position and piece
//! - One piece placed: play in line with it or away from it by overlap
//! - Two or more: favour three-piece threats, avoid feeding two-piece lines
//!
//! Immediate wins are always taken, and a piece that lets the opponent claim
//! on their next placement is only handed over when no safe one exists.

mod advisor;

pub use advisor::{best_candidates, score_candidates, Candidate, HeuristicConfig, Tier};

use quarto_core::{
    gives_away_win, legal_moves, winning_moves, Engine, MatchState, Move, SearchLimits,
    SearchResult,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;

/// Engine that answers from shared-attribute heuristics without searching.
#[derive(Debug, Clone)]
pub struct HeuristicEngine {
    config: HeuristicConfig,
    rng: StdRng,
    nodes: u64,
}

impl Default for HeuristicEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicEngine {
    pub fn new() -> Self {
        Self::with_rng(HeuristicConfig::default(), StdRng::from_entropy())
    }

    /// Reproducible engine: the same seed picks the same moves.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(HeuristicConfig::default(), StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: HeuristicConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Best heuristic move, or `None` when the match is over.
    pub fn choose(&mut self, state: &MatchState) -> Option<Move> {
        if state.is_over() {
            return None;
        }
        if let Some(&win) = winning_moves(state).first() {
            self.nodes += 1;
            return Some(win);
        }

        let candidates = score_candidates(state, &self.config);
        self.nodes += candidates.len() as u64;
        let top = best_candidates(&candidates);
        trace!(
            candidates = candidates.len(),
            best = ?top.first().map(|c| c.score),
            safe = top.first().is_some_and(|c| c.safe),
            ties = top.len(),
            "heuristic candidates scored"
        );
        top.choose(&mut self.rng).map(|c| c.mv)
    }

    /// Uniformly random legal move, restricted to safe hand-overs when possible.
    ///
    /// Used as the fallback when a smarter engine proposes something the
    /// match state refuses.
    pub fn safe_random_move(&mut self, state: &MatchState) -> Option<Move> {
        if let Some(&win) = winning_moves(state).first() {
            return Some(win);
        }
        let moves = legal_moves(state);
        let safe: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|mv| is_safe_hand_over(state, mv))
            .collect();
        if safe.is_empty() {
            moves.choose(&mut self.rng).copied()
        } else {
            safe.choose(&mut self.rng).copied()
        }
    }
}

/// Whether `mv` hands the opponent a piece they cannot win with at once.
pub fn is_safe_hand_over(state: &MatchState, mv: &Move) -> bool {
    let Ok(child) = state.child(*mv) else {
        return false;
    };
    match child.pending_piece() {
        Some(p) => !gives_away_win(child.board(), p),
        None => true,
    }
}

impl Engine for HeuristicEngine {
    fn search(&mut self, state: &MatchState, _limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        let best_move = self.choose(state);
        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Heuristic v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match (name, value.parse::<i64>()) {
            ("PressureOverlap", Ok(v)) => {
                self.config.pressure_overlap = v.clamp(0, 4) as u8;
                true
            }
            ("Seed", Ok(v)) => {
                self.rng = StdRng::seed_from_u64(v as u64);
                true
            }
            _ => false,
        }
    }
}
