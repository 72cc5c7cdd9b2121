//! Tiered Quarto Engine
//!
//! Chooses how to think by the number of pieces left:
//! - Above the search threshold: shared-attribute heuristics
//! - At or below it: negamax search, exact once only a few pieces remain
//!
//! Whatever the chosen engine proposes is checked against the match state
//! before it leaves this crate. A refused proposal is a bug in that engine;
//! it is logged and replaced by a random safe move.

mod config;

pub use config::{ConfigError, EngineConfig};

use heuristic_engine::HeuristicEngine;
use quarto_core::{
    apply_move, Engine, MatchState, Move, MoveRejection, MoveRequest, SearchLimits, SearchResult,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use search_engine::SearchEngine;
use tracing::{debug, error};

/// Which engine answers a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Heuristic,
    Search,
}

impl Strategy {
    pub fn for_remaining(remaining: usize, search_threshold: usize) -> Strategy {
        if remaining > search_threshold {
            Strategy::Heuristic
        } else {
            Strategy::Search
        }
    }
}

/// Engine that dispatches each position to heuristics or search.
pub struct TieredEngine {
    config: EngineConfig,
    heuristic: HeuristicEngine,
    search: SearchEngine,
}

impl Default for TieredEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl TieredEngine {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let heuristic = HeuristicEngine::with_rng(config.heuristic.clone(), rng);
        let search = SearchEngine::with_config(config.search.clone());
        Self {
            config,
            heuristic,
            search,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Decision entry point for a transport layer.
    ///
    /// The returned request is always accepted by `apply_move` on `state`.
    /// A finished match has nothing to propose and yields `GameAlreadyOver`.
    pub fn propose_move(&mut self, state: &MatchState) -> Result<MoveRequest, MoveRejection> {
        if state.is_over() {
            return Err(MoveRejection::GameAlreadyOver);
        }
        let limits = self.config.search_limits();
        let result = self.decide(state, limits);
        match result.best_move {
            Some(mv) => Ok(mv.to_request(state)),
            None => panic!("no move for an unfinished match: {state:?}"),
        }
    }

    fn decide(&mut self, state: &MatchState, limits: SearchLimits) -> SearchResult {
        let strategy = Strategy::for_remaining(state.remaining(), self.config.search_threshold);
        debug!(remaining = state.remaining(), ?strategy, "strategy selected");

        let mut result = match strategy {
            Strategy::Heuristic => self.heuristic.search(state, limits),
            Strategy::Search => self.search.search(state, limits),
        };
        if !state.is_over() {
            result.best_move = Some(self.settle(state, result.best_move, strategy));
        }
        result
    }

    /// Returns `proposed` if the match state accepts it, otherwise a safe
    /// random replacement.
    fn settle(&mut self, state: &MatchState, proposed: Option<Move>, strategy: Strategy) -> Move {
        let rejection = match proposed {
            Some(mv) => match apply_move(state, &mv.to_request(state)) {
                Ok(_) => return mv,
                Err(e) => e.to_string(),
            },
            None => "no move proposed".to_string(),
        };
        error!(
            ?strategy,
            ?proposed,
            reason = %rejection,
            "engine proposed an illegal move, substituting a safe random one"
        );
        match self.heuristic.safe_random_move(state) {
            Some(mv) => mv,
            None => panic!("no legal move in an unfinished match: {state:?}"),
        }
    }
}

impl Engine for TieredEngine {
    fn search(&mut self, state: &MatchState, limits: SearchLimits) -> SearchResult {
        if state.is_over() {
            return SearchResult::none();
        }
        self.decide(state, limits)
    }

    fn name(&self) -> &str {
        "Tiered v1.0"
    }

    fn new_game(&mut self) {
        self.heuristic.new_game();
        self.search.new_game();
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if name == "SearchThreshold" {
            return match value.parse() {
                Ok(v) => {
                    self.config.search_threshold = v;
                    true
                }
                Err(_) => false,
            };
        }
        let heuristic = self.heuristic.set_option(name, value);
        let search = self.search.set_option(name, value);
        heuristic || search
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
