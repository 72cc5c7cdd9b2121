//! Random Move Quarto Engine
//!
//! Picks uniformly among every legal move: any free cell, any piece left to
//! hand over. Claims a quarto only when the chosen placement happens to make
//! one, since move generation folds those placements into claiming moves.
//! Useful for:
//! - Baseline comparisons in tournaments
//! - Stress testing move generation and the match state

use quarto_core::{legal_moves_into, Engine, MatchState, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A Quarto engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Same seed, same sequence of moves.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, state: &MatchState, _limits: SearchLimits) -> SearchResult {
        let mut moves = Vec::with_capacity(256);
        legal_moves_into(state, &mut moves);

        self.nodes = 1;

        let best_move = moves.choose(&mut self.rng).copied();

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match (name, value.parse::<u64>()) {
            ("Seed", Ok(seed)) => {
                self.rng = StdRng::seed_from_u64(seed);
                true
            }
            _ => false,
        }
    }
}
