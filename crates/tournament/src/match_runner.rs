//! Match runner for playing games between engines

use std::time::Duration;

use quarto_core::{Engine, MatchState, Player, SearchLimits, WinnerOutcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Whether engine1 and engine2 take turns moving first
    pub alternate_first_player: bool,
    /// Seed handed to the engines that take one (None = entropy)
    pub seed: Option<u64>,
    /// Maximum time per move in milliseconds (None = no limit)
    pub move_time_ms: Option<u64>,
    /// Maximum nodes per move (None = no limit)
    pub max_nodes: Option<u64>,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            alternate_first_player: true,
            seed: None,
            move_time_ms: None,
            max_nodes: None,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Create search limits based on this config
    fn search_limits(&self) -> SearchLimits {
        let limits = match self.move_time_ms {
            Some(ms) => SearchLimits::time(Duration::from_millis(ms)),
            None => SearchLimits::depth(u8::MAX),
        };
        match self.max_nodes {
            Some(n) => limits.with_max_nodes(n),
            None => limits,
        }
    }
}

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Result from the first mover's perspective
    pub result: GameResult,
    /// Moves accepted by the match state
    pub plies: u32,
    /// The game ended because an engine's move was refused or missing
    pub forfeit: bool,
}

impl GameRecord {
    /// `offender` loses without the game reaching a verdict on the board.
    fn forfeit(offender: Player, plies: u32) -> Self {
        let result = match offender {
            Player::One => GameResult::Loss,
            Player::Two => GameResult::Win,
        };
        Self {
            result,
            plies,
            forfeit: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_first = !self.config.alternate_first_player || game_num % 2 == 0;

            let record = if engine1_first {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };
            let game_result = if engine1_first {
                record.result
            } else {
                record.result.flipped()
            };

            result.record(game_result, record.forfeit);

            if self.config.verbose {
                let seat = if engine1_first { "1st" } else { "2nd" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                let note = if record.forfeit { " forfeit" } else { "" };
                println!(
                    "Game {}/{}: {} ({}, {} plies{}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    seat,
                    record.plies,
                    note,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns the record from the first mover's perspective
    pub fn play_game(&self, first: &mut dyn Engine, second: &mut dyn Engine) -> GameRecord {
        let mut state = MatchState::new();
        first.new_game();
        second.new_game();
        let mut plies = 0;

        while !state.is_over() {
            // Create fresh search limits for each move (resets the clock)
            let limits = self.config.search_limits();
            let mover = state.current_player();

            let engine: &mut dyn Engine = if mover == Player::One {
                &mut *first
            } else {
                &mut *second
            };
            let result = engine.search(&state, limits);

            let Some(mv) = result.best_move else {
                warn!(engine = engine.name(), "no move in a live match, game forfeited");
                return GameRecord::forfeit(mover, plies);
            };
            let req = mv.to_request(&state);
            if let Err(e) = state.apply_move(&req) {
                warn!(engine = engine.name(), ?req, error = %e, "move rejected, game forfeited");
                return GameRecord::forfeit(mover, plies);
            }

            plies += 1;
            debug!(
                engine = engine.name(),
                plies,
                score = result.score,
                depth = result.depth,
                nodes = result.nodes,
                "move played"
            );
        }

        let result = match state.winner() {
            WinnerOutcome::Player(Player::One) => GameResult::Win,
            WinnerOutcome::Player(Player::Two) => GameResult::Loss,
            WinnerOutcome::Draw | WinnerOutcome::None => GameResult::Draw,
        };
        GameRecord {
            result,
            plies,
            forfeit: false,
        }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
