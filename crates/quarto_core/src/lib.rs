pub mod board;
pub mod error;
pub mod limits;
pub mod movegen;
pub mod piece;
pub mod pool;
pub mod state;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::MoveRejection;
pub use limits::{SearchLimits, StopSignal};
pub use movegen::*;
pub use piece::*;
pub use pool::Pool;
pub use state::*;
pub use types::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait, implemented by every move chooser
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The move chosen (None only when the match is already over)
    pub best_move: Option<Move>,
    /// Score from the mover's perspective; 0 when the engine has no opinion
    pub score: i32,
    /// Search depth reached
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Whether search was stopped early by the time or node budget
    pub stopped: bool,
}

impl SearchResult {
    /// Result for a state with nothing left to play.
    pub fn none() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stopped: false,
        }
    }
}

/// Trait that all Quarto engines implement.
///
/// This allows swapping between heuristic, search and tiered engines.
pub trait Engine: Send {
    /// Choose a move for the player to move in `state`.
    ///
    /// # Arguments
    /// * `state` - The current match state
    /// * `limits` - Search limits (depth, time, nodes)
    ///
    /// # Returns
    /// SearchResult containing the chosen move and statistics
    fn search(&mut self, state: &MatchState, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "quarto-lab"
    }

    /// Reset internal state for a new game (clear hash tables, etc.)
    fn new_game(&mut self) {}

    /// Optional: Set an option by name. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
