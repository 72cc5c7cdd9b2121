//! Move scoring by shared-attribute counting.
//!
//! Every candidate (cell, next piece) pair gets a score; the tier that scores
//! it is picked by how many pieces are already on the board. Handing over a
//! piece the opponent can win with immediately is never preferred over a safe
//! one, whatever the tier says.

use quarto_core::{gives_away_win, in_line, lines_through, Board, MatchState, Move, Piece};
use serde::{Deserialize, Serialize};

/// Tunables for the heuristic tiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Overlap between the lone placed piece and the piece in hand at which the
    /// advisor plays in line with it instead of away from it.
    pub pressure_overlap: u8,
    /// Score per three-piece line with a shared attribute left after placement.
    pub threat_weight: i32,
    /// Penalty per two-piece line the handed-over piece would extend.
    pub extension_penalty: i32,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            pressure_overlap: 2,
            threat_weight: 2,
            extension_penalty: 1,
        }
    }
}

/// How the candidates of one turn get scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Nothing placed yet: no information, every candidate scores the same.
    Opening,
    /// One piece on the board: play with or away from it by overlap.
    SecondPiece { placed_cell: u8, placed: Piece },
    /// Two or more pieces: count threats and extensions line by line.
    General,
}

impl Tier {
    pub fn for_board(board: &Board) -> Tier {
        let mut placed = board.placed();
        match (placed.next(), placed.next()) {
            (None, _) => Tier::Opening,
            (Some((cell, piece)), None) => Tier::SecondPiece {
                placed_cell: cell,
                placed: piece,
            },
            _ => Tier::General,
        }
    }
}

/// A scored candidate move.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub mv: Move,
    pub score: i32,
    pub safe: bool,
}

/// Scores every non-claiming candidate for `state`.
///
/// Callers take immediate wins before getting here.
pub fn score_candidates(state: &MatchState, config: &HeuristicConfig) -> Vec<Candidate> {
    let board = state.board();
    let choosable = state.choosable();
    let tier = Tier::for_board(board);

    let Some(in_hand) = state.pending_piece() else {
        // Opening move: only a piece to hand over, and any piece is safe.
        return choosable
            .iter()
            .map(|p| Candidate {
                mv: Move::new(None, Some(p)),
                score: 0,
                safe: true,
            })
            .collect();
    };

    let mut out = Vec::with_capacity(board.free_cells().count() * choosable.len().max(1));
    for cell in board.free_cells() {
        let mut after = *board;
        after.set_piece(cell, Some(in_hand));
        let cell_score = cell_score(tier, &after, cell, in_hand, config);

        if choosable.is_empty() {
            out.push(Candidate {
                mv: Move::new(Some(cell), None),
                score: cell_score,
                safe: true,
            });
            continue;
        }

        for next in choosable.iter() {
            let safe = !gives_away_win(&after, next);
            let piece_score = piece_score(tier, &after, in_hand, next, config);
            out.push(Candidate {
                mv: Move::new(Some(cell), Some(next)),
                score: cell_score + piece_score,
                safe,
            });
        }
    }
    out
}

/// The top-scoring candidates, looking only at safe hand-overs when there are any.
///
/// Scores only rank candidates of the same safety; an unsafe one is picked
/// only when every hand-over is unsafe.
pub fn best_candidates(candidates: &[Candidate]) -> Vec<Candidate> {
    let any_safe = candidates.iter().any(|c| c.safe);
    let eligible: Vec<Candidate> = candidates
        .iter()
        .copied()
        .filter(|c| c.safe || !any_safe)
        .collect();
    let Some(top) = eligible.iter().map(|c| c.score).max() else {
        return Vec::new();
    };
    eligible.into_iter().filter(|c| c.score == top).collect()
}

fn cell_score(
    tier: Tier,
    after: &Board,
    cell: u8,
    in_hand: Piece,
    config: &HeuristicConfig,
) -> i32 {
    match tier {
        Tier::Opening => 0,
        Tier::SecondPiece {
            placed_cell,
            placed,
        } => {
            let pressure = placed.overlap(in_hand) >= config.pressure_overlap;
            if pressure == in_line(placed_cell, cell) {
                2
            } else {
                0
            }
        }
        Tier::General => {
            let threats = lines_through(cell)
                .filter(|line| {
                    let (mask, n) = after.line_profile(line);
                    n == 3 && !mask.is_empty()
                })
                .count() as i32;
            threats * config.threat_weight
        }
    }
}

fn piece_score(
    tier: Tier,
    after: &Board,
    in_hand: Piece,
    next: Piece,
    config: &HeuristicConfig,
) -> i32 {
    match tier {
        Tier::Opening => 0,
        Tier::SecondPiece { placed, .. } => {
            if placed.overlap(in_hand) >= config.pressure_overlap {
                // Share one or two of the traits the placed pair has in common.
                let pair = placed.shared_with(in_hand);
                let shared = (next.shared_with(placed).bits() & pair.bits()).count_ones();
                i32::from((1..=2).contains(&shared))
            } else {
                i32::from(next.overlap(in_hand) == 3)
            }
        }
        Tier::General => {
            let extended = quarto_core::LINES
                .iter()
                .filter(|line| {
                    let (mask, n) = after.line_profile(line);
                    if n != 2 || mask.is_empty() {
                        return false;
                    }
                    let (pieces, _) = after.line_pieces(line);
                    next.matches_any(pieces[0], mask)
                })
                .count() as i32;
            -extended * config.extension_penalty
        }
    }
}

#[cfg(test)]
#[path = "advisor_tests.rs"]
mod advisor_tests;
