//! Negamax search with alpha-beta pruning and a transposition table.
//!
//! There is no static evaluation: a finished match scores a win or loss
//! discounted by its distance from the root, a draw and a depth cutoff both
//! score 0. The search tracks whether any cutoff was hit so the exact solver
//! knows when its value is proven.

use std::sync::atomic::{AtomicU64, Ordering};

use quarto_core::{legal_moves_into, safe_pieces, GameStatus, MatchState, Move, Pool, SearchLimits};
use rayon::prelude::*;

use crate::tt::{score_from_tt, score_to_tt, Bound, TranspositionTable, TtEntry};

/// Score of a win on the very next ply.
pub const WIN: i32 = 10_000;
const INF: i32 = WIN + 1;
/// A match lasts at most 17 moves; anything this close to `WIN` is a forced result.
pub const MATE_BOUND: i32 = WIN - 64;

/// Whether `score` is a forced win or loss rather than a heuristic zero.
pub fn is_decisive(score: i32) -> bool {
    score.abs() >= MATE_BOUND
}

/// Moves still to be played from `state` if the match runs to a full board.
pub fn plies_left(state: &MatchState) -> u8 {
    if state.is_over() {
        return 0;
    }
    let free = state.board().free_cells().count() as u8;
    if state.pending_piece().is_some() {
        free
    } else {
        free + 1
    }
}

/// Result of one root search.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// Best move found (None only for a finished match)
    pub best_move: Option<Move>,
    pub score: i32,
    /// Deepest completed iteration
    pub depth: u8,
    /// The score is the game-theoretic value, not a depth-limited estimate
    pub proven: bool,
    /// True if search was stopped early by the time or node budget
    pub stopped: bool,
}

struct Searcher<'a> {
    tt: &'a mut TranspositionTable,
    limits: &'a SearchLimits,
    nodes: &'a AtomicU64,
    /// A depth cutoff was reached somewhere in the current subtree
    horizon: bool,
    stopped: bool,
}

impl<'a> Searcher<'a> {
    fn new(tt: &'a mut TranspositionTable, limits: &'a SearchLimits, nodes: &'a AtomicU64) -> Self {
        Self {
            tt,
            limits,
            nodes,
            horizon: false,
            stopped: false,
        }
    }

    #[inline]
    fn visit(&mut self) -> bool {
        let n = self.nodes.fetch_add(1, Ordering::Relaxed) + 1;
        if self.limits.out_of_budget(n) {
            self.stopped = true;
        }
        self.stopped
    }

    /// Recursive negamax. Returns the score for the player to move in `state`.
    fn negamax(
        &mut self,
        state: &MatchState,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        ply: i32,
    ) -> i32 {
        if self.visit() {
            return 0;
        }

        match state.status() {
            GameStatus::Won(p) if p == state.current_player() => return WIN - ply,
            GameStatus::Won(_) => return -(WIN - ply),
            GameStatus::Drawn => return 0,
            GameStatus::InProgress(_) => {}
        }

        let mut moves = Vec::with_capacity(128);
        legal_moves_into(state, &mut moves);
        if moves.is_empty() {
            panic!("no legal move in an unfinished match: {state:?}");
        }
        if moves.iter().any(|m| m.quarto) {
            return WIN - (ply + 1);
        }

        if depth == 0 {
            self.horizon = true;
            return 0;
        }

        let key = state.position_hash();
        let mut tt_move = None;
        if let Some(entry) = self.tt.probe(key) {
            tt_move = entry.best_move;
            if entry.depth >= depth {
                let score = score_from_tt(entry.score, ply);
                let usable = match entry.bound {
                    Bound::Exact => true,
                    Bound::Lower => score >= beta,
                    Bound::Upper => score <= alpha,
                };
                if usable {
                    if !entry.proven {
                        self.horizon = true;
                    }
                    return score;
                }
            }
        }

        if !keep_safe_moves(state, &mut moves) {
            // Every hand-over lets the opponent claim on their placement.
            return -(WIN - (ply + 2));
        }
        order_moves(&mut moves, tt_move);

        let alpha_orig = alpha;
        let outer_horizon = std::mem::take(&mut self.horizon);
        let mut best = -INF;
        let mut best_move = None;

        for mv in moves {
            let child = expect_child(state, mv);
            let score = -self.negamax(&child, depth - 1, -beta, -alpha, ply + 1);
            if self.stopped {
                return 0;
            }
            if score > best {
                best = score;
                best_move = Some(mv);
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break;
            }
        }

        let proven = !self.horizon;
        self.horizon |= outer_horizon;

        let bound = if best <= alpha_orig {
            Bound::Upper
        } else if best >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(TtEntry {
            key,
            depth,
            score: score_to_tt(best, ply),
            bound,
            best_move,
            proven,
        });
        best
    }
}

fn expect_child(state: &MatchState, mv: Move) -> MatchState {
    match state.child(mv) {
        Ok(child) => child,
        Err(e) => panic!("generated move {mv:?} rejected by the match state: {e}"),
    }
}

/// Drops hand-overs the opponent can win with when a safe alternative exists.
///
/// Such a move loses two plies later, which any safe move beats. Returns
/// false when every move is such a hand-over.
fn keep_safe_moves(state: &MatchState, moves: &mut Vec<Move>) -> bool {
    let Some(in_hand) = state.pending_piece() else {
        // Opening: nothing on the board, every piece is safe.
        return true;
    };
    let choosable = state.choosable();
    if choosable.is_empty() {
        return true;
    }

    let mut safe_by_cell: [Option<Pool>; 16] = [None; 16];
    let board = *state.board();
    let mut is_safe = |mv: &Move| -> bool {
        let (Some(cell), Some(next)) = (mv.position, mv.next_piece) else {
            return true;
        };
        let safe = safe_by_cell[cell as usize].get_or_insert_with(|| {
            let mut after = board;
            after.set_piece(cell, Some(in_hand));
            safe_pieces(&after, choosable)
        });
        safe.contains(next)
    };

    let fallback = moves[0];
    moves.retain(|mv| is_safe(mv));
    if moves.is_empty() {
        // Keep one so the root still has something to play.
        moves.push(fallback);
        return false;
    }
    true
}

/// Transposition move first, otherwise generation order.
fn order_moves(moves: &mut [Move], tt_move: Option<Move>) {
    if let Some(tt) = tt_move {
        if let Some(i) = moves.iter().position(|&m| m == tt) {
            moves[..=i].rotate_right(1);
        }
    }
}

/// Root search to a fixed depth.
///
/// With `parallel`, root moves are split into one contiguous chunk per rayon
/// thread. Each chunk gets its own transposition table of `1 << worker_tt_bits`
/// slots and searches every move with a full window.
pub fn search_root(
    state: &MatchState,
    depth: u8,
    tt: &mut TranspositionTable,
    limits: &SearchLimits,
    nodes: &AtomicU64,
    parallel: Option<u8>,
) -> SearchOutcome {
    let mut moves = Vec::with_capacity(256);
    legal_moves_into(state, &mut moves);
    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            score: 0,
            depth: 0,
            proven: true,
            stopped: false,
        };
    }

    if let Some(win) = moves.iter().copied().find(|m| m.quarto) {
        return SearchOutcome {
            best_move: Some(win),
            score: WIN - 1,
            depth: 1,
            proven: true,
            stopped: false,
        };
    }

    if !keep_safe_moves(state, &mut moves) {
        return SearchOutcome {
            best_move: moves.first().copied(),
            score: -(WIN - 2),
            depth: 2,
            proven: true,
            stopped: false,
        };
    }
    let tt_move = tt.probe(state.position_hash()).and_then(|e| e.best_move);
    order_moves(&mut moves, tt_move);

    let depth = depth.max(1);
    let (best, proven, stopped) = match parallel {
        Some(bits) => root_parallel(state, &moves, depth, limits, nodes, bits),
        None => root_sequential(state, &moves, depth, tt, limits, nodes),
    };

    SearchOutcome {
        best_move: best.map(|(mv, _)| mv),
        score: best.map(|(_, s)| s).unwrap_or(0),
        depth,
        proven,
        stopped,
    }
}

fn root_sequential(
    state: &MatchState,
    moves: &[Move],
    depth: u8,
    tt: &mut TranspositionTable,
    limits: &SearchLimits,
    nodes: &AtomicU64,
) -> (Option<(Move, i32)>, bool, bool) {
    let mut searcher = Searcher::new(tt, limits, nodes);
    let mut best: Option<(Move, i32)> = None;
    let mut alpha = -INF;

    for &mv in moves {
        let child = expect_child(state, mv);
        let score = -searcher.negamax(&child, depth - 1, -INF, -alpha, 1);
        if searcher.stopped {
            return (best, false, true);
        }
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((mv, score));
            alpha = alpha.max(score);
        }
    }

    // A forced result is exact even if some refuted line was cut off.
    let proven = !searcher.horizon || best.is_some_and(|(_, s)| is_decisive(s));
    if let Some((mv, score)) = best {
        searcher.tt.store(TtEntry {
            key: state.position_hash(),
            depth,
            score: score_to_tt(score, 0),
            bound: Bound::Exact,
            best_move: Some(mv),
            proven,
        });
    }
    (best, proven, false)
}

fn root_parallel(
    state: &MatchState,
    moves: &[Move],
    depth: u8,
    limits: &SearchLimits,
    nodes: &AtomicU64,
    tt_bits: u8,
) -> (Option<(Move, i32)>, bool, bool) {
    let chunk_len = moves.len().div_ceil(rayon::current_num_threads()).max(1);
    let per_chunk: Vec<Vec<(Move, i32, bool, bool)>> = moves
        .par_chunks(chunk_len)
        .map(|chunk| {
            let mut tt = TranspositionTable::new(tt_bits);
            chunk
                .iter()
                .map(|&mv| {
                    let mut searcher = Searcher::new(&mut tt, limits, nodes);
                    let child = expect_child(state, mv);
                    let score = -searcher.negamax(&child, depth - 1, -INF, INF, 1);
                    (mv, score, searcher.horizon, searcher.stopped)
                })
                .collect()
        })
        .collect();
    let results: Vec<(Move, i32, bool, bool)> = per_chunk.into_iter().flatten().collect();

    let stopped = results.iter().any(|r| r.3);
    if stopped {
        return (None, false, true);
    }
    // `collect` keeps root order, so ties go to the earlier move as in the sequential search.
    let mut best: Option<(Move, i32)> = None;
    for &(mv, score, _, _) in &results {
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    let horizon = results.iter().any(|r| r.2);
    let proven = !horizon || best.is_some_and(|(_, s)| is_decisive(s));
    (best, proven, false)
}
