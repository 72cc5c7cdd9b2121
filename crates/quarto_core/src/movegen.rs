use crate::{board::Board, pool::Pool, state::MatchState, types::Move};

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(state: &MatchState) -> Vec<Move> {
    let mut out = Vec::with_capacity(256);
    legal_moves_into(state, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// A placement that leaves a quarto on the board yields a single claiming
/// move; claiming can only be better than letting the opponent claim it.
pub fn legal_moves_into(state: &MatchState, out: &mut Vec<Move>) {
    out.clear();
    if state.is_over() {
        return;
    }

    let choosable = state.choosable();
    let Some(piece) = state.pending_piece() else {
        out.extend(choosable.iter().map(|p| Move::new(None, Some(p))));
        return;
    };

    let board = state.board();
    for cell in board.free_cells() {
        let mut after = *board;
        after.set_piece(cell, Some(piece));
        if after.has_quarto() {
            out.push(Move {
                position: Some(cell),
                next_piece: choosable.iter().next(),
                quarto: true,
            });
        } else if choosable.is_empty() {
            out.push(Move::new(Some(cell), None));
        } else {
            out.extend(choosable.iter().map(|p| Move::new(Some(cell), Some(p))));
        }
    }
}

/// Claiming moves available to the mover.
pub fn winning_moves(state: &MatchState) -> Vec<Move> {
    let mut moves = legal_moves(state);
    moves.retain(|m| m.quarto);
    moves
}

/// Whether the opponent could claim a quarto after being handed `piece` on `board`.
pub fn gives_away_win(board: &Board, piece: crate::piece::Piece) -> bool {
    board.has_quarto() || board.free_cells().any(|c| board.completes_quarto(c, piece))
}

/// Candidates the opponent cannot immediately win with.
pub fn safe_pieces(board: &Board, candidates: Pool) -> Pool {
    if board.has_quarto() {
        return Pool::empty();
    }
    candidates
        .iter()
        .filter(|&p| !gives_away_win(board, p))
        .collect()
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
