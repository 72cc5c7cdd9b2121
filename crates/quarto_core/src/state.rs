//! The match state machine.
//!
//! Every mutation goes through [`MatchState::apply_move`], which builds the
//! successor on a copy and only commits it when the whole move is accepted.

use tracing::debug;

use crate::board::{Board, CELLS};
use crate::error::MoveRejection;
use crate::piece::Piece;
use crate::pool::Pool;
use crate::types::*;
use crate::zobrist::ZOBRIST;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatchState {
    board: Board,
    pool: Pool,
    pending: Option<Piece>,
    current_player: Player,
    quarto_claimed: bool,
    status: GameStatus,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Empty board, full pool, Player One to move and choose the first piece.
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            pool: Pool::full(),
            pending: None,
            current_player: Player::One,
            quarto_claimed: false,
            status: GameStatus::InProgress(Phase::AwaitingPieceChoice),
        }
    }

    /// Builds an in-progress state from a board and the piece the mover must place.
    ///
    /// The pool is everything not on the board. Returns `None` when the pieces
    /// are inconsistent: the pending piece already placed, nothing pending on a
    /// board that still has room and pieces on it, or a quarto already on the board.
    pub fn from_position(board: Board, pending: Option<Piece>, to_move: Player) -> Option<Self> {
        let pool: Pool = Piece::ALL.into_iter().filter(|&p| !board.contains(p)).collect();
        let placed = board.placed_count();
        if pool.len() + placed != Piece::ALL.len() || board.has_quarto() {
            return None;
        }
        let status = match pending {
            Some(p) if !pool.contains(p) => return None,
            Some(_) => GameStatus::InProgress(Phase::AwaitingPlacement),
            None if placed == 0 => GameStatus::InProgress(Phase::AwaitingPieceChoice),
            None if board.is_full() => GameStatus::Drawn,
            None => return None,
        };
        Some(Self {
            board,
            pool,
            pending,
            current_player: to_move,
            quarto_claimed: false,
            status,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pool(&self) -> Pool {
        self.pool
    }

    /// Pieces the mover may hand over after placing the pending one.
    pub fn choosable(&self) -> Pool {
        match self.pending {
            Some(p) => self.pool.without(p),
            None => self.pool,
        }
    }

    /// Number of unplaced pieces, the pending one included.
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn pending_piece(&self) -> Option<Piece> {
        self.pending
    }

    /// Pool index of the pending piece, as the opponent named it.
    pub fn pending_index(&self) -> Option<usize> {
        self.pending.and_then(|p| self.pool.index_of(p))
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn quarto_claimed(&self) -> bool {
        self.quarto_claimed
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Whether the board holds a completed quarto line, claimed or not.
    pub fn check_line_win(&self) -> bool {
        self.board.has_quarto()
    }

    pub fn is_drawn(&self) -> bool {
        self.status == GameStatus::Drawn
    }

    pub fn winner(&self) -> WinnerOutcome {
        match self.status {
            GameStatus::Won(p) => WinnerOutcome::Player(p),
            GameStatus::Drawn => WinnerOutcome::Draw,
            GameStatus::InProgress(_) => WinnerOutcome::None,
        }
    }

    /// Zobrist key over board and pending piece. The pool follows from those two.
    pub fn position_hash(&self) -> u64 {
        let mut h = 0u64;
        for (cell, piece) in self.board.placed() {
            h ^= ZOBRIST.piece_key(piece, cell);
        }
        if let Some(p) = self.pending {
            h ^= ZOBRIST.pending_key(p);
        }
        h
    }

    /// Validates and applies `req`. On rejection `self` is left exactly as it was.
    pub fn apply_move(&mut self, req: &MoveRequest) -> Result<GameStatus, MoveRejection> {
        let next = self.successor(req)?;
        *self = next;
        Ok(self.status)
    }

    /// Applies a move whose next piece is named by identity.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, MoveRejection> {
        self.apply_move(&mv.to_request(self))
    }

    /// The state after `mv`, leaving `self` untouched.
    pub fn child(&self, mv: Move) -> Result<MatchState, MoveRejection> {
        self.successor(&mv.to_request(self))
    }

    fn successor(&self, req: &MoveRequest) -> Result<MatchState, MoveRejection> {
        if self.status.is_terminal() {
            return Err(MoveRejection::GameAlreadyOver);
        }

        let mut next = *self;
        next.quarto_claimed = false;

        if let Some(piece) = self.pending {
            let pos = req.position.ok_or(MoveRejection::MissingPosition)?;
            if pos >= CELLS {
                return Err(MoveRejection::PositionOutOfRange(pos));
            }
            let cell = pos as u8;
            if !next.board.is_free(cell) {
                return Err(MoveRejection::PositionOccupied(cell));
            }
            next.board.set_piece(cell, Some(piece));
            next.pool.remove(piece);
        } else if let Some(pos) = req.position {
            debug!(pos, "position on the opening move ignored");
        }

        next.pending = if next.pool.is_empty() {
            None
        } else {
            let index = req.next_piece.ok_or(MoveRejection::MissingNextPiece)?;
            let piece = next
                .pool
                .get(index)
                .ok_or(MoveRejection::InvalidPieceIndex {
                    index,
                    pool_len: next.pool.len(),
                })?;
            Some(piece)
        };

        next.status = if req.quarto {
            if !next.board.has_quarto() {
                return Err(MoveRejection::FalseQuartoClaim);
            }
            next.quarto_claimed = true;
            GameStatus::Won(self.current_player)
        } else if next.board.is_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress(Phase::AwaitingPlacement)
        };

        next.current_player = self.current_player.other();
        Ok(next)
    }
}

impl Move {
    /// Expresses this move in pool-index form relative to `state`.
    ///
    /// A piece that cannot be handed over from `state` maps to no index, which
    /// `apply_move` rejects unless the pool runs out.
    pub fn to_request(&self, state: &MatchState) -> MoveRequest {
        MoveRequest {
            position: self.position.map(usize::from),
            next_piece: self.next_piece.and_then(|p| state.choosable().index_of(p)),
            quarto: self.quarto,
        }
    }
}

/// Pure form of [`MatchState::apply_move`].
pub fn apply_move(state: &MatchState, req: &MoveRequest) -> Result<MatchState, MoveRejection> {
    state.successor(req)
}

/// Outcome of `state` as the transport layer sees it.
pub fn winner(state: &MatchState) -> WinnerOutcome {
    state.winner()
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
