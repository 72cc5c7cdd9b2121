use serde::{Deserialize, Serialize};

use crate::piece::Piece;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// A move as it crosses the transport boundary.
///
/// `next_piece` is an index into the pool as it stands after this move's
/// placement, not a permanent piece id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_piece: Option<usize>,
    #[serde(default)]
    pub quarto: bool,
}

impl MoveRequest {
    /// The opening move: nothing to place, only a piece to hand over.
    pub fn opening(next_piece: usize) -> Self {
        Self {
            position: None,
            next_piece: Some(next_piece),
            quarto: false,
        }
    }

    pub fn place(position: usize, next_piece: usize) -> Self {
        Self {
            position: Some(position),
            next_piece: Some(next_piece),
            quarto: false,
        }
    }

    pub fn with_claim(mut self) -> Self {
        self.quarto = true;
        self
    }
}

/// A move with its piece named by identity rather than by pool index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub position: Option<u8>,
    pub next_piece: Option<Piece>,
    pub quarto: bool,
}

impl Move {
    pub fn new(position: Option<u8>, next_piece: Option<Piece>) -> Self {
        Self {
            position,
            next_piece,
            quarto: false,
        }
    }
}

/// What the mover still owes when it is their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Opening turn: no piece pending, only a piece to choose.
    AwaitingPieceChoice,
    /// A piece is pending and must be placed first.
    AwaitingPlacement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress(Phase),
    Won(Player),
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinnerOutcome {
    None,
    Player(Player),
    Draw,
}
