use thiserror::Error;

/// Reasons a move is refused. A refused move leaves the match state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("a piece is pending but the move has no position")]
    MissingPosition,

    #[error("position {0} is not on the board (expected 0..16)")]
    PositionOutOfRange(usize),

    #[error("position {0} is already occupied")]
    PositionOccupied(u8),

    #[error("the move must name the next piece to play")]
    MissingNextPiece,

    #[error("piece index {index} is out of range for a pool of {pool_len}")]
    InvalidPieceIndex { index: usize, pool_len: usize },

    #[error("there is no quarto on the board")]
    FalseQuartoClaim,

    #[error("the game is already over")]
    GameAlreadyOver,
}
