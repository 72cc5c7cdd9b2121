//! Zobrist hashing for Quarto positions.
//!
//! The key of a position is the XOR of one random value per placed
//! (piece, cell) pair and one for the pending piece:
//! - Each piece on each cell (16 pieces × 16 cells = 256 values)
//! - Pending piece (16 values)
//!
//! The pool is not hashed; it is whatever is neither placed nor pending.

use crate::piece::{PIECE_COUNT, Piece};

/// Pre-computed random values for Zobrist hashing.
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Indexed by [piece id][cell]
    pub pieces: [[u64; 16]; PIECE_COUNT],
    /// Indexed by pending piece id
    pub pending: [u64; PIECE_COUNT],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Generate keys with xorshift64 from a fixed seed.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x51A2_70C0_FFEE_1234u64;

        let mut pieces = [[0u64; 16]; PIECE_COUNT];
        let mut piece = 0;
        while piece < PIECE_COUNT {
            let mut cell = 0;
            while cell < 16 {
                state = xorshift64(state);
                pieces[piece][cell] = state;
                cell += 1;
            }
            piece += 1;
        }

        let mut pending = [0u64; PIECE_COUNT];
        let mut i = 0;
        while i < PIECE_COUNT {
            state = xorshift64(state);
            pending[i] = state;
            i += 1;
        }

        ZobristKeys { pieces, pending }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, cell: u8) -> u64 {
        self.pieces[piece.idx()][cell as usize]
    }

    #[inline(always)]
    pub fn pending_key(&self, piece: Piece) -> u64 {
        self.pending[piece.idx()]
    }
}

/// Global static Zobrist keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();
